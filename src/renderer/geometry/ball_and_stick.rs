//! Ball-and-stick geometry for a parsed molecule.
//!
//! Atoms become spheres (hydrogen small and white, everything else larger
//! and gray). Each bond becomes one, two or three parallel cylinders,
//! separated along an offset axis perpendicular to both the bond and
//! [`CYLINDER_UP`]. Bond cylinders share a single material regardless of
//! the atoms they join.

use glam::{Quat, Vec3};

use super::primitive::{
    Cylinder, Material, MoleculeGroup, RenderPrimitive, Sphere, CYLINDER_UP,
};
use crate::model::{Atom, Bond, BondMultiplicity, ElementClass, Molecule};
use crate::options::{ColorOptions, GeometryOptions};

/// Offset axis used when the bond runs along [`CYLINDER_UP`] (or has no
/// length), where the cross product vanishes.
pub const FALLBACK_OFFSET_AXIS: Vec3 = Vec3::X;

/// Minimal rotation taking [`CYLINDER_UP`] onto `direction`.
///
/// Anti-parallel directions rotate half a turn about a fixed perpendicular
/// axis; a zero-length direction yields the identity.
#[must_use]
pub fn bond_orientation(direction: Vec3) -> Quat {
    if direction.length_squared() == 0.0 {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(CYLINDER_UP, direction.normalize())
}

/// Unit vector perpendicular to `direction` and [`CYLINDER_UP`], used to
/// separate the strands of multi-bonds.
///
/// Falls back to [`FALLBACK_OFFSET_AXIS`] when the two are parallel.
#[must_use]
pub fn offset_axis(direction: Vec3) -> Vec3 {
    direction
        .cross(CYLINDER_UP)
        .try_normalize()
        .unwrap_or(FALLBACK_OFFSET_AXIS)
}

/// Signed strand offsets for a bond multiplicity.
#[must_use]
pub fn strand_offsets(
    multiplicity: BondMultiplicity,
    geometry: &GeometryOptions,
) -> Vec<f32> {
    match multiplicity {
        BondMultiplicity::Single => vec![0.0],
        BondMultiplicity::Double => {
            let d = geometry.double_bond_offset;
            vec![d, -d]
        }
        BondMultiplicity::Triple => {
            let d = geometry.triple_bond_offset;
            vec![d, 0.0, -d]
        }
    }
}

/// Builds [`MoleculeGroup`]s with fixed geometry and color settings.
pub struct BallAndStickBuilder<'a> {
    geometry: &'a GeometryOptions,
    colors: &'a ColorOptions,
}

impl<'a> BallAndStickBuilder<'a> {
    /// Create a builder borrowing the given settings.
    #[must_use]
    pub fn new(geometry: &'a GeometryOptions, colors: &'a ColorOptions) -> Self {
        Self { geometry, colors }
    }

    /// Build the group: one sphere per atom, then the cylinders of every
    /// bond in bond order.
    ///
    /// Pure function of the molecule and settings; building twice yields
    /// equal groups.
    #[must_use]
    pub fn build(&self, molecule: &Molecule) -> MoleculeGroup {
        let mut group = MoleculeGroup {
            name: molecule.name().to_owned(),
            children: Vec::with_capacity(
                molecule.atoms().len() + molecule.bonds().len(),
            ),
        };

        for (i, atom) in molecule.atoms().iter().enumerate() {
            group.add(RenderPrimitive::Sphere(self.atom_sphere(i, atom)));
        }

        for (i, bond) in molecule.bonds().iter().enumerate() {
            let Some((a, b)) = molecule.endpoints(bond) else {
                continue;
            };
            for cylinder in self.bond_cylinders(i, bond, a, b) {
                group.add(RenderPrimitive::Cylinder(cylinder));
            }
        }

        log::debug!(
            "built '{}': {} spheres, {} cylinders",
            group.name,
            molecule.atoms().len(),
            group.len() - molecule.atoms().len()
        );
        group
    }

    /// Sphere for one atom.
    #[must_use]
    pub fn atom_sphere(&self, index: usize, atom: &Atom) -> Sphere {
        let class = atom.class();
        let (radius, color) = match class {
            ElementClass::Hydrogen => {
                (self.geometry.hydrogen_radius, self.colors.hydrogen)
            }
            ElementClass::Heavy => (self.geometry.atom_radius, self.colors.atom),
        };
        Sphere {
            atom: index,
            center: atom.position(),
            radius,
            class,
            material: Material {
                color,
                shininess: self.colors.atom_shininess,
            },
            width_segments: self.geometry.sphere_width_segments,
            height_segments: self.geometry.sphere_height_segments,
        }
    }

    /// Cylinders for one bond, one per strand.
    #[must_use]
    pub fn bond_cylinders(
        &self,
        index: usize,
        bond: &Bond,
        a: &Atom,
        b: &Atom,
    ) -> Vec<Cylinder> {
        let start = a.position();
        let end = b.position();
        let direction = end - start;
        let length = direction.length();
        let orientation = bond_orientation(direction);
        let axis = offset_axis(direction);
        let midpoint = (start + end) * 0.5;
        let material = Material {
            color: self.colors.bond,
            shininess: self.colors.bond_shininess,
        };

        strand_offsets(bond.multiplicity(), self.geometry)
            .into_iter()
            .map(|offset| {
                let shift = axis * offset;
                Cylinder {
                    bond: index,
                    start: start + shift,
                    end: end + shift,
                    center: midpoint + shift,
                    orientation,
                    length,
                    radius: self.geometry.bond_radius,
                    offset,
                    material,
                    radial_segments: self.geometry.bond_radial_segments,
                }
            })
            .collect()
    }
}

/// Build a group with default geometry and colors.
#[must_use]
pub fn build_molecule_group(molecule: &Molecule) -> MoleculeGroup {
    let geometry = GeometryOptions::default();
    let colors = ColorOptions::default();
    BallAndStickBuilder::new(&geometry, &colors).build(molecule)
}
