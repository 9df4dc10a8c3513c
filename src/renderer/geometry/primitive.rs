use glam::{Quat, Vec3};
use serde::Serialize;

use super::bounds::Aabb;
use crate::model::ElementClass;

/// Canonical long axis of an unrotated cylinder.
pub const CYLINDER_UP: Vec3 = Vec3::Y;

/// Phong-style surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Material {
    /// RGB color in `[0, 1]`.
    pub color: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
}

/// Atom sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sphere {
    /// Index of the source atom.
    pub atom: usize,
    /// Sphere center (the atom position).
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Element class that selected radius and color.
    pub class: ElementClass,
    /// Surface material.
    pub material: Material,
    /// Longitudinal tessellation hint.
    pub width_segments: u32,
    /// Latitudinal tessellation hint.
    pub height_segments: u32,
}

impl Sphere {
    /// Axis-aligned bounds.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let r = Vec3::splat(self.radius);
        Aabb::new(self.center - r, self.center + r)
    }
}

/// One bond strand.
///
/// Stored both as endpoints and as center + orientation + length; the
/// orientation rotates [`CYLINDER_UP`] onto the strand direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cylinder {
    /// Index of the source bond.
    pub bond: usize,
    /// Strand start (first atom position plus the strand offset).
    pub start: Vec3,
    /// Strand end (second atom position plus the strand offset).
    pub end: Vec3,
    /// Midpoint of `start` and `end`.
    pub center: Vec3,
    /// Rotation from [`CYLINDER_UP`] to the bond direction.
    pub orientation: Quat,
    /// Distance between the bonded atoms.
    pub length: f32,
    /// Cylinder radius.
    pub radius: f32,
    /// Signed displacement along the bond's offset axis.
    pub offset: f32,
    /// Surface material.
    pub material: Material,
    /// Radial tessellation hint.
    pub radial_segments: u32,
}

impl Cylinder {
    /// Unit long axis in world space.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.orientation * CYLINDER_UP
    }

    /// Axis-aligned bounds of the capped cylinder.
    ///
    /// Along world axis `i` the caps extend `radius * sqrt(1 - axis_i²)`
    /// beyond the endpoints.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let axis = self.axis();
        let cap = |a: f32| (1.0 - a * a).max(0.0).sqrt() * self.radius;
        let extent = Vec3::new(cap(axis.x), cap(axis.y), cap(axis.z));
        Aabb::new(
            self.start.min(self.end) - extent,
            self.start.max(self.end) + extent,
        )
    }
}

/// A renderable shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPrimitive {
    /// Atom sphere.
    Sphere(Sphere),
    /// Bond strand.
    Cylinder(Cylinder),
}

impl RenderPrimitive {
    /// Axis-aligned bounds.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        match self {
            Self::Sphere(s) => s.bounds(),
            Self::Cylinder(c) => c.bounds(),
        }
    }
}

/// The composite node handed to the scene host.
///
/// Carries no transform of its own: placement and animation belong to the
/// host.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MoleculeGroup {
    /// Molecule title, if any.
    pub name: String,
    /// Spheres (atom order) followed by cylinders (bond order).
    pub children: Vec<RenderPrimitive>,
}

impl MoleculeGroup {
    /// Append a child primitive.
    pub fn add(&mut self, primitive: RenderPrimitive) {
        self.children.push(primitive);
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// All atom spheres.
    pub fn spheres(&self) -> impl Iterator<Item = &Sphere> {
        self.children.iter().filter_map(|p| match p {
            RenderPrimitive::Sphere(s) => Some(s),
            RenderPrimitive::Cylinder(_) => None,
        })
    }

    /// All bond cylinders.
    pub fn cylinders(&self) -> impl Iterator<Item = &Cylinder> {
        self.children.iter().filter_map(|p| match p {
            RenderPrimitive::Cylinder(c) => Some(c),
            RenderPrimitive::Sphere(_) => None,
        })
    }

    /// Number of spheres.
    #[must_use]
    pub fn sphere_count(&self) -> usize {
        self.spheres().count()
    }

    /// Number of cylinders.
    #[must_use]
    pub fn cylinder_count(&self) -> usize {
        self.cylinders().count()
    }

    /// Bounding box over every child with finite bounds. `None` when no
    /// child has finite bounds.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb> {
        self.children
            .iter()
            .map(RenderPrimitive::bounds)
            .filter(Aabb::is_finite)
            .reduce(|a, b| a.union(&b))
    }
}
