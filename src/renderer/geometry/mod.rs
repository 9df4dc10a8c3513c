//! Scene geometry for a parsed molecule.
//!
//! [`ball_and_stick`] turns a [`crate::model::Molecule`] into a
//! [`MoleculeGroup`] of typed primitives. The group is engine-agnostic:
//! positions, orientations, radii and materials only.

/// Ball-and-stick builder (atoms as spheres, bonds as offset cylinders).
pub mod ball_and_stick;
mod bounds;
mod primitive;

pub use ball_and_stick::{build_molecule_group, BallAndStickBuilder};
pub use bounds::Aabb;
pub use primitive::{
    Cylinder, Material, MoleculeGroup, RenderPrimitive, Sphere, CYLINDER_UP,
};
