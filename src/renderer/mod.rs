//! Geometry generation and GPU instance packing.
//!
//! [`geometry`] builds the transform-free primitive group; [`impostor`]
//! flattens it into `#[repr(C)]` instance arrays for ray-cast sphere and
//! capsule shaders.

pub mod geometry;
pub mod impostor;
