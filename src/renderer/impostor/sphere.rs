//! Sphere instances for atoms.

use crate::renderer::geometry::Sphere;

/// Per-instance data for sphere impostor.
/// Layout matches a WGSL `SphereInstance { center: vec4f, color: vec4f }`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereInstance {
    /// xyz = position, w = radius
    pub center: [f32; 4],
    /// xyz = RGB color, w = shininess
    pub color: [f32; 4],
}

impl From<&Sphere> for SphereInstance {
    fn from(s: &Sphere) -> Self {
        let c = s.material.color;
        Self {
            center: [s.center.x, s.center.y, s.center.z, s.radius],
            color: [c[0], c[1], c[2], s.material.shininess],
        }
    }
}
