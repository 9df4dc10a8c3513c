//! Capsule instances for bond strands.

use crate::renderer::geometry::Cylinder;

/// Per-instance data for capsule impostor (one bond strand).
/// Layout matches a WGSL `CapsuleInstance` of three `vec4f`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CapsuleInstance {
    /// Endpoint A position (xyz), radius (w)
    pub endpoint_a: [f32; 4],
    /// Endpoint B position (xyz), bond index (w) - packed as float
    pub endpoint_b: [f32; 4],
    /// RGB color, w = shininess
    pub color: [f32; 4],
}

impl From<&Cylinder> for CapsuleInstance {
    fn from(c: &Cylinder) -> Self {
        let rgb = c.material.color;
        Self {
            endpoint_a: [c.start.x, c.start.y, c.start.z, c.radius],
            endpoint_b: [c.end.x, c.end.y, c.end.z, c.bond as f32],
            color: [rgb[0], rgb[1], rgb[2], c.material.shininess],
        }
    }
}
