use glam::Vec3;

use crate::options::{ColorOptions, LightingOptions};

/// Lighting state in a shader-friendly layout (64 bytes).
///
/// ```text
///   light_dir: vec3<f32>         (offset 0)
///   directional_intensity: f32   (offset 12)
///   light_color: vec3<f32>       (offset 16)
///   ambient_intensity: f32       (offset 28)
///   ambient_color: vec3<f32>     (offset 32)
///   _pad0: f32                   (offset 44)
///   background: vec3<f32>        (offset 48)
///   _pad1: f32                   (offset 60)
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Direction the light travels (from its position towards the origin).
    pub light_dir: [f32; 3],
    /// Directional light intensity.
    pub directional_intensity: f32,
    /// Directional light color.
    pub light_color: [f32; 3],
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Ambient light color.
    pub ambient_color: [f32; 3],
    /// Padding.
    pub _pad0: f32,
    /// Clear color.
    pub background: [f32; 3],
    /// Padding.
    pub _pad1: f32,
}

impl LightingUniform {
    /// Build from the lighting options and the palette's background.
    #[must_use]
    pub fn from_options(lighting: &LightingOptions, colors: &ColorOptions) -> Self {
        let position = Vec3::from(lighting.directional_position);
        let light_dir = (-position).normalize_or(Vec3::NEG_Y);
        Self {
            light_dir: light_dir.to_array(),
            directional_intensity: lighting.directional_intensity,
            light_color: lighting.directional_color,
            ambient_intensity: lighting.ambient_intensity,
            ambient_color: lighting.ambient_color,
            _pad0: 0.0,
            background: colors.background,
            _pad1: 0.0,
        }
    }
}

impl Default for LightingUniform {
    fn default() -> Self {
        Self::from_options(&LightingOptions::default(), &ColorOptions::default())
    }
}
