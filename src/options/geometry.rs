use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Ball-and-stick sizes and tessellation hints.
pub struct GeometryOptions {
    /// Sphere radius for hydrogen atoms.
    #[schemars(title = "Hydrogen Radius", range(min = 0.02, max = 1.0), extend("step" = 0.01))]
    pub hydrogen_radius: f32,
    /// Sphere radius for every other atom.
    #[schemars(title = "Atom Radius", range(min = 0.02, max = 1.0), extend("step" = 0.01))]
    pub atom_radius: f32,
    /// Bond cylinder radius.
    #[schemars(title = "Bond Radius", range(min = 0.005, max = 0.3), extend("step" = 0.005))]
    pub bond_radius: f32,
    /// Strand separation for double bonds (each strand sits at ±offset).
    #[schemars(title = "Double Bond Offset", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub double_bond_offset: f32,
    /// Outer strand offset for triple bonds (strands at +offset, 0, -offset).
    #[schemars(title = "Triple Bond Offset", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub triple_bond_offset: f32,
    /// Longitudinal segments for sphere meshes.
    #[schemars(skip)]
    pub sphere_width_segments: u32,
    /// Latitudinal segments for sphere meshes.
    #[schemars(skip)]
    pub sphere_height_segments: u32,
    /// Radial segments for bond cylinder meshes.
    #[schemars(skip)]
    pub bond_radial_segments: u32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            hydrogen_radius: 0.1,
            atom_radius: 0.2,
            bond_radius: 0.03,
            double_bond_offset: 0.05,
            triple_bond_offset: 0.1,
            sphere_width_segments: 16,
            sphere_height_segments: 16,
            bond_radial_segments: 8,
        }
    }
}
