use serde::{Deserialize, Serialize};

/// Convert a packed `0xRRGGBB` color to RGB floats in `[0, 1]`.
#[must_use]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Color palette and material parameters for the molecule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB color for hydrogen spheres.
    pub hydrogen: [f32; 3],
    /// RGB color for all other atom spheres.
    pub atom: [f32; 3],
    /// RGB color shared by every bond cylinder.
    pub bond: [f32; 3],
    /// Phong shininess for atom spheres.
    pub atom_shininess: f32,
    /// Phong shininess for bond cylinders.
    pub bond_shininess: f32,
    /// Scene clear color.
    pub background: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            hydrogen: rgb_from_hex(0xff_ff_ff),
            atom: rgb_from_hex(0x80_80_80),
            bond: rgb_from_hex(0xff_ff_ff),
            atom_shininess: 100.0,
            bond_shininess: 30.0,
            background: rgb_from_hex(0x00_00_00),
        }
    }
}
