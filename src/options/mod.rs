//! Centralized viewer options with TOML preset support.
//!
//! All tweakable settings (geometry sizes, colors, camera, lighting,
//! animation, parsing policy) are consolidated here. Options serialize
//! to/from TOML for presets stored in `assets/view_presets/`.

mod animation;
mod camera;
mod colors;
mod geometry;
mod lighting;
mod parse;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::{rgb_from_hex, ColorOptions};
pub use geometry::GeometryOptions;
pub use lighting::LightingOptions;
pub use parse::{ParseOptions, Validation};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[geometry]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Atom and bond sizes.
    pub geometry: GeometryOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Auto-rotation and frame pacing.
    pub animation: AnimationOptions,
    /// Molfile reader policy.
    pub parse: ParseOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Io`] if the file cannot be read and
    /// [`MolviewError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, MolviewError> {
        let content = std::fs::read_to_string(path).map_err(MolviewError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::OptionsParse`] if the text is not valid TOML.
    pub fn from_toml(content: &str) -> Result<Self, MolviewError> {
        toml::from_str(content)
            .map_err(|e| MolviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::OptionsParse`] on serialization failure and
    /// [`MolviewError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MolviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolviewError::Io)?;
        }
        std::fs::write(path, content).map_err(MolviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[geometry]
bond_radius = 0.05

[parse]
validation = "lenient"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.geometry.bond_radius, 0.05);
        assert_eq!(opts.parse.validation, Validation::Lenient);
        // Everything else should be default
        assert_eq!(opts.geometry.hydrogen_radius, 0.1);
        assert_eq!(opts.camera.fovy, 75.0);
        assert!(opts.animation.auto_rotate);
    }

    #[test]
    fn shipped_default_preset_matches_defaults() {
        let preset = include_str!("../../assets/view_presets/default.toml");
        assert_eq!(Options::from_toml(preset).unwrap(), Options::default());
    }

    #[test]
    fn invalid_toml_is_options_parse_error() {
        let err = Options::from_toml("[geometry\nbond_radius = ").unwrap_err();
        assert!(matches!(err, MolviewError::OptionsParse(_)));
    }

    #[test]
    fn default_palette_matches_hex_colors() {
        let colors = ColorOptions::default();
        assert_eq!(colors.hydrogen, [1.0, 1.0, 1.0]);
        assert_eq!(colors.atom, [128.0 / 255.0; 3]);
        assert_eq!(rgb_from_hex(0x00_80_ff), [0.0, 128.0 / 255.0, 1.0]);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("molview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.animation.auto_rotate = false;
        opts.save(&dir.join("still.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("still.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["still".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("parse"));
        assert!(!props.contains_key("colors"));

        let geometry = &props["geometry"]["properties"];
        assert!(geometry.get("bond_radius").is_some());
        assert!(geometry.get("sphere_width_segments").is_none());
    }
}
