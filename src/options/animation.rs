use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Host-side auto-rotation and frame pacing.
pub struct AnimationOptions {
    /// Spin the attached molecule every frame.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Radians added about the Y axis per frame.
    #[schemars(title = "Spin Y", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub rotation_step_y: f32,
    /// Radians added about the Z axis per frame.
    #[schemars(title = "Spin Z", range(min = 0.0, max = 0.1), extend("step" = 0.001))]
    pub rotation_step_z: f32,
    /// Frame cap for the host loop (0 = unlimited).
    #[schemars(skip)]
    pub target_fps: u32,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            rotation_step_y: 0.005,
            rotation_step_z: 0.005,
            target_fps: 60,
        }
    }
}
