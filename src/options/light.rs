use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Light", inline)]
#[serde(default)]
/// Point light placement and color.
pub struct LightOptions {
    /// Initial world-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// RGB color in `[0, 1]`.
    #[schemars(title = "Color")]
    pub color: [f32; 3],
    /// Translation speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub movement_speed: f32,
}

impl Default for LightOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -35.0],
            color: [1.0, 1.0, 1.0],
            movement_speed: 10.0,
        }
    }
}
