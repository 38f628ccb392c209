use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Finger gesture parameters.
pub struct GestureOptions {
    /// Angular speed of straighten and bend in radians per second.
    #[schemars(title = "Gesture Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub speed: f64,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self { speed: 0.8 }
    }
}
