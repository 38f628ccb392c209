use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Patrol", inline)]
#[serde(default)]
/// Patrol timing and the destination preset applied at startup.
pub struct PatrolOptions {
    /// Travel speed along the patrol path in world units per second.
    #[schemars(title = "Patrol Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Lower bound on the patrol period in seconds.
    #[schemars(skip)]
    pub min_period: f64,
    /// Whether `destination` is stored before the first frame.
    #[schemars(skip)]
    pub preset_destination: bool,
    /// Destination preset.
    #[schemars(skip)]
    pub destination: DestinationOptions,
}

impl Default for PatrolOptions {
    fn default() -> Self {
        Self {
            speed: 5.0,
            min_period: 1.0 / 60.0,
            preset_destination: true,
            destination: DestinationOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// A destination pose.
pub struct DestinationOptions {
    /// World-space position.
    pub position: [f32; 3],
    /// Orientation quaternion as `[x, y, z, w]`; normalized when applied.
    pub orientation: [f32; 4],
}

impl Default for DestinationOptions {
    fn default() -> Self {
        Self {
            position: [1.46, 43.47, -12.19],
            orientation: [-0.77, 0.04, -0.00, 0.64],
        }
    }
}
