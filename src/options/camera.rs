use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose, projection and control parameters.
pub struct CameraOptions {
    /// Initial world-space position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial viewing direction. Need not be unit length.
    #[schemars(skip)]
    pub front: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Translation speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 1.0, max = 50.0), extend("step" = 0.5))]
    pub movement_speed: f32,
    /// Roll speed in radians per second.
    #[schemars(title = "Roll Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub roll_speed: f32,
    /// Pointer rotation in radians per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.001, max = 0.02), extend("step" = 0.001))]
    pub mouse_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -40.0],
            front: [0.0, 0.0, 1.0],
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            movement_speed: 10.0,
            roll_speed: 1.0,
            mouse_sensitivity: 0.005,
        }
    }
}
