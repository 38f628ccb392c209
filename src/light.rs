//! Movable point light.

use glam::{Quat, Vec3};

use crate::camera::{MoveDirection, OrientableBody};
use crate::options::LightOptions;

/// A colored point light that can be pushed around the scene.
///
/// The light keeps the reference orientation, so its movement directions
/// are world-aligned: up is +Y, right is +X and forward is -Z.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    body: OrientableBody,
    /// RGB color in `[0, 1]`.
    pub color: Vec3,
    /// Translation speed in world units per second.
    pub movement_speed: f32,
}

impl LightSource {
    /// Light at `position` with the default speed.
    #[must_use]
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            body: OrientableBody::from_pose(position, Quat::IDENTITY),
            color,
            movement_speed: LightOptions::default().movement_speed,
        }
    }

    /// Build from options.
    #[must_use]
    pub fn from_options(options: &LightOptions) -> Self {
        Self {
            movement_speed: options.movement_speed,
            ..Self::new(
                Vec3::from_array(options.position),
                Vec3::from_array(options.color),
            )
        }
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// Move along a world axis for `delta_time` seconds.
    pub fn move_in(&mut self, direction: MoveDirection, delta_time: f32) {
        self.body
            .move_along(direction, self.movement_speed * delta_time);
    }
}

impl Default for LightSource {
    fn default() -> Self {
        Self::from_options(&LightOptions::default())
    }
}
