//! Options methods for [`HandEngine`].

use glam::Vec3;

use super::HandEngine;
use crate::animation::GestureSet;
use crate::error::PhalanxError;
use crate::options::Options;

impl HandEngine {
    /// Validate and replace options, then retune every subsystem.
    ///
    /// Invalid options are rejected and the engine is left unchanged.
    /// Poses are kept: the camera, light and fingers stay where they are,
    /// and the field of view keeps its current zoom. Initial positions and
    /// the destination preset only apply when the engine is built. Fingers
    /// keep their current gestures until the next hand shape is selected.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::InvalidOption`] if `new` fails validation.
    pub fn set_options(&mut self, new: Options) -> Result<(), PhalanxError> {
        new.validate()?;
        self.options = new;
        self.apply_options();
        Ok(())
    }

    /// Push current option values to all subsystems.
    pub fn apply_options(&mut self) {
        self.apply_camera();
        self.apply_patrol();
        self.apply_light();
        self.gestures = GestureSet::from_options(&self.options.gesture);
    }

    /// Push camera tuning to the camera. The field of view is left alone
    /// so a scroll zoom survives retuning.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        let camera = self.camera.camera_mut();
        camera.znear = co.znear;
        camera.zfar = co.zfar;
        camera.movement_speed = co.movement_speed;
        camera.roll_speed = co.roll_speed;
        camera.mouse_sensitivity = co.mouse_sensitivity;
    }

    /// Push patrol tuning to the controller. A running patrol keeps its
    /// period until it is restarted.
    fn apply_patrol(&mut self) {
        self.camera.patrol_speed = self.options.patrol.speed;
        self.camera.min_period = self.options.patrol.min_period;
    }

    fn apply_light(&mut self) {
        let lo = &self.options.light;
        self.light.color = Vec3::from_array(lo.color);
        self.light.movement_speed = lo.movement_speed;
    }
}
