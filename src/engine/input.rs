//! Input application for [`HandEngine`].

use super::HandEngine;
use crate::input::{FrameInput, KeyAction};

impl HandEngine {
    /// Apply one frame of input at time `now`, `dt` seconds after the
    /// previous frame.
    ///
    /// Discrete actions run first, in press order, so a patrol toggled
    /// this frame already gates this frame's movement. Continuous actions,
    /// pointer rotation, zoom and light movement follow.
    pub fn apply_input(&mut self, frame: &FrameInput, now: f64, dt: f32) {
        for &action in &frame.triggered {
            self.apply_discrete(action, now);
        }

        for action in frame.continuous() {
            if let Some(direction) = action.camera_move() {
                self.camera.move_in(direction, dt);
            } else if let Some(direction) = action.camera_roll() {
                self.camera.roll(direction, dt);
            } else if let Some(direction) = action.light_move() {
                self.light.move_in(direction, dt);
            }
        }

        let delta = frame.pointer_delta;
        self.camera.rotate_from_pointer_delta(delta.x, delta.y);
        if frame.scroll != 0.0 {
            self.camera.zoom(frame.scroll);
        }
    }

    fn apply_discrete(&mut self, action: KeyAction, now: f64) {
        if let Some(shape) = action.hand_shape() {
            self.hand.set_shape(shape, &self.gestures, now);
            return;
        }
        match action {
            KeyAction::SetDestination => self.camera.set_destination_here(),
            KeyAction::TogglePatrol => self.camera.toggle_patrol(now),
            KeyAction::Quit => {
                if !self.quit_requested {
                    log::info!("[engine] quit requested");
                }
                self.quit_requested = true;
            }
            _ => log::debug!("[engine] {action:?} is not a discrete action"),
        }
    }
}
