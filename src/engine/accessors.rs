//! Read-only accessors for [`HandEngine`].

use super::HandEngine;
use crate::animation::{GestureSet, HandAnimator};
use crate::camera::{PatrolController, PatrolState};
use crate::light::LightSource;
use crate::options::Options;
use crate::skeleton::SkeletonPose;

impl HandEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Camera and patrol state machine.
    #[must_use]
    pub fn camera(&self) -> &PatrolController {
        &self.camera
    }

    /// Observable patrol state.
    #[must_use]
    pub fn patrol_state(&self) -> PatrolState {
        self.camera.state()
    }

    /// The point light.
    #[must_use]
    pub fn light(&self) -> &LightSource {
        &self.light
    }

    /// Gesture instances used for hand shapes.
    #[must_use]
    pub fn gestures(&self) -> &GestureSet {
        &self.gestures
    }

    /// Per-finger gesture bindings.
    #[must_use]
    pub fn hand(&self) -> &HandAnimator {
        &self.hand
    }

    /// Joint transforms as of the last update.
    #[must_use]
    pub fn pose(&self) -> &SkeletonPose {
        &self.pose
    }

    /// Whether a quit action has been applied.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Frames advanced through [`tick`](Self::tick).
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
