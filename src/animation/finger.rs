use super::gesture::Gesture;
use crate::skeleton::FingerJoints;

/// Binds a gesture to one finger's three joint slots.
///
/// The animator owns no joint storage. Each [`update`](Self::update)
/// writes into slots owned by the caller; with no gesture bound the slots
/// are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FingerAnimator {
    gesture: Option<Gesture>,
    start_time: f64,
}

impl FingerAnimator {
    /// Animator bound to `gesture`, started at time zero.
    #[must_use]
    pub fn new(gesture: Option<Gesture>) -> Self {
        Self {
            gesture,
            start_time: 0.0,
        }
    }

    /// Currently bound gesture.
    #[must_use]
    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    /// Time the bound gesture was started, in seconds.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Bind a gesture and restart its ramp at `now`.
    ///
    /// Rebinding mid-motion restarts from the new gesture's zero point, so
    /// the joints snap rather than blend.
    pub fn set_gesture(&mut self, gesture: Option<Gesture>, now: f64) {
        self.gesture = gesture;
        self.start_time = now;
    }

    /// Evaluate the bound gesture at `now` into `joints`.
    pub fn update(&self, now: f64, joints: &mut FingerJoints) {
        if let Some(gesture) = &self.gesture {
            *joints = gesture.evaluate(self.start_time, now);
        }
    }
}
