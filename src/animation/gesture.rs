//! Time-driven finger gestures.
//!
//! A gesture is a pure function of elapsed time that yields one bend angle,
//! applied uniformly to all three joints of a finger as a rotation about
//! the joint-local Z axis.

use std::f64::consts::FRAC_PI_3;

use glam::Mat4;

use crate::options::GestureOptions;
use crate::skeleton::FingerJoints;

/// Fully bent joint angle in radians (60°).
pub const MAX_JOINT_ANGLE: f64 = FRAC_PI_3;

/// Finger gesture variants.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// Holds every joint at identity.
    #[default]
    Idle,
    /// Ramps the joint angle down from 60° to 0°.
    Straighten {
        /// Angular speed in radians per second.
        speed: f64,
    },
    /// Ramps the joint angle up from 0° to 60°.
    Bend {
        /// Angular speed in radians per second.
        speed: f64,
    },
}

impl Gesture {
    /// Joint angle in radians after `elapsed` seconds.
    ///
    /// Negative elapsed time counts as zero. The result always lies in
    /// `[0, MAX_JOINT_ANGLE]`.
    #[must_use]
    pub fn angle(&self, elapsed: f64) -> f64 {
        let elapsed = elapsed.max(0.0);
        match *self {
            Self::Idle => 0.0,
            Self::Straighten { speed } => {
                (MAX_JOINT_ANGLE - elapsed * speed).max(0.0)
            }
            Self::Bend { speed } => (elapsed * speed).min(MAX_JOINT_ANGLE),
        }
    }

    /// Joint transforms for a gesture started at `start_time`.
    #[must_use]
    pub fn evaluate(&self, start_time: f64, now: f64) -> FingerJoints {
        match self {
            Self::Idle => FingerJoints::uniform(Mat4::IDENTITY),
            _ => {
                let angle = self.angle(now - start_time) as f32;
                FingerJoints::uniform(Mat4::from_rotation_z(angle))
            }
        }
    }
}

/// The owned gesture instances hand shapes are built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSet {
    /// Relaxed finger.
    pub idle: Gesture,
    /// Extending finger.
    pub straighten: Gesture,
    /// Curling finger.
    pub bend: Gesture,
}

impl GestureSet {
    /// Straighten and bend at the same angular speed.
    #[must_use]
    pub fn with_speed(speed: f64) -> Self {
        Self {
            idle: Gesture::Idle,
            straighten: Gesture::Straighten { speed },
            bend: Gesture::Bend { speed },
        }
    }

    /// Build from options.
    #[must_use]
    pub fn from_options(options: &GestureOptions) -> Self {
        Self::with_speed(options.speed)
    }
}

impl Default for GestureSet {
    fn default() -> Self {
        Self::from_options(&GestureOptions::default())
    }
}
