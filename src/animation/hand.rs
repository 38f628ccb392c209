use serde::{Deserialize, Serialize};

use super::finger::FingerAnimator;
use super::gesture::{Gesture, GestureSet};
use crate::skeleton::{Finger, SkeletonPose};

/// Named hand poses, each assigning one gesture per finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandShape {
    /// Every finger bent.
    Fist,
    /// Index and middle fingers up.
    Victory,
    /// Every finger straightened.
    OpenPalm,
    /// Thumb and index finger out, the rest bent.
    Pistol,
    /// Thumb and pinky out, the rest bent.
    Call,
}

impl HandShape {
    /// Per-finger gestures, thumb first.
    #[must_use]
    pub fn gestures(self, set: &GestureSet) -> [Gesture; 5] {
        let GestureSet {
            idle,
            straighten,
            bend,
        } = *set;
        match self {
            Self::Fist => [bend; 5],
            Self::Victory => [bend, idle, idle, bend, bend],
            Self::OpenPalm => [straighten; 5],
            Self::Pistol => [straighten, straighten, bend, bend, bend],
            Self::Call => [straighten, bend, bend, bend, straighten],
        }
    }
}

/// Drives all five fingers of the hand.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HandAnimator {
    fingers: [FingerAnimator; 5],
}

impl HandAnimator {
    /// Every finger bound to `gesture`, started at time zero.
    #[must_use]
    pub fn new(gesture: Option<Gesture>) -> Self {
        Self {
            fingers: [FingerAnimator::new(gesture); 5],
        }
    }

    /// Animator of one finger.
    #[must_use]
    pub fn finger(&self, finger: Finger) -> &FingerAnimator {
        &self.fingers[finger.index()]
    }

    /// Rebind fingers in thumb-first order.
    ///
    /// Binds `min(gestures.len(), 5)` fingers; fingers past the end of the
    /// list keep their current gesture and start time.
    pub fn set_gestures(&mut self, gestures: &[Option<Gesture>], now: f64) {
        for (animator, gesture) in self.fingers.iter_mut().zip(gestures) {
            animator.set_gesture(*gesture, now);
        }
    }

    /// Rebind every finger to the gestures of a hand shape.
    pub fn set_shape(&mut self, shape: HandShape, set: &GestureSet, now: f64) {
        let gestures = shape.gestures(set).map(Some);
        self.set_gestures(&gestures, now);
        log::debug!("[hand] shape {shape:?}");
    }

    /// Evaluate every finger at `now` into `pose`.
    pub fn update(&self, now: f64, pose: &mut SkeletonPose) {
        for finger in Finger::ALL {
            self.fingers[finger.index()].update(now, pose.finger_mut(finger));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_3;

    use glam::Mat4;

    use super::*;
    use crate::skeleton::FingerJoints;

    fn bent() -> FingerJoints {
        FingerJoints::uniform(Mat4::from_rotation_z(FRAC_PI_3 as f32))
    }

    #[test]
    fn shapes_match_key_map() {
        let set = GestureSet::with_speed(0.8);
        let GestureSet {
            idle,
            straighten,
            bend,
        } = set;
        assert_eq!(HandShape::Fist.gestures(&set), [bend; 5]);
        assert_eq!(
            HandShape::Victory.gestures(&set),
            [bend, idle, idle, bend, bend]
        );
        assert_eq!(HandShape::OpenPalm.gestures(&set), [straighten; 5]);
        assert_eq!(
            HandShape::Pistol.gestures(&set),
            [straighten, straighten, bend, bend, bend]
        );
        assert_eq!(
            HandShape::Call.gestures(&set),
            [straighten, bend, bend, bend, straighten]
        );
    }

    #[test]
    fn short_list_binds_leading_fingers_only() {
        let mut hand = HandAnimator::new(Some(Gesture::Idle));
        let bend = Gesture::Bend { speed: 1.0 };
        hand.set_gestures(&[Some(bend), Some(bend)], 4.0);

        assert_eq!(hand.finger(Finger::Thumb).gesture(), Some(bend));
        assert_eq!(hand.finger(Finger::Index).start_time(), 4.0);
        assert_eq!(hand.finger(Finger::Middle).gesture(), Some(Gesture::Idle));
        assert_eq!(hand.finger(Finger::Middle).start_time(), 0.0);
    }

    #[test]
    fn long_list_is_truncated() {
        let mut hand = HandAnimator::default();
        let bend = Gesture::Bend { speed: 1.0 };
        hand.set_gestures(&[Some(bend); 7], 1.0);
        for finger in Finger::ALL {
            assert_eq!(hand.finger(finger).gesture(), Some(bend));
        }
    }

    #[test]
    fn fist_bends_every_finger() {
        let mut hand = HandAnimator::new(Some(Gesture::Idle));
        let set = GestureSet::with_speed(0.8);
        hand.set_shape(HandShape::Fist, &set, 0.0);

        let mut pose = SkeletonPose::default();
        hand.update(10.0, &mut pose);
        for finger in Finger::ALL {
            assert_eq!(*pose.finger(finger), bent());
        }
    }

    #[test]
    fn victory_leaves_index_and_middle_straight() {
        let mut hand = HandAnimator::new(Some(Gesture::Idle));
        let set = GestureSet::with_speed(0.8);
        hand.set_shape(HandShape::Victory, &set, 0.0);

        let mut pose = SkeletonPose::default();
        hand.update(10.0, &mut pose);
        assert_eq!(*pose.finger(Finger::Thumb), bent());
        assert_eq!(*pose.finger(Finger::Index), FingerJoints::default());
        assert_eq!(*pose.finger(Finger::Middle), FingerJoints::default());
        assert_eq!(*pose.finger(Finger::Pinky), bent());
    }

    #[test]
    fn unbound_hand_leaves_pose_untouched() {
        let hand = HandAnimator::new(None);
        let mut pose = SkeletonPose::default();
        pose.finger_mut(Finger::Ring).distal = Mat4::from_rotation_x(1.0);
        let before = pose.clone();
        hand.update(3.0, &mut pose);
        assert_eq!(pose, before);
    }
}
