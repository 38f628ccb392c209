//! Joint transform storage for the hand skeleton.
//!
//! The hand rig has five fingers with three phalanges each. Animators write
//! joint-local transforms into a [`SkeletonPose`]; the renderer reads them
//! back by bone name (`"index_proximal_phalange"` and so on).

use glam::Mat4;

/// A finger of the hand, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    /// Thumb.
    Thumb,
    /// Index finger.
    Index,
    /// Middle finger.
    Middle,
    /// Ring finger.
    Ring,
    /// Little finger.
    Pinky,
}

impl Finger {
    /// All fingers in rig order.
    pub const ALL: [Self; 5] =
        [Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky];

    /// Bone-name prefix used by the hand mesh.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }

    /// Position in [`Finger::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One of the three bones of a finger, from the palm outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phalanx {
    /// Bone nearest the palm.
    Proximal,
    /// Middle bone.
    Intermediate,
    /// Fingertip bone.
    Distal,
}

impl Phalanx {
    /// All phalanges from the palm outwards.
    pub const ALL: [Self; 3] = [Self::Proximal, Self::Intermediate, Self::Distal];

    /// Name fragment used by the hand mesh.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Proximal => "proximal",
            Self::Intermediate => "intermediate",
            Self::Distal => "distal",
        }
    }
}

/// Number of animated bones: three phalanges on each of five fingers.
pub const BONE_COUNT: usize = 15;

/// Bone name of a phalanx in the hand mesh.
#[must_use]
pub fn bone_name(finger: Finger, phalanx: Phalanx) -> String {
    format!("{}_{}_phalange", finger.name(), phalanx.name())
}

/// Slot of a named bone in thumb-first, palm-outwards order.
#[must_use]
pub fn bone_index(name: &str) -> Option<usize> {
    Finger::ALL
        .into_iter()
        .flat_map(|finger| {
            Phalanx::ALL.into_iter().map(move |phalanx| (finger, phalanx))
        })
        .position(|(finger, phalanx)| bone_name(finger, phalanx) == name)
}

/// The three joint transforms of one finger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FingerJoints {
    /// Transform of the proximal phalanx.
    pub proximal: Mat4,
    /// Transform of the intermediate phalanx.
    pub intermediate: Mat4,
    /// Transform of the distal phalanx.
    pub distal: Mat4,
}

impl FingerJoints {
    /// Same transform on all three joints.
    #[must_use]
    pub fn uniform(transform: Mat4) -> Self {
        Self {
            proximal: transform,
            intermediate: transform,
            distal: transform,
        }
    }

    /// Transform of one phalanx.
    #[must_use]
    pub fn get(&self, phalanx: Phalanx) -> Mat4 {
        match phalanx {
            Phalanx::Proximal => self.proximal,
            Phalanx::Intermediate => self.intermediate,
            Phalanx::Distal => self.distal,
        }
    }
}

/// Joint transforms for the whole hand. Starts at identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkeletonPose {
    fingers: [FingerJoints; 5],
}

impl SkeletonPose {
    /// Joints of one finger.
    #[must_use]
    pub fn finger(&self, finger: Finger) -> &FingerJoints {
        &self.fingers[finger.index()]
    }

    /// Mutable joints of one finger, for animators to write into.
    pub fn finger_mut(&mut self, finger: Finger) -> &mut FingerJoints {
        &mut self.fingers[finger.index()]
    }

    /// Look up a transform by mesh bone name.
    #[must_use]
    pub fn bone(&self, name: &str) -> Option<Mat4> {
        self.bones()
            .find(|(bone, _)| bone == name)
            .map(|(_, transform)| transform)
    }

    /// Every phalanx transform with its bone name, thumb first.
    pub fn bones(&self) -> impl Iterator<Item = (String, Mat4)> + '_ {
        Finger::ALL.into_iter().flat_map(move |finger| {
            Phalanx::ALL.into_iter().map(move |phalanx| {
                (bone_name(finger, phalanx), self.finger(finger).get(phalanx))
            })
        })
    }

    /// Reset every joint to identity.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
