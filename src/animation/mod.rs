//! Finger animation driven by time-parameterized gestures.
//!
//! A [`Gesture`] maps elapsed time to a bend angle, a [`FingerAnimator`]
//! binds one gesture to a finger's joint slots, and a [`HandAnimator`]
//! drives all five fingers from a [`HandShape`] preset.

mod finger;
pub mod gesture;
mod hand;
pub mod interpolation;

pub use finger::FingerAnimator;
pub use gesture::{Gesture, GestureSet, MAX_JOINT_ANGLE};
pub use hand::{HandAnimator, HandShape};
