//! Camera system for the hand viewer.
//!
//! Provides a quaternion-based six-degrees-of-freedom camera with
//! free movement, roll and mouse-look, wrapped by a patrol controller that
//! shuttles the camera between two poses on a timer.

/// Position + orientation primitive with cached local axes.
pub mod body;
/// Perspective camera built on an orientable body.
pub mod core;
/// Patrol state machine wrapping the camera.
pub mod controller;

pub use body::{MoveDirection, OrientableBody, RollDirection};
pub use controller::{
    PatrolController, PatrolRun, PatrolState, Pose, MIN_PATROL_PERIOD,
};
pub use self::core::Camera;
