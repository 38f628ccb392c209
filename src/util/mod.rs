//! Shared utilities.

/// Monotonic frame clock with smoothed FPS.
pub mod frame_timing;

pub use frame_timing::FrameClock;
