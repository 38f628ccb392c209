//! Input handling: event types, key actions, and the input processor
//! that folds raw window events into per-frame engine input.

/// Platform-agnostic input events.
pub mod event;
/// Bindable engine actions.
pub mod keyboard;
/// Cursor position tracking.
pub(crate) mod mouse;
/// Converts raw events into per-frame input.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
