//! Folds raw platform events into per-frame input.
//!
//! The `InputProcessor` owns all transient input state (held actions,
//! cursor tracking, accumulated deltas) and the key-binding map. It is
//! the only thing that sits between raw window events and the engine's
//! [`apply_input`](crate::engine::HandEngine::apply_input).

use std::collections::BTreeSet;

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::CursorTracker;
use crate::options::KeybindingOptions;

/// Everything the engine needs from one frame of input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameInput {
    /// Actions whose key or button is down at the end of the frame.
    pub held: BTreeSet<KeyAction>,
    /// Discrete actions pressed during the frame, in press order.
    pub triggered: Vec<KeyAction>,
    /// Cursor movement in pixels, y up.
    pub pointer_delta: Vec2,
    /// Accumulated scroll (positive = zoom in).
    pub scroll: f32,
}

impl FrameInput {
    /// Whether `action` is held.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Held actions that repeat every frame.
    pub fn continuous(&self) -> impl Iterator<Item = KeyAction> + '_ {
        self.held.iter().copied().filter(|a| a.is_continuous())
    }
}

/// Converts raw window events into [`FrameInput`]s.
///
/// Continuous actions (movement, roll, light movement) are reported as
/// held for as long as their key is down. Discrete actions fire once per
/// press; key repeat while held does not fire them again.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// input_processor.handle_event(event);
///
/// // Once per frame:
/// let frame = input_processor.take_frame();
/// engine.tick(&frame, now, dt);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Cursor position tracking and warm-up.
    cursor: CursorTracker,
    /// Actions whose binding is currently down.
    held: BTreeSet<KeyAction>,
    /// Discrete actions pressed since the last frame.
    triggered: Vec<KeyAction>,
    /// Cursor movement since the last frame.
    pointer_delta: Vec2,
    /// Scroll since the last frame.
    scroll: f32,
    /// Action → key string mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: CursorTracker::new(),
            held: BTreeSet::new(),
            triggered: Vec::new(),
            pointer_delta: Vec2::ZERO,
            scroll: 0.0,
            key_bindings,
        }
    }

    /// Last reported cursor position in physical pixels.
    #[must_use]
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor.position()
    }

    /// Whether `action`'s binding is currently down.
    #[must_use]
    pub fn is_held(&self, action: KeyAction) -> bool {
        self.held.contains(&action)
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings. Held actions are released.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
        self.held.clear();
    }

    /// Release every held action, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Process a raw input event.
    ///
    /// Returns the discrete action fired by this event, if any.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<KeyAction> {
        match event {
            InputEvent::Key { code, pressed } => {
                self.handle_binding(code, *pressed)
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(*button, *pressed)
            }
            InputEvent::CursorMoved { x, y } => {
                if let Some(delta) = self.cursor.handle_position(*x, *y) {
                    self.pointer_delta += delta;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                self.scroll += delta;
                None
            }
        }
    }

    /// Hand over everything accumulated since the last call and reset the
    /// per-frame accumulators. Held actions carry over.
    pub fn take_frame(&mut self) -> FrameInput {
        FrameInput {
            held: self.held.clone(),
            triggered: std::mem::take(&mut self.triggered),
            pointer_delta: std::mem::take(&mut self.pointer_delta),
            scroll: std::mem::take(&mut self.scroll),
        }
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<KeyAction> {
        self.handle_binding(button.key_name(), pressed)
    }

    /// Track a key or button transition for whatever action it is bound to.
    fn handle_binding(&mut self, key: &str, pressed: bool) -> Option<KeyAction> {
        let action = self.key_bindings.lookup(key)?;
        if !pressed {
            let _ = self.held.remove(&action);
            return None;
        }
        let newly_pressed = self.held.insert(action);
        if newly_pressed && !action.is_continuous() {
            log::debug!("[input] {key} -> {action:?}");
            self.triggered.push(action);
            return Some(action);
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
