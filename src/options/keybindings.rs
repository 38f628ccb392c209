use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Configurable bindings mapping actions to key and mouse-button names.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyW"`,
/// `"Space"`, `"ArrowUp"`); mouse buttons are `"MouseLeft"`,
/// `"MouseRight"` and `"MouseMiddle"`. A `[keybindings]` table only needs
/// the actions it rebinds; the rest keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(
    from = "BTreeMap<KeyAction, String>",
    into = "BTreeMap<KeyAction, String>"
)]
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `TogglePatrol` → `"KeyP"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveUp, "KeyW".into()),
            (KeyAction::MoveDown, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveForward, "MouseLeft".into()),
            (KeyAction::MoveBackward, "MouseRight".into()),
            (KeyAction::RollLeft, "KeyQ".into()),
            (KeyAction::RollRight, "KeyE".into()),
            (KeyAction::SetDestination, "Space".into()),
            (KeyAction::TogglePatrol, "KeyP".into()),
            (KeyAction::ShapeFist, "KeyJ".into()),
            (KeyAction::ShapeVictory, "KeyK".into()),
            (KeyAction::ShapeOpenPalm, "KeyL".into()),
            (KeyAction::ShapePistol, "KeyU".into()),
            (KeyAction::ShapeCall, "KeyI".into()),
            (KeyAction::LightUp, "ArrowUp".into()),
            (KeyAction::LightLeft, "ArrowLeft".into()),
            (KeyAction::LightDown, "ArrowDown".into()),
            (KeyAction::LightRight, "ArrowRight".into()),
            (KeyAction::LightForward, "KeyZ".into()),
            (KeyAction::LightBackward, "KeyX".into()),
            (KeyAction::Quit, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl From<BTreeMap<KeyAction, String>> for KeybindingOptions {
    fn from(overrides: BTreeMap<KeyAction, String>) -> Self {
        let mut opts = Self::default();
        opts.bindings.extend(overrides);
        opts
    }
}

impl From<KeybindingOptions> for BTreeMap<KeyAction, String> {
    fn from(opts: KeybindingOptions) -> Self {
        opts.bindings.into_iter().collect()
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Key string bound to an action.
    #[must_use]
    pub fn key_for(&self, action: KeyAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Key strings bound to more than one action, sorted.
    #[must_use]
    pub fn conflicts(&self) -> Vec<String> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for key in self.bindings.values() {
            *counts.entry(key.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(key, _)| key.to_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_action_once() {
        let opts = KeybindingOptions::default();
        for action in KeyAction::ALL {
            assert!(opts.key_for(action).is_some(), "{action:?} unbound");
        }
        assert!(opts.conflicts().is_empty());
    }

    #[test]
    fn default_lookup() {
        let opts = KeybindingOptions::default();
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveUp));
        assert_eq!(opts.lookup("MouseLeft"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyJ"), Some(KeyAction::ShapeFist));
        assert_eq!(opts.lookup("KeyZ"), Some(KeyAction::LightForward));
        assert_eq!(opts.lookup("F1"), None);
    }

    #[test]
    fn overrides_merge_over_defaults() {
        let opts: KeybindingOptions =
            toml::from_str("toggle_patrol = \"KeyT\"").unwrap();
        assert_eq!(opts.lookup("KeyT"), Some(KeyAction::TogglePatrol));
        assert_eq!(opts.lookup("KeyP"), None);
        assert_eq!(opts.key_for(KeyAction::MoveUp), Some("KeyW"));
    }

    #[test]
    fn conflicting_keys_are_reported() {
        let mut opts = KeybindingOptions::default();
        let _ = opts.bindings.insert(KeyAction::Quit, "KeyW".into());
        assert_eq!(opts.conflicts(), vec!["KeyW".to_owned()]);
    }
}
