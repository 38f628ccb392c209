use serde::{Deserialize, Serialize};

use crate::animation::HandShape;
use crate::camera::{MoveDirection, RollDirection};

/// Engine-level actions that can be bound to keys or mouse buttons.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// move_up = "KeyW"
/// toggle_patrol = "KeyP"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Move the camera along its up axis.
    MoveUp,
    /// Move the camera against its up axis.
    MoveDown,
    /// Move the camera against its right axis.
    MoveLeft,
    /// Move the camera along its right axis.
    MoveRight,
    /// Move the camera along its viewing direction.
    MoveForward,
    /// Move the camera against its viewing direction.
    MoveBackward,
    /// Roll the camera counter-clockwise.
    RollLeft,
    /// Roll the camera clockwise.
    RollRight,
    /// Store the current camera pose as the patrol destination.
    SetDestination,
    /// Start or stop patrolling.
    TogglePatrol,
    /// Curl every finger.
    ShapeFist,
    /// Index and middle finger up.
    ShapeVictory,
    /// Extend every finger.
    ShapeOpenPalm,
    /// Thumb and index finger out.
    ShapePistol,
    /// Thumb and pinky out.
    ShapeCall,
    /// Move the light up.
    LightUp,
    /// Move the light down.
    LightDown,
    /// Move the light left.
    LightLeft,
    /// Move the light right.
    LightRight,
    /// Move the light forward.
    LightForward,
    /// Move the light backward.
    LightBackward,
    /// Leave the application.
    Quit,
}

impl KeyAction {
    /// Every bindable action.
    pub const ALL: [Self; 22] = [
        Self::MoveUp,
        Self::MoveDown,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveForward,
        Self::MoveBackward,
        Self::RollLeft,
        Self::RollRight,
        Self::SetDestination,
        Self::TogglePatrol,
        Self::ShapeFist,
        Self::ShapeVictory,
        Self::ShapeOpenPalm,
        Self::ShapePistol,
        Self::ShapeCall,
        Self::LightUp,
        Self::LightDown,
        Self::LightLeft,
        Self::LightRight,
        Self::LightForward,
        Self::LightBackward,
        Self::Quit,
    ];

    /// Whether the action repeats every frame while held, rather than
    /// firing once per press.
    #[must_use]
    pub fn is_continuous(self) -> bool {
        self.camera_move().is_some()
            || self.camera_roll().is_some()
            || self.light_move().is_some()
    }

    /// Camera translation driven by this action.
    #[must_use]
    pub fn camera_move(self) -> Option<MoveDirection> {
        match self {
            Self::MoveUp => Some(MoveDirection::Up),
            Self::MoveDown => Some(MoveDirection::Down),
            Self::MoveLeft => Some(MoveDirection::Left),
            Self::MoveRight => Some(MoveDirection::Right),
            Self::MoveForward => Some(MoveDirection::Forward),
            Self::MoveBackward => Some(MoveDirection::Backward),
            _ => None,
        }
    }

    /// Camera roll driven by this action.
    #[must_use]
    pub fn camera_roll(self) -> Option<RollDirection> {
        match self {
            Self::RollLeft => Some(RollDirection::Left),
            Self::RollRight => Some(RollDirection::Right),
            _ => None,
        }
    }

    /// Light translation driven by this action.
    #[must_use]
    pub fn light_move(self) -> Option<MoveDirection> {
        match self {
            Self::LightUp => Some(MoveDirection::Up),
            Self::LightDown => Some(MoveDirection::Down),
            Self::LightLeft => Some(MoveDirection::Left),
            Self::LightRight => Some(MoveDirection::Right),
            Self::LightForward => Some(MoveDirection::Forward),
            Self::LightBackward => Some(MoveDirection::Backward),
            _ => None,
        }
    }

    /// Hand shape selected by this action.
    #[must_use]
    pub fn hand_shape(self) -> Option<HandShape> {
        match self {
            Self::ShapeFist => Some(HandShape::Fist),
            Self::ShapeVictory => Some(HandShape::Victory),
            Self::ShapeOpenPalm => Some(HandShape::OpenPalm),
            Self::ShapePistol => Some(HandShape::Pistol),
            Self::ShapeCall => Some(HandShape::Call),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_is_continuous_toggles_are_not() {
        assert!(KeyAction::MoveForward.is_continuous());
        assert!(KeyAction::RollLeft.is_continuous());
        assert!(KeyAction::LightBackward.is_continuous());
        assert!(!KeyAction::TogglePatrol.is_continuous());
        assert!(!KeyAction::SetDestination.is_continuous());
        assert!(!KeyAction::ShapeFist.is_continuous());
        assert!(!KeyAction::Quit.is_continuous());
    }

    #[test]
    fn every_shape_has_an_action() {
        let shapes: Vec<_> =
            KeyAction::ALL.into_iter().filter_map(KeyAction::hand_shape).collect();
        assert_eq!(
            shapes,
            [
                HandShape::Fist,
                HandShape::Victory,
                HandShape::OpenPalm,
                HandShape::Pistol,
                HandShape::Call,
            ]
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        let json = serde_json::to_string(&KeyAction::ShapeOpenPalm).unwrap();
        assert_eq!(json, "\"shape_open_palm\"");
    }
}
