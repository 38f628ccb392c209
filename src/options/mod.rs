//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, patrol, gestures, light, keybindings)
//! are consolidated here. Options serialize to/from TOML so a session can
//! be started from a preset file.

mod camera;
mod gesture;
mod keybindings;
mod light;
mod patrol;

use std::path::Path;

pub use camera::CameraOptions;
pub use gesture::GestureOptions;
pub use keybindings::KeybindingOptions;
pub use light::LightOptions;
pub use patrol::{DestinationOptions, PatrolOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PhalanxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[patrol]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera pose, projection and control parameters.
    pub camera: CameraOptions,
    /// Patrol timing and startup destination.
    pub patrol: PatrolOptions,
    /// Finger gesture parameters.
    pub gesture: GestureOptions,
    /// Point light parameters.
    pub light: LightOptions,
    /// Key and mouse-button binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load and validate options from a TOML file. Missing fields use
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::Io`] if the file cannot be read, or a parse
    /// or validation error from [`Options::from_toml`].
    pub fn load(path: &Path) -> Result<Self, PhalanxError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("[options] loaded {}", path.display());
        Ok(options)
    }

    /// Parse and validate options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::OptionsParse`] for malformed TOML and
    /// [`PhalanxError::InvalidOption`] for values that fail validation.
    pub fn from_toml(content: &str) -> Result<Self, PhalanxError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| PhalanxError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Serialize to pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::OptionsParse`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, PhalanxError> {
        toml::to_string_pretty(self)
            .map_err(|e| PhalanxError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::Io`] if the directory or file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), PhalanxError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`PhalanxError::InvalidOption`] naming the first bad field,
    /// or listing conflicting key bindings.
    pub fn validate(&self) -> Result<(), PhalanxError> {
        let camera = &self.camera;
        positive("camera.movement_speed", camera.movement_speed)?;
        positive("camera.roll_speed", camera.roll_speed)?;
        positive("camera.mouse_sensitivity", camera.mouse_sensitivity)?;
        positive("camera.znear", camera.znear)?;
        if !(camera.zfar.is_finite() && camera.zfar > camera.znear) {
            return Err(invalid(format!(
                "camera.zfar ({}) must be greater than camera.znear ({})",
                camera.zfar, camera.znear
            )));
        }
        if !(camera.fovy > 0.0 && camera.fovy < 180.0) {
            return Err(invalid(format!(
                "camera.fovy ({}) must lie in (0, 180)",
                camera.fovy
            )));
        }
        if camera.front.iter().all(|c| *c == 0.0) {
            return Err(invalid("camera.front must be non-zero".to_owned()));
        }

        positive("patrol.speed", self.patrol.speed)?;
        positive("patrol.min_period", self.patrol.min_period)?;
        positive("gesture.speed", self.gesture.speed)?;
        positive("light.movement_speed", self.light.movement_speed)?;

        let conflicts = self.keybindings.conflicts();
        if !conflicts.is_empty() {
            return Err(invalid(format!(
                "keys bound to more than one action: {}",
                conflicts.join(", ")
            )));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> PhalanxError {
    PhalanxError::InvalidOption(msg)
}

fn positive<T>(name: &str, value: T) -> Result<(), PhalanxError>
where
    T: Into<f64> + Copy,
{
    let value: f64 = value.into();
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} ({value}) must be positive and finite")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = opts.to_toml().unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[patrol]
speed = 2.5
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.patrol.speed, 2.5);
        // Everything else should be default
        assert!(opts.patrol.preset_destination);
        assert_eq!(opts.patrol.destination, DestinationOptions::default());
        assert_eq!(opts.camera.position, [0.0, 0.0, -40.0]);
        assert_eq!(opts.gesture.speed, 0.8);
    }

    #[test]
    fn keybinding_overrides_in_toml() {
        let toml_str = r#"
[keybindings]
quit = "KeyC"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyC"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("Escape"), None);
        assert_eq!(opts.keybindings.lookup("KeyP"), Some(KeyAction::TogglePatrol));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let toml_str = r#"
[keybindings]
quit = "KeyW"
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, PhalanxError::InvalidOption(_)));
        assert!(err.to_string().contains("KeyW"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cases = [
            "[camera]\nmovement_speed = 0.0",
            "[camera]\nfovy = 180.0",
            "[camera]\nznear = 10.0\nzfar = 5.0",
            "[camera]\nfront = [0.0, 0.0, 0.0]",
            "[patrol]\nspeed = -1.0",
            "[patrol]\nmin_period = 0.0",
            "[gesture]\nspeed = nan",
            "[light]\nmovement_speed = inf",
        ];
        for case in cases {
            let result = Options::from_toml(case);
            assert!(
                matches!(result, Err(PhalanxError::InvalidOption(_))),
                "accepted: {case}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[camera\nfovy = ").unwrap_err();
        assert!(matches!(err, PhalanxError::OptionsParse(_)));
    }

    #[test]
    fn destination_preset_can_be_disabled() {
        let toml_str = r"
[patrol]
preset_destination = false

[patrol.destination]
position = [1.0, 2.0, 3.0]
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(!opts.patrol.preset_destination);
        assert_eq!(opts.patrol.destination.position, [1.0, 2.0, 3.0]);
        assert_eq!(
            opts.patrol.destination.orientation,
            DestinationOptions::default().orientation
        );
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("phalanx-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.gesture.speed = 1.25;
        opts.save(&dir.join("slow.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["slow".to_owned()]);
        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/phalanx.toml"))
            .unwrap_err();
        assert!(matches!(err, PhalanxError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("patrol"));
        assert!(props.contains_key("gesture"));
        assert!(props.contains_key("light"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("movement_speed").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("position").is_none());
    }
}
