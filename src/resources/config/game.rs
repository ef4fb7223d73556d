use serde::{Deserialize, Serialize};

use crate::resources::InputMode;
use crate::utils::{
    ConfigError, ConfigResult, DEFAULT_GRAVITY_STRENGTH, DEFAULT_MOUSE_SENSITIVITY,
    DEFAULT_TILT_SENSITIVITY, MAX_MOUSE_SENSITIVITY, MAX_TILT_SENSITIVITY,
};

/// Tunables of the process-wide game controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Which input source drives the down vector.
    pub input_mode: InputMode,
    /// How quickly orientations follow the down vector (0..=50).
    pub tilt_sensitivity: f32,
    /// Multiplier for horizontal mouse motion in mouse rotate mode (0..=10).
    pub mouse_sensitivity: f32,
    /// Global "planet" gravity strength.
    pub gravity_strength: f32,
    pub set_default_tilt_sensitivity: bool,
    pub set_default_mouse_sensitivity: bool,
    pub set_default_gravity_strength: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Digital {
                keyboard: true,
                mouse: false,
            },
            tilt_sensitivity: DEFAULT_TILT_SENSITIVITY,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            gravity_strength: DEFAULT_GRAVITY_STRENGTH,
            set_default_tilt_sensitivity: false,
            set_default_mouse_sensitivity: false,
            set_default_gravity_strength: false,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=MAX_TILT_SENSITIVITY).contains(&self.tilt_sensitivity) {
            return Err(ConfigError::ValidationError(format!(
                "tilt_sensitivity {} outside 0..={}",
                self.tilt_sensitivity, MAX_TILT_SENSITIVITY
            )));
        }
        if !(0.0..=MAX_MOUSE_SENSITIVITY).contains(&self.mouse_sensitivity) {
            return Err(ConfigError::ValidationError(format!(
                "mouse_sensitivity {} outside 0..={}",
                self.mouse_sensitivity, MAX_MOUSE_SENSITIVITY
            )));
        }
        if !self.gravity_strength.is_finite() {
            return Err(ConfigError::ValidationError(
                "gravity_strength must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
