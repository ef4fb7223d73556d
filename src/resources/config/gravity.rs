use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, ConfigResult, DEFAULT_MAX_GRAV_STRENGTH};

/// Per-body gravity settings used when spawning gravity controllers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    /// Steer the body's gravity direction toward the down vector.
    pub gravity_with_down_vector: bool,
    /// Roll the body so its up axis follows the negated down vector.
    pub rotate_with_down_vector: bool,
    /// Clamp the strength to `[-max_strength, max_strength]`.
    pub limit_max_strength: bool,
    pub max_strength: f32,
    pub initial_strength: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            gravity_with_down_vector: true,
            rotate_with_down_vector: false,
            limit_max_strength: true,
            max_strength: DEFAULT_MAX_GRAV_STRENGTH,
            initial_strength: 0.0,
        }
    }
}

impl GravityConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.max_strength.is_finite() && self.max_strength > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "max_strength must be positive, got {}",
                self.max_strength
            )));
        }
        if !self.initial_strength.is_finite() {
            return Err(ConfigError::ValidationError(
                "initial_strength must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
