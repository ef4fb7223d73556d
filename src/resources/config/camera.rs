use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::utils::{ConfigError, ConfigResult, DEFAULT_CAMERA_OFFSET};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Zoom out as the target's gravity strength grows.
    pub allow_speed_zoom: bool,
    /// Lead the target along the down vector as it speeds up.
    pub allow_speed_offset: bool,
    /// Offset from the target when no speed offset applies.
    pub default_offset: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            allow_speed_zoom: true,
            allow_speed_offset: true,
            default_offset: DEFAULT_CAMERA_OFFSET,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.default_offset.is_finite() {
            return Err(ConfigError::ValidationError(
                "default_offset must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
