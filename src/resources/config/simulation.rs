use super::{camera::CameraConfig, game::GameConfig, gravity::GravityConfig};
use crate::utils::{ConfigError, ConfigResult, DEFAULT_FIXED_TIMESTEP};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full tunable surface of the tilt gravity layer.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physics tick length in seconds.
    pub fixed_timestep: f64,
    pub game: GameConfig,
    pub gravity: GravityConfig,
    pub camera: CameraConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_timestep: DEFAULT_FIXED_TIMESTEP,
            game: GameConfig::default(),
            gravity: GravityConfig::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.fixed_timestep.is_finite() && self.fixed_timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "fixed_timestep must be positive, got {}",
                self.fixed_timestep
            )));
        }
        self.game.validate()?;
        self.gravity.validate()?;
        self.camera.validate()
    }
}
