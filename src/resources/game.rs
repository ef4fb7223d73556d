use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{config::GameConfig, input::InputSnapshot};
use crate::utils::{
    rotated_down, slerp, DEFAULT_GRAVITY_STRENGTH, DEFAULT_MOUSE_SENSITIVITY,
    DEFAULT_TILT_SENSITIVITY, KEYBOARD_TILT_ADJUSTER,
};

/// Source of the down vector for the current tick.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputMode {
    /// Device tilt snaps the down vector every tick.
    Accelerometer,
    /// Keyboard and/or mouse rotate the down vector around the view axis.
    Digital { keyboard: bool, mouse: bool },
}

impl InputMode {
    /// Applies the forcing rules: keyboard rotation switches mouse rotation off.
    pub fn settle(self) -> Self {
        match self {
            InputMode::Digital {
                keyboard: true,
                mouse: true,
            } => InputMode::Digital {
                keyboard: true,
                mouse: false,
            },
            other => other,
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, InputMode::Accelerometer)
    }
}

impl Default for InputMode {
    fn default() -> Self {
        InputMode::Digital {
            keyboard: true,
            mouse: false,
        }
    }
}

/// Process-wide controller that owns the down vector and global tunables.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct GameController {
    /// Real-world down for this frame; zero or unit length.
    pub down_vector: Vec3,
    pub input_mode: InputMode,
    pub tilt_sensitivity: f32,
    pub mouse_sensitivity: f32,
    /// Global "planet" gravity strength fed to every gravity controller.
    pub gravity_strength: f32,
    pub set_default_tilt_sensitivity: bool,
    pub set_default_mouse_sensitivity: bool,
    pub set_default_gravity_strength: bool,
    /// Accumulated roll (degrees) driven by digital input.
    current_z_rotation: f32,
}

impl Default for GameController {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl GameController {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            down_vector: Vec3::ZERO,
            input_mode: config.input_mode,
            tilt_sensitivity: config.tilt_sensitivity,
            mouse_sensitivity: config.mouse_sensitivity,
            gravity_strength: config.gravity_strength,
            set_default_tilt_sensitivity: config.set_default_tilt_sensitivity,
            set_default_mouse_sensitivity: config.set_default_mouse_sensitivity,
            set_default_gravity_strength: config.set_default_gravity_strength,
            current_z_rotation: 0.0,
        }
    }

    /// Mobile mode follows the accelerometer.
    pub fn mobile_mode(&self) -> bool {
        self.input_mode.is_mobile()
    }

    pub fn z_rotation(&self) -> f32 {
        self.current_z_rotation
    }

    /// Overwrites tunables whose "force default" flag is set.
    pub fn apply_defaults(&mut self) {
        if self.set_default_tilt_sensitivity {
            self.tilt_sensitivity = DEFAULT_TILT_SENSITIVITY;
        }
        if self.set_default_mouse_sensitivity {
            self.mouse_sensitivity = DEFAULT_MOUSE_SENSITIVITY;
        }
        if self.set_default_gravity_strength {
            self.gravity_strength = DEFAULT_GRAVITY_STRENGTH;
        }
    }

    /// Recomputes the down vector for one frame.
    ///
    /// # Arguments
    /// * `input` - Raw input sampled this frame.
    /// * `smooth_dt` - Smoothed frame delta in seconds.
    pub fn tick(&mut self, input: &InputSnapshot, smooth_dt: f32) {
        self.apply_defaults();

        self.input_mode = self.input_mode.settle();
        match self.input_mode {
            InputMode::Accelerometer => {
                self.down_vector = accelerometer_down(input.acceleration);
            }
            InputMode::Digital { keyboard, mouse } => {
                self.digital_down(input, keyboard, mouse, smooth_dt);
            }
        }
    }

    fn digital_down(&mut self, input: &InputSnapshot, keyboard: bool, mouse: bool, smooth_dt: f32) {
        if keyboard {
            let step = self.tilt_sensitivity * KEYBOARD_TILT_ADJUSTER * smooth_dt;
            if input.rotate_right {
                self.current_z_rotation += step;
            }
            if input.rotate_left {
                self.current_z_rotation -= step;
            }
        }

        if mouse {
            self.current_z_rotation += input.mouse_dx * self.mouse_sensitivity;
        }

        let candidate = rotated_down(self.current_z_rotation);
        self.down_vector =
            slerp(self.down_vector, candidate, self.tilt_sensitivity * smooth_dt).normalize_or_zero();
    }
}

/// Normalized planar reading, or zero when the device reports no tilt.
pub fn accelerometer_down(acceleration: Vec2) -> Vec3 {
    Vec3::new(acceleration.x, acceleration.y, 0.0).normalize_or_zero()
}
