use bevy::prelude::*;

use crate::resources::GravityConfig;
use crate::utils::{
    slerp, SLOW_GRAV_FACTOR, SLOW_GRAV_MARGIN, THRUST_RATE, UNLIMITED_PERCENTAGE_DIVISOR,
    WALL_FRICTION, WORLD_DOWN,
};

/// Per-body gravity state.
///
/// The strength ramps with the global gravity strength, slows near the
/// limit ("air drag"), is reduced by thrust and contact friction, and points
/// along `direction`.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct GravityController {
    pub gravity_with_down_vector: bool,
    pub rotate_with_down_vector: bool,
    pub limit_max_strength: bool,
    pub max_strength: f32,
    /// Signed gravity strength.
    pub current_strength: f32,
    /// `current_strength / max_strength` when limited, `/ 100` otherwise.
    pub strength_percentage: f32,
    /// Unit gravity direction.
    pub direction: Vec3,
    drag_factor: f32,
}

/// Inputs for one strength update of a single body.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrengthStep {
    pub global_strength: f32,
    pub dt: f32,
    pub thrust: bool,
    pub in_contact: bool,
}

impl Default for GravityController {
    fn default() -> Self {
        Self::from_config(&GravityConfig::default())
    }
}

impl GravityController {
    pub fn from_config(config: &GravityConfig) -> Self {
        Self {
            gravity_with_down_vector: config.gravity_with_down_vector,
            rotate_with_down_vector: config.rotate_with_down_vector,
            limit_max_strength: config.limit_max_strength,
            max_strength: config.max_strength,
            current_strength: config.initial_strength,
            strength_percentage: 0.0,
            direction: WORLD_DOWN,
            drag_factor: 1.0,
        }
    }

    pub fn drag_factor(&self) -> f32 {
        self.drag_factor
    }

    /// Strength magnitude from which the slow "air drag" factor applies.
    pub fn slow_threshold(&self) -> f32 {
        self.max_strength - SLOW_GRAV_MARGIN
    }

    /// Runs drag, integration, thrust and friction in order.
    pub fn step_strength(&mut self, step: StrengthStep) {
        self.update_drag_factor();
        self.integrate_strength(step.global_strength, step.dt);
        if step.thrust {
            self.apply_thrust(step.dt);
        }
        if step.in_contact {
            self.apply_contact_friction(step.dt);
        }
    }

    pub fn update_drag_factor(&mut self) {
        self.drag_factor = if self.current_strength.abs() >= self.slow_threshold() {
            SLOW_GRAV_FACTOR
        } else {
            1.0
        };
    }

    /// Integrates the strength and refreshes the percentage.
    pub fn integrate_strength(&mut self, global_strength: f32, dt: f32) {
        let increment = global_strength * self.drag_factor * dt;

        if self.limit_max_strength {
            let candidate = self.current_strength + increment;
            if candidate <= self.max_strength {
                self.current_strength = candidate;
            } else {
                self.current_strength = self.max_strength;
            }

            if self.current_strength.abs() > self.max_strength {
                self.current_strength = self.max_strength * self.current_strength.signum();
            }

            self.strength_percentage = self.current_strength / self.max_strength;
        } else {
            // The unlimited percentage is out of a fixed 100, not max_strength
            self.current_strength += increment;
            self.strength_percentage = self.current_strength / UNLIMITED_PERCENTAGE_DIVISOR;
        }
    }

    /// Manual thrust, applied after clamping.
    pub fn apply_thrust(&mut self, dt: f32) {
        self.current_strength -= THRUST_RATE * dt;
    }

    /// Contact friction never pushes the strength below zero.
    pub fn apply_contact_friction(&mut self, dt: f32) {
        let friction = WALL_FRICTION * dt;
        if self.current_strength - friction >= 0.0 {
            self.current_strength -= friction;
        }
    }

    pub fn steer_direction(&mut self, down_vector: Vec3, factor: f32) {
        self.direction = if self.gravity_with_down_vector {
            slerp(self.direction, down_vector, factor).normalize_or_zero()
        } else {
            WORLD_DOWN
        };
    }
}
