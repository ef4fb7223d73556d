use bevy::prelude::*;

use crate::resources::CameraConfig;
use crate::utils::{
    lerp, slerp, DEFAULT_MOBILE_RECT_SIZE, DEFAULT_RECT_SIZE, FOLLOW_SPEED, MAX_RECT_SIZE,
    SPEED_MOBILE_ZOOM_FACTOR, SPEED_OFFSET_FACTOR, SPEED_ZOOM_FACTOR,
};

/// Camera that follows a target and zooms out with its gravity strength.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct CameraRig {
    /// Current offset from the target position.
    pub offset: Vec3,
    /// Orthographic half-height in world units.
    pub ortho_size: f32,
    /// Last placement, target position plus offset.
    pub target_position: Vec3,
    pub target: Option<Entity>,
    pub allow_speed_zoom: bool,
    pub allow_speed_offset: bool,
    /// Forced to `!mobile` every late tick.
    pub rotate_with_down_vector: bool,
    pub default_offset: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            offset: config.default_offset,
            ortho_size: DEFAULT_RECT_SIZE,
            target_position: Vec3::ZERO,
            target: None,
            allow_speed_zoom: config.allow_speed_zoom,
            allow_speed_offset: config.allow_speed_offset,
            rotate_with_down_vector: true,
            default_offset: config.default_offset,
        }
    }

    pub fn with_target(mut self, target: Entity) -> Self {
        self.target = Some(target);
        self
    }

    pub fn baseline_size(mobile: bool) -> f32 {
        if mobile {
            DEFAULT_MOBILE_RECT_SIZE
        } else {
            DEFAULT_RECT_SIZE
        }
    }

    /// Size the camera would zoom out to for a given strength, capped.
    pub fn speed_zoom_candidate(strength: f32, mobile: bool) -> f32 {
        let mut size = strength.abs() * SPEED_ZOOM_FACTOR;
        if mobile {
            size *= SPEED_MOBILE_ZOOM_FACTOR;
        }
        size.min(MAX_RECT_SIZE)
    }

    /// Eases the orthographic size toward the speed zoom or the baseline.
    pub fn update_zoom(&mut self, strength: f32, mobile: bool, dt: f32) {
        let baseline = Self::baseline_size(mobile);
        let goal = if self.allow_speed_zoom {
            let candidate = Self::speed_zoom_candidate(strength, mobile);
            if candidate > baseline {
                candidate
            } else {
                baseline
            }
        } else {
            baseline
        };

        self.ortho_size = lerp(self.ortho_size, goal, FOLLOW_SPEED * dt);
    }

    /// Leads the target along the down vector in proportion to its strength.
    pub fn update_offset(&mut self, down_vector: Vec3, strength_percentage: f32, smooth_dt: f32) {
        let goal = if self.allow_speed_offset {
            down_vector * SPEED_OFFSET_FACTOR * strength_percentage
                + Vec3::new(0.0, 0.0, self.default_offset.z)
        } else {
            self.default_offset
        };

        self.offset = slerp(self.offset, goal, FOLLOW_SPEED * smooth_dt);
    }

    /// Snaps back to defaults when the target has no gravity to read.
    pub fn fallback(&mut self, mobile: bool) {
        self.ortho_size = Self::baseline_size(mobile);
        self.offset = self.default_offset;
    }

    pub fn place(&mut self, target_translation: Vec3) -> Vec3 {
        self.target_position = target_translation + self.offset;
        self.target_position
    }
}
