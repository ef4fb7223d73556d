use bevy::prelude::*;

use crate::utils::{DEFAULT_GRAVITY_STRENGTH, WORLD_DOWN};

/// Shared gravity seen by every rigid body in the scene.
///
/// Written once per physics step by the gravity bodies; the host's physics
/// integration reads `gravity`.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct GravityEnvironment {
    pub gravity: Vec3,
    /// Body whose write landed last.
    pub authority: Option<Entity>,
    /// Bodies that wrote during the last physics step.
    pub writers: u32,
    pub steps: u64,
    #[reflect(ignore)]
    shared_warning_logged: bool,
}

impl Default for GravityEnvironment {
    fn default() -> Self {
        Self {
            gravity: WORLD_DOWN * DEFAULT_GRAVITY_STRENGTH,
            authority: None,
            writers: 0,
            steps: 0,
            shared_warning_logged: false,
        }
    }
}

impl GravityEnvironment {
    pub fn begin_step(&mut self) {
        self.writers = 0;
        self.steps += 1;
    }

    /// Overwrites the global gravity; the last writer in a step wins.
    pub fn write(&mut self, writer: Entity, gravity: Vec3) {
        self.gravity = gravity;
        self.authority = Some(writer);
        self.writers += 1;
    }

    /// True the first time more than one body wrote in a single step.
    pub fn take_shared_warning(&mut self) -> bool {
        if self.writers > 1 && !self.shared_warning_logged {
            self.shared_warning_logged = true;
            return true;
        }
        false
    }
}
