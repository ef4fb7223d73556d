use bevy::prelude::*;

/// Phase of a contact reported by the host's collision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ContactPhase {
    Enter,
    Stay,
    Exit,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    /// Body whose `GroundDetection` receives the contact
    pub entity: Entity,
    pub phase: ContactPhase,
}

impl ContactEvent {
    pub fn new(entity: Entity, phase: ContactPhase) -> Self {
        Self { entity, phase }
    }
}

/// Tracks whether a body currently touches any collider.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct GroundDetection {
    pub is_colliding: bool,
}

impl GroundDetection {
    /// Only `Stay` and `Exit` change the flag; a new contact is picked up on
    /// its first `Stay`.
    pub fn handle(&mut self, phase: ContactPhase) {
        match phase {
            ContactPhase::Stay => self.is_colliding = true,
            ContactPhase::Exit => self.is_colliding = false,
            ContactPhase::Enter => {}
        }
    }
}
