use bevy::prelude::*;

use crate::components::{GravityController, RigidBody};
use crate::resources::{GameController, GravityEnvironment};

/// Publishes the shared physics gravity once per fixed step.
///
/// Every gravity body writes the same value; the last writer is kept as the
/// authority and a shared write is reported once.
pub fn global_gravity_system(
    game: Res<GameController>,
    mut environment: ResMut<GravityEnvironment>,
    bodies: Query<(Entity, Has<RigidBody>), With<GravityController>>,
) {
    if bodies.is_empty() {
        return;
    }

    let gravity = game.down_vector * game.gravity_strength;
    environment.begin_step();

    for (entity, has_rigid_body) in bodies.iter() {
        if !has_rigid_body {
            error!("Gravity body {:?} must have a RigidBody", entity);
        }
        environment.write(entity, gravity);
    }

    if environment.take_shared_warning() {
        warn!(
            "{} gravity bodies write the global gravity; {:?} wins",
            environment.writers, environment.authority
        );
    }
}
