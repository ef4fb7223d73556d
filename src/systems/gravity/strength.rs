use bevy::prelude::*;

use crate::components::{GravityController, GroundDetection, StrengthStep};
use crate::resources::{FrameClock, GameController, InputSnapshot};
use crate::utils::eased_up_rotation;

/// Ramps, clamps and steers every gravity body for this frame.
///
/// # Arguments
/// - `game`: Down vector, global strength and tilt sensitivity.
/// - `input`: Thrust trigger.
/// - `clock`: Plain delta for strength, smoothed delta for direction.
/// - `query`: Gravity bodies; bodies without `GroundDetection` are never in contact.
pub fn gravity_controller_system(
    game: Res<GameController>,
    input: Res<InputSnapshot>,
    clock: Res<FrameClock>,
    mut query: Query<(&mut GravityController, Option<&GroundDetection>)>,
) {
    let step = StrengthStep {
        global_strength: game.gravity_strength,
        dt: clock.delta_secs(),
        thrust: input.thrust,
        in_contact: false,
    };
    let steer_factor = game.tilt_sensitivity * clock.smoothed_delta_secs();

    query.par_iter_mut().for_each(|(mut gravity, ground)| {
        gravity.step_strength(StrengthStep {
            in_contact: ground.is_some_and(|ground| ground.is_colliding),
            ..step
        });
        gravity.steer_direction(game.down_vector, steer_factor);
    });
}

/// Eases each opted-in body's up axis toward the real-world up.
pub fn gravity_self_rotation_system(
    game: Res<GameController>,
    clock: Res<FrameClock>,
    mut query: Query<(&GravityController, &mut Transform)>,
) {
    let factor = game.tilt_sensitivity * clock.smoothed_delta_secs();
    let world_up = -game.down_vector;

    for (gravity, mut transform) in query.iter_mut() {
        if !gravity.rotate_with_down_vector {
            continue;
        }
        if let Some(rotation) = eased_up_rotation(transform.up().as_vec3(), world_up, factor) {
            transform.rotation = rotation;
        }
    }
}
