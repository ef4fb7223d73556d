use bevy::prelude::*;

use crate::resources::{FrameClock, GameController, InputSnapshot};

/// Recomputes the down vector before any dependent controller runs.
pub fn down_vector_system(
    mut game: ResMut<GameController>,
    input: Res<InputSnapshot>,
    clock: Res<FrameClock>,
) {
    let previous_mode = game.input_mode;
    game.tick(&input, clock.smoothed_delta_secs());

    if game.input_mode != previous_mode {
        debug!(
            "Input mode settled from {:?} to {:?}",
            previous_mode, game.input_mode
        );
    }
}
