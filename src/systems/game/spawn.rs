use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use crate::components::{Player, Spawnpoint};

/// Moves the player onto the spawnpoint. Missing or ambiguous entities are
/// logged, never fatal.
pub fn place_player_at_spawn(
    mut players: Query<&mut Transform, (With<Player>, Without<Spawnpoint>)>,
    spawnpoints: Query<&Transform, With<Spawnpoint>>,
) {
    let spawnpoint = match spawnpoints.get_single() {
        Ok(spawnpoint) => Some(spawnpoint.translation),
        Err(QuerySingleError::NoEntities(_)) => {
            warn!("No spawnpoint found. Player keeps its spawn position.");
            None
        }
        Err(QuerySingleError::MultipleEntities(_)) => {
            warn!(
                "Found {} spawnpoints, expected one. Player keeps its spawn position.",
                spawnpoints.iter().count()
            );
            None
        }
    };

    match players.get_single_mut() {
        Ok(mut player) => {
            if let Some(translation) = spawnpoint {
                player.translation = translation;
                info!("Player placed at spawnpoint {:?}", translation);
            }
        }
        Err(QuerySingleError::NoEntities(_)) => {
            error!("No player found");
        }
        Err(QuerySingleError::MultipleEntities(_)) => {
            error!(
                "Found {} players, expected one. None placed.",
                players.iter().count()
            );
        }
    }
}
