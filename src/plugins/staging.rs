use bevy::prelude::*;

/// Startup ordering: scene entities exist before anything is placed.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum StartupStage {
    SpawnEntities,
    PlaceEntities,
}

pub struct StartupSequencePlugin;

impl Plugin for StartupSequencePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Startup,
            (StartupStage::SpawnEntities, StartupStage::PlaceEntities).chain(),
        );
    }
}
