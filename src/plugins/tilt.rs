use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::transform::TransformSystem;

use crate::components::{
    CameraRig, CameraTarget, ContactEvent, GravityController, GroundDetection, Player, RigidBody,
    Spawnpoint,
};
use crate::plugins::{StartupSequencePlugin, StartupStage};
use crate::resources::{
    FrameClock, GameController, GravityEnvironment, InputBindings, InputMode, InputSnapshot,
    SimulationConfig,
};
use crate::systems::{
    camera_follow_system, camera_projection_sync_system, camera_speed_system,
    down_vector_system, frame_clock_system, gather_input_system, global_gravity_system,
    gravity_controller_system, gravity_self_rotation_system, ground_contact_system,
    place_player_at_spawn, resolve_camera_target_system,
};

/// Per-frame ordering of the tilt gravity layer.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum TiltSet {
    /// Frame clock and raw input (PreUpdate).
    Input,
    /// Down vector (PreUpdate), ahead of the fixed physics step.
    DownVector,
    Contacts,
    Gravity,
    Camera,
    /// Late camera placement (PostUpdate).
    Placement,
}

pub struct TiltGravityPlugin {
    pub config: SimulationConfig,
}

impl Default for TiltGravityPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl TiltGravityPlugin {
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for TiltGravityPlugin {
    fn build(&self, app: &mut App) {
        let config = match self.config.validate() {
            Ok(()) => self.config.clone(),
            Err(e) => {
                error!("Invalid simulation config, using defaults: {}", e);
                SimulationConfig::default()
            }
        };

        app.register_type::<GravityController>()
            .register_type::<GroundDetection>()
            .register_type::<CameraRig>()
            .register_type::<Player>()
            .register_type::<Spawnpoint>()
            .register_type::<CameraTarget>()
            .register_type::<RigidBody>()
            .register_type::<InputMode>()
            .register_type::<GameController>()
            .register_type::<GravityEnvironment>()
            .register_type::<InputSnapshot>()
            .register_type::<FrameClock>();

        app.insert_resource(GameController::from_config(&config.game))
            .init_resource::<GravityEnvironment>()
            .init_resource::<InputSnapshot>()
            .init_resource::<InputBindings>()
            .init_resource::<FrameClock>()
            .add_event::<ContactEvent>();

        app.insert_resource(Time::<Fixed>::from_seconds(config.fixed_timestep))
            .insert_resource(config);

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }
        app.add_systems(
            Startup,
            place_player_at_spawn.in_set(StartupStage::PlaceEntities),
        );

        app.configure_sets(
            PreUpdate,
            (TiltSet::Input.after(InputSystem), TiltSet::DownVector).chain(),
        )
        .configure_sets(
            Update,
            (TiltSet::Contacts, TiltSet::Gravity, TiltSet::Camera).chain(),
        )
        .configure_sets(
            PostUpdate,
            TiltSet::Placement.after(TransformSystem::TransformPropagate),
        );

        app.add_systems(
            PreUpdate,
            (
                (frame_clock_system, gather_input_system)
                    .chain()
                    .in_set(TiltSet::Input),
                down_vector_system.in_set(TiltSet::DownVector),
            ),
        )
        .add_systems(
            Update,
            (
                ground_contact_system.in_set(TiltSet::Contacts),
                (gravity_controller_system, gravity_self_rotation_system)
                    .chain()
                    .in_set(TiltSet::Gravity),
                (resolve_camera_target_system, camera_speed_system)
                    .chain()
                    .in_set(TiltSet::Camera),
            ),
        )
        .add_systems(
            PostUpdate,
            (camera_follow_system, camera_projection_sync_system)
                .chain()
                .in_set(TiltSet::Placement),
        )
        .add_systems(FixedUpdate, global_gravity_system);
    }
}
