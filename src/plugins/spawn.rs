use bevy::prelude::*;

use crate::components::{
    CameraRig, CameraTarget, GravityController, GroundDetection, Player, RigidBody, Spawnpoint,
};
use crate::resources::{CameraConfig, GravityConfig, SimulationConfig};

/// Spawns the player body: gravity, contact tracking and the camera target.
pub fn spawn_gravity_body(
    commands: &mut Commands,
    config: &GravityConfig,
    transform: Transform,
) -> Entity {
    commands
        .spawn((
            Name::new("Player"),
            Player,
            CameraTarget,
            RigidBody,
            GravityController::from_config(config),
            GroundDetection::default(),
            transform,
        ))
        .id()
}

pub fn spawn_spawnpoint(commands: &mut Commands, translation: Vec3) -> Entity {
    commands
        .spawn((
            Name::new("Spawnpoint"),
            Spawnpoint,
            Transform::from_translation(translation),
        ))
        .id()
}

/// Spawns a rig without a render camera; add `Camera2d` on top when rendering.
pub fn spawn_camera_rig(
    commands: &mut Commands,
    config: &CameraConfig,
    target: Option<Entity>,
) -> Entity {
    let mut rig = CameraRig::from_config(config);
    rig.target = target;

    commands
        .spawn((
            Name::new("Camera Rig"),
            rig,
            Transform::from_translation(config.default_offset),
        ))
        .id()
}

/// Minimal scene: spawnpoint, player body and a camera rig following it.
pub fn spawn_default_scene(mut commands: Commands, config: Res<SimulationConfig>) {
    spawn_spawnpoint(&mut commands, Vec3::ZERO);
    let player = spawn_gravity_body(&mut commands, &config.gravity, Transform::default());
    spawn_camera_rig(&mut commands, &config.camera, Some(player));
    info!("Default scene spawned");
}
