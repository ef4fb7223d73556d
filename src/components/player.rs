use bevy::prelude::*;

/// Body moved to the spawnpoint on startup.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct Player;

#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct Spawnpoint;

/// Entity the camera rig follows when it has no explicit target.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct CameraTarget;

/// Marks a body whose dynamics are integrated by the host physics engine.
#[derive(Component, Reflect, Debug, Default, Clone, Copy)]
#[reflect(Component)]
pub struct RigidBody;
