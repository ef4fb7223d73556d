use bevy::prelude::*;

use crate::systems::ground_debug_ray_system;

/// Draws the ground detection ray. Needs Bevy's gizmo plugin.
pub struct GroundDebugPlugin;

impl Plugin for GroundDebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, ground_debug_ray_system);
    }
}
