use bevy::ecs::entity::Entities;
use bevy::prelude::*;

use crate::components::{CameraRig, CameraTarget, GravityController};
use crate::resources::{FrameClock, GameController};

/// Points rigs without a live target at the `CameraTarget` entity.
pub fn resolve_camera_target_system(
    mut cameras: Query<&mut CameraRig>,
    targets: Query<Entity, With<CameraTarget>>,
    entities: &Entities,
) {
    for mut rig in cameras.iter_mut() {
        let alive = rig.target.is_some_and(|target| entities.contains(target));
        if alive {
            continue;
        }
        if let Ok(target) = targets.get_single() {
            rig.target = Some(target);
        }
    }
}

/// Zooms and offsets each rig from its target's gravity strength.
///
/// The gravity source is the target itself or its parent.
pub fn camera_speed_system(
    game: Res<GameController>,
    clock: Res<FrameClock>,
    mut cameras: Query<&mut CameraRig>,
    gravity_bodies: Query<&GravityController>,
    parents: Query<&Parent>,
) {
    let mobile = game.mobile_mode();

    for mut rig in cameras.iter_mut() {
        let source = rig
            .target
            .and_then(|target| target_gravity(target, &gravity_bodies, &parents));

        match source {
            Some(gravity) => {
                rig.update_zoom(gravity.current_strength, mobile, clock.delta_secs());
                rig.update_offset(
                    game.down_vector,
                    gravity.strength_percentage,
                    clock.smoothed_delta_secs(),
                );
            }
            None => {
                warn!("No GravityController on camera target or its parent. Speed-based camera features disabled.");
                rig.fallback(mobile);
            }
        }
    }
}

fn target_gravity<'a>(
    target: Entity,
    gravity_bodies: &'a Query<&GravityController>,
    parents: &Query<&Parent>,
) -> Option<&'a GravityController> {
    gravity_bodies.get(target).ok().or_else(|| {
        parents
            .get(target)
            .ok()
            .and_then(|parent| gravity_bodies.get(parent.get()).ok())
    })
}
