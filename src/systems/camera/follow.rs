use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::components::CameraRig;
use crate::resources::{FrameClock, GameController};
use crate::utils::{eased_up_rotation, rotation_with_up};

/// Late placement: follow the target, then roll with the down vector on
/// desktop or hold world up on mobile.
pub fn camera_follow_system(
    game: Res<GameController>,
    clock: Res<FrameClock>,
    mut cameras: Query<(
        &mut CameraRig,
        &mut Transform,
        Option<&mut GlobalTransform>,
        Has<Parent>,
    )>,
    targets: Query<&GlobalTransform, Without<CameraRig>>,
) {
    let factor = game.tilt_sensitivity * clock.smoothed_delta_secs();

    for (mut rig, mut transform, global, has_parent) in cameras.iter_mut() {
        match rig.target.and_then(|target| targets.get(target).ok()) {
            Some(target) => {
                transform.translation = rig.place(target.translation());
            }
            None => {
                error!("No camera target found. Add CameraTarget to the entity to follow.");
                rig.target = None;
            }
        }

        rig.rotate_with_down_vector = !game.mobile_mode();

        let rotation = if rig.rotate_with_down_vector {
            eased_up_rotation(transform.up().as_vec3(), -game.down_vector, factor)
        } else {
            rotation_with_up(Vec3::Y)
        };
        if let Some(rotation) = rotation {
            transform.rotation = rotation;
        }

        // Only a root rig's global transform equals its local one; parented
        // rigs pick up the placement at the next propagation
        if let (Some(mut global), false) = (global, has_parent) {
            *global = GlobalTransform::from(*transform);
        }
    }
}

/// Mirrors the rig's orthographic half-height onto a Bevy projection.
pub fn camera_projection_sync_system(
    mut cameras: Query<(&CameraRig, &mut OrthographicProjection), Changed<CameraRig>>,
) {
    for (rig, mut projection) in cameras.iter_mut() {
        projection.scaling_mode = ScalingMode::FixedVertical {
            viewport_height: rig.ortho_size * 2.0,
        };
    }
}
