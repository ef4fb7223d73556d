use bevy::prelude::*;

use crate::components::{ContactEvent, GroundDetection};

pub fn ground_contact_system(
    mut events: EventReader<ContactEvent>,
    mut query: Query<&mut GroundDetection>,
) {
    for event in events.read() {
        if let Ok(mut ground) = query.get_mut(event.entity) {
            ground.handle(event.phase);
        }
    }
}

/// Red ray along each body's local down axis.
pub fn ground_debug_ray_system(
    mut gizmos: Gizmos,
    query: Query<&GlobalTransform, With<GroundDetection>>,
) {
    for transform in query.iter() {
        gizmos.ray(
            transform.translation(),
            transform.down().as_vec3(),
            Color::srgb(1.0, 0.0, 0.0),
        );
    }
}
