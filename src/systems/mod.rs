mod camera;
mod game;
mod gravity;
mod ground;
mod input;

pub use camera::{
    camera_follow_system, camera_projection_sync_system, camera_speed_system,
    resolve_camera_target_system,
};
pub use game::{down_vector_system, place_player_at_spawn};
pub use gravity::{global_gravity_system, gravity_controller_system, gravity_self_rotation_system};
pub use ground::{ground_contact_system, ground_debug_ray_system};
pub use input::{frame_clock_system, gather_input_system};
