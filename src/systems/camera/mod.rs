mod follow;
mod speed;

pub use follow::{camera_follow_system, camera_projection_sync_system};
pub use speed::{camera_speed_system, resolve_camera_target_system};
