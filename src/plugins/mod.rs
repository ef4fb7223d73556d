mod debug;
mod spawn;
mod staging;
mod tilt;

pub use debug::GroundDebugPlugin;
pub use spawn::{spawn_camera_rig, spawn_default_scene, spawn_gravity_body, spawn_spawnpoint};
pub use staging::{StartupSequencePlugin, StartupStage};
pub use tilt::{TiltGravityPlugin, TiltSet};
