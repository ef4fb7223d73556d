mod camera;
mod gravity;
mod ground;
mod player;

pub use camera::CameraRig;
pub use gravity::{GravityController, StrengthStep};
pub use ground::{ContactEvent, ContactPhase, GroundDetection};
pub use player::{CameraTarget, Player, RigidBody, Spawnpoint};
