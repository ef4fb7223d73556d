mod global;
mod strength;

pub use global::global_gravity_system;
pub use strength::{gravity_controller_system, gravity_self_rotation_system};
