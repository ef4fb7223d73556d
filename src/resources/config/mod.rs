pub mod camera;
pub mod game;
pub mod gravity;
pub mod simulation;

pub use camera::CameraConfig;
pub use game::GameConfig;
pub use gravity::GravityConfig;
pub use simulation::SimulationConfig;
