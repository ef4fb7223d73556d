pub mod config;
mod environment;
mod game;
mod input;
mod time;

pub use config::{CameraConfig, GameConfig, GravityConfig, SimulationConfig};
pub use environment::GravityEnvironment;
pub use game::{accelerometer_down, GameController, InputMode};
pub use input::{InputBindings, InputSnapshot};
pub use time::FrameClock;
