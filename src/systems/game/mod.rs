mod down_vector;
mod spawn;

pub use down_vector::down_vector_system;
pub use spawn::place_player_at_spawn;
