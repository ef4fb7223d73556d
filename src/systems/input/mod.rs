mod clock;
mod gather;

pub use clock::frame_clock_system;
pub use gather::gather_input_system;
