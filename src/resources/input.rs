use bevy::prelude::*;

/// Raw input sampled once per frame.
///
/// The accelerometer reading is fed by the host platform. Keyboard, mouse and
/// thrust fields are refreshed from Bevy's input resources when they exist.
#[derive(Resource, Reflect, Debug, Clone, Default, PartialEq)]
#[reflect(Resource)]
pub struct InputSnapshot {
    /// Device acceleration (x, y) in g.
    pub acceleration: Vec2,
    pub rotate_right: bool,
    pub rotate_left: bool,
    /// Horizontal mouse motion this frame in axis units.
    pub mouse_dx: f32,
    /// Manual thrust trigger held.
    pub thrust: bool,
}

impl InputSnapshot {
    pub fn set_acceleration(&mut self, x: f32, y: f32) {
        self.acceleration = Vec2::new(x, y);
    }
}

/// Key mapping for digital rotation and thrust.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub rotate_right: KeyCode,
    pub rotate_left: KeyCode,
    pub thrust: MouseButton,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            rotate_right: KeyCode::KeyD,
            rotate_left: KeyCode::KeyA,
            thrust: MouseButton::Left,
        }
    }
}
