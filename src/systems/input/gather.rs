use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::resources::{InputBindings, InputSnapshot};
use crate::utils::MOUSE_AXIS_SCALE;

/// Refreshes the digital fields of `InputSnapshot` from Bevy's input resources.
///
/// Each device is optional so the crate runs headless; fields whose device is
/// missing keep whatever the host wrote. The accelerometer is never touched.
pub fn gather_input_system(
    bindings: Res<InputBindings>,
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse_buttons: Option<Res<ButtonInput<MouseButton>>>,
    mouse_motion: Option<Res<AccumulatedMouseMotion>>,
    mut input: ResMut<InputSnapshot>,
) {
    if let Some(keyboard) = keyboard {
        input.rotate_right = keyboard.pressed(bindings.rotate_right);
        input.rotate_left = keyboard.pressed(bindings.rotate_left);
    }

    if let Some(mouse_buttons) = mouse_buttons {
        input.thrust = mouse_buttons.pressed(bindings.thrust);
    }

    if let Some(motion) = mouse_motion {
        input.mouse_dx = motion.delta.x * MOUSE_AXIS_SCALE;
    }
}
