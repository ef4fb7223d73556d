use approx::assert_relative_eq;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use tilt_gravity::resources::{GameController, InputMode, InputSnapshot};

use crate::common::{
    assert_unit_or_zero, assert_vec3_eq, mobile_config, mouse_config, TestAppBuilder,
};

#[test]
fn test_accelerometer_snaps_down_vector() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();

    app.set_input(|input| input.set_acceleration(0.6, 0.8));
    app.run_frame();

    assert_vec3_eq(app.game().down_vector, Vec3::new(0.6, 0.8, 0.0), 1e-6);
    assert!(app.game().mobile_mode());

    // No smoothing: the next reading replaces the vector outright
    app.set_input(|input| input.set_acceleration(-2.0, 0.0));
    app.run_frame();
    assert_vec3_eq(app.game().down_vector, Vec3::NEG_X, 1e-6);
}

#[test]
fn test_flat_device_gives_zero_down_vector() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    app.run_steps(3);
    assert_eq!(app.game().down_vector, Vec3::ZERO);
}

#[test]
fn test_keyboard_rotation_turns_down_vector() {
    let mut app = TestAppBuilder::new().build();
    app.set_input(|input| input.rotate_right = true);

    app.run_steps(20);

    // 20 frames of tilt 20 * adjuster 10 * 1/60 s
    assert_relative_eq!(app.game().z_rotation(), 20.0 * 200.0 / 60.0, epsilon = 1e-2);

    let down = app.game().down_vector;
    assert_unit_or_zero(down);
    assert!(down.x > 0.0);
    assert!(down.y < 0.0);
    assert!(!app.game().mobile_mode());
}

#[test]
fn test_down_vector_holds_when_keys_released() {
    let mut app = TestAppBuilder::new().build();
    app.set_input(|input| input.rotate_left = true);
    app.run_steps(10);

    app.set_input(|input| input.rotate_left = false);
    app.run_steps(120);

    let expected = Quat::from_rotation_z(app.game().z_rotation().to_radians()) * Vec3::NEG_Y;
    assert_vec3_eq(app.game().down_vector, expected, 1e-3);
}

#[test]
fn test_mouse_motion_rotates_down_vector() {
    let mut app = TestAppBuilder::new().with_config(mouse_config()).build();
    app.set_input(|input| input.mouse_dx = 1.0);

    app.run_steps(4);

    // mouse_dx * sensitivity 2.5 per frame, independent of the delta
    assert_relative_eq!(app.game().z_rotation(), 10.0, epsilon = 1e-4);
}

#[test]
fn test_keyboard_forces_mouse_off() {
    let mut app = TestAppBuilder::new()
        .with_input_mode(InputMode::Digital {
            keyboard: true,
            mouse: true,
        })
        .build();

    assert_eq!(
        app.game().input_mode,
        InputMode::Digital {
            keyboard: true,
            mouse: false
        }
    );

    app.set_input(|input| input.mouse_dx = 3.0);
    app.run_steps(5);
    assert_eq!(app.game().z_rotation(), 0.0);
}

#[test]
fn test_set_default_flags_win_over_edits() {
    let mut app = TestAppBuilder::new().build();
    {
        let mut game = app.get_state_mut::<GameController>().unwrap();
        game.set_default_gravity_strength = true;
        game.gravity_strength = 99.0;
    }
    app.run_frame();
    assert_eq!(app.game().gravity_strength, 10.0);

    app.get_state_mut::<GameController>().unwrap().gravity_strength = 42.0;
    app.run_frame();
    assert_eq!(app.game().gravity_strength, 10.0);
}

#[test]
fn test_player_moved_to_spawnpoint() {
    let app = TestAppBuilder::new()
        .with_player_at(Vec3::new(-5.0, 2.0, 0.0))
        .with_spawnpoint(Vec3::new(3.0, 4.0, 0.0))
        .build();

    let player = app.player.unwrap();
    let transform = app.get::<Transform>(player).unwrap();
    assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 0.0));
}

#[test]
fn test_missing_spawnpoint_is_not_fatal() {
    let mut app = TestAppBuilder::new()
        .with_player_at(Vec3::new(1.0, 1.0, 0.0))
        .without_spawnpoint()
        .build();
    app.run_steps(5);

    let player = app.player.unwrap();
    let transform = app.get::<Transform>(player).unwrap();
    assert_eq!(transform.translation, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_ambiguous_spawnpoints_leave_player_in_place() {
    let mut app = TestAppBuilder::new()
        .with_player_at(Vec3::new(1.0, 1.0, 0.0))
        .with_spawnpoint(Vec3::new(3.0, 4.0, 0.0))
        .with_extra_spawnpoint(Vec3::new(-3.0, -4.0, 0.0))
        .build();
    app.run_steps(2);

    let player = app.player.unwrap();
    let transform = app.get::<Transform>(player).unwrap();
    assert_eq!(transform.translation, Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_missing_player_is_not_fatal() {
    let mut app = TestAppBuilder::new()
        .without_player()
        .without_spawnpoint()
        .build();
    app.run_steps(5);
    assert_unit_or_zero(app.game().down_vector);
}

#[test]
fn test_device_input_fills_snapshot() {
    let mut app = TestAppBuilder::new().with_config(mouse_config()).build();

    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyD);
    let mut mouse_buttons = ButtonInput::<MouseButton>::default();
    mouse_buttons.press(MouseButton::Left);
    app.app
        .insert_resource(keyboard)
        .insert_resource(mouse_buttons)
        .insert_resource(AccumulatedMouseMotion {
            delta: Vec2::new(25.0, 3.0),
        });
    app.run_frame();

    let input = app.get_state::<InputSnapshot>().unwrap().clone();
    assert!(input.rotate_right);
    assert!(!input.rotate_left);
    assert!(input.thrust);
    // 0.1 axis units per pixel, vertical motion ignored
    assert_relative_eq!(input.mouse_dx, 2.5, epsilon = 1e-6);

    {
        let mut keyboard = app.get_state_mut::<ButtonInput<KeyCode>>().unwrap();
        keyboard.release(KeyCode::KeyD);
        keyboard.press(KeyCode::KeyA);
    }
    app.get_state_mut::<ButtonInput<MouseButton>>()
        .unwrap()
        .release(MouseButton::Left);
    app.get_state_mut::<AccumulatedMouseMotion>().unwrap().delta = Vec2::ZERO;
    app.run_frame();

    let input = app.get_state::<InputSnapshot>().unwrap();
    assert!(!input.rotate_right);
    assert!(input.rotate_left);
    assert!(!input.thrust);
    assert_eq!(input.mouse_dx, 0.0);
}
