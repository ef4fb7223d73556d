use approx::assert_relative_eq;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tilt_gravity::{
    components::{ContactPhase, GravityController, GroundDetection},
    resources::GravityEnvironment,
};

use crate::common::{
    assert_strength_in_range, assert_unit_or_zero, assert_vec3_eq, mobile_config,
    self_rotating_config, send_player_contact, simulate_duration, unlimited_config,
    TestAppBuilder, TILT_RIGHT,
};

#[test]
fn test_strength_clamped_over_frames() {
    let mut app = TestAppBuilder::new().build();

    for _ in 0..700 {
        app.run_frame();
        let gravity = app.player_gravity();
        assert!(gravity.current_strength.abs() <= gravity.max_strength);
    }

    let gravity = app.player_gravity();
    assert_eq!(gravity.current_strength, 50.0);
    assert_eq!(gravity.strength_percentage, 1.0);
    assert_eq!(gravity.drag_factor(), 0.3);
}

#[test]
fn test_strength_ramps_with_global_strength() {
    let mut app = TestAppBuilder::new().build();
    app.run_steps(60);

    // One second at strength 10, below the drag threshold
    assert_relative_eq!(app.player_gravity().current_strength, 10.0, epsilon = 1e-3);
    assert_relative_eq!(app.player_gravity().strength_percentage, 0.2, epsilon = 1e-4);
}

#[test]
fn test_unlimited_strength_uses_fixed_divisor() {
    let mut app = TestAppBuilder::new().with_config(unlimited_config()).build();
    simulate_duration(&mut app, 11.0);

    let gravity = app.player_gravity();
    assert!(gravity.current_strength > gravity.max_strength);
    assert_relative_eq!(
        gravity.strength_percentage,
        gravity.current_strength / 100.0
    );
}

#[test]
fn test_thrust_pushes_strength_down() {
    let mut app = TestAppBuilder::new().build();
    app.set_input(|input| input.thrust = true);
    app.run_steps(60);

    // Net rate of 10 - 30 per second
    assert_relative_eq!(app.player_gravity().current_strength, -20.0, epsilon = 1e-3);
}

#[test]
fn test_thrust_may_leave_range_for_one_tick() {
    let mut app = TestAppBuilder::new().build();
    app.player_gravity_mut().current_strength = -50.0;
    app.set_input(|input| input.thrust = true);

    for _ in 0..10 {
        app.run_frame();
        let gravity = app.player_gravity();
        assert_strength_in_range(gravity.current_strength, gravity.max_strength, app.time_step);
    }

    let gravity = app.player_gravity();
    assert_eq!(gravity.strength_percentage, -1.0);
    assert_relative_eq!(gravity.current_strength, -50.5, epsilon = 1e-4);
}

#[test]
fn test_contact_friction_decays_to_zero() {
    let mut app = TestAppBuilder::new().build();
    app.player_gravity_mut().current_strength = 20.0;
    send_player_contact(&mut app, ContactPhase::Stay);

    for _ in 0..120 {
        app.run_frame();
        assert!(app.player_gravity().current_strength >= 0.0);
    }
    assert!(app.player_gravity().current_strength < 1.0);

    send_player_contact(&mut app, ContactPhase::Exit);
    app.run_steps(60);
    assert!(app.player_gravity().current_strength > 9.0);
}

#[test]
fn test_contact_enter_is_ignored() {
    let mut app = TestAppBuilder::new().build();
    send_player_contact(&mut app, ContactPhase::Enter);
    app.run_frame();

    let player = app.player.unwrap();
    assert!(!app.get::<GroundDetection>(player).unwrap().is_colliding);

    send_player_contact(&mut app, ContactPhase::Stay);
    app.run_frame();
    assert!(app.get::<GroundDetection>(player).unwrap().is_colliding);
}

#[test]
fn test_direction_follows_down_vector() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(60);

    let direction = app.player_gravity().direction;
    assert_vec3_eq(direction, Vec3::X, 1e-3);
}

#[test]
fn test_direction_fixed_to_world_down() {
    let mut config = mobile_config();
    config.gravity.gravity_with_down_vector = false;
    let mut app = TestAppBuilder::new().with_config(config).build();
    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(30);

    assert_eq!(app.player_gravity().direction, Vec3::NEG_Y);
}

#[test]
fn test_body_rotates_with_down_vector() {
    let mut app = TestAppBuilder::new()
        .with_config(self_rotating_config())
        .build();
    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(60);

    let player = app.player.unwrap();
    let up = app.get::<Transform>(player).unwrap().up().as_vec3();
    assert_vec3_eq(up, Vec3::NEG_X, 1e-3);
}

#[test]
fn test_body_keeps_rotation_when_not_opted_in() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(30);

    let player = app.player.unwrap();
    assert_eq!(app.get::<Transform>(player).unwrap().rotation, Quat::IDENTITY);
}

#[test]
fn test_global_gravity_written_each_physics_step() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(3);

    let environment = app.get_state::<GravityEnvironment>().unwrap();
    assert_vec3_eq(environment.gravity, Vec3::new(10.0, 0.0, 0.0), 1e-5);
    assert_eq!(environment.authority, app.player);
    assert_eq!(environment.writers, 1);
    assert!(environment.steps >= 2);
}

#[test]
fn test_global_gravity_uses_current_frame_down_vector() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    app.set_input(|input| input.acceleration = Vec2::new(0.0, -1.0));
    app.run_steps(5);
    let steps_before = app.get_state::<GravityEnvironment>().unwrap().steps;

    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_frame();

    let down = app.game().down_vector;
    assert_vec3_eq(down, Vec3::X, 1e-5);
    let environment = app.get_state::<GravityEnvironment>().unwrap();
    assert!(environment.steps > steps_before);
    assert_vec3_eq(environment.gravity, down * 10.0, 1e-5);
}

#[test]
fn test_global_gravity_untouched_without_bodies() {
    let mut app = TestAppBuilder::new().without_player().build();
    app.run_steps(5);

    let environment = app.get_state::<GravityEnvironment>().unwrap();
    assert_eq!(environment.gravity, Vec3::new(0.0, -10.0, 0.0));
    assert_eq!(environment.steps, 0);
    assert!(environment.authority.is_none());
}

#[test]
fn test_body_without_rigid_body_still_writes() {
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();
    let extra = app
        .app
        .world_mut()
        .spawn((GravityController::default(), Transform::default()))
        .id();

    app.set_input(|input| input.acceleration = TILT_RIGHT);
    app.run_steps(3);

    let environment = app.get_state::<GravityEnvironment>().unwrap();
    assert_eq!(environment.writers, 2);
    assert!(environment.authority == Some(extra) || environment.authority == app.player);
    assert_vec3_eq(environment.gravity, Vec3::new(10.0, 0.0, 0.0), 1e-5);
}

#[test]
fn test_random_input_keeps_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut app = TestAppBuilder::new().with_config(mobile_config()).build();

    for _ in 0..300 {
        let acceleration = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        let thrust = rng.gen_bool(0.2);
        app.set_input(|input| {
            input.acceleration = acceleration;
            input.thrust = thrust;
        });
        if rng.gen_bool(0.05) {
            let phase = if rng.gen_bool(0.5) {
                ContactPhase::Stay
            } else {
                ContactPhase::Exit
            };
            send_player_contact(&mut app, phase);
        }

        app.run_frame();

        assert_unit_or_zero(app.game().down_vector);
        let gravity = app.player_gravity();
        assert_unit_or_zero(gravity.direction);
        assert_strength_in_range(gravity.current_strength, gravity.max_strength, app.time_step);
    }
}
