use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy, transform::TransformPlugin};
use std::{env, time::Duration};

use tilt_gravity::{
    components::{CameraRig, GravityController, Player},
    plugins::{spawn_default_scene, StartupStage, TiltGravityPlugin, TiltSet},
    resources::{FrameClock, GameController, GravityEnvironment, InputSnapshot, SimulationConfig},
};

const DEFAULT_FRAMES: u64 = 600;
const REPORT_EVERY: u64 = 60;

/// Headless run of the tilt gravity layer.
///
/// Usage: `tilt_sim [config.yaml] [frames]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };
    let frames = match args.next() {
        Some(frames) => frames.parse::<u64>()?,
        None => DEFAULT_FRAMES,
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), TransformPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            config.fixed_timestep,
        )))
        .add_plugins(TiltGravityPlugin::with_config(config.clone()))
        .add_systems(
            Startup,
            spawn_default_scene.in_set(StartupStage::SpawnEntities),
        )
        .add_systems(
            PreUpdate,
            scripted_input_system
                .after(TiltSet::Input)
                .before(TiltSet::DownVector),
        );

    info!(
        "Running {} frames in {:?} mode",
        frames, config.game.input_mode
    );

    for _ in 0..frames {
        app.update();
        report(&mut app);
    }

    Ok(())
}

/// Sweeps the device tilt through a full turn and pulses thrust and rotation.
fn scripted_input_system(clock: Res<FrameClock>, mut input: ResMut<InputSnapshot>) {
    let frame = clock.frame_count();
    let angle = (frame as f32 * 0.5).to_radians();

    input.set_acceleration(angle.sin(), -angle.cos());
    input.rotate_right = (frame / 120) % 2 == 0;
    input.rotate_left = !input.rotate_right;
    input.thrust = frame % 240 >= 200;
}

fn report(app: &mut App) {
    let world = app.world_mut();
    let frame = world.resource::<FrameClock>().frame_count();
    if frame % REPORT_EVERY != 0 {
        return;
    }

    let down = world.resource::<GameController>().down_vector;
    let environment = world.resource::<GravityEnvironment>().clone();

    let mut bodies = world.query_filtered::<&GravityController, With<Player>>();
    if let Ok(gravity) = bodies.get_single(world) {
        info!(
            "frame {}: down {:?} strength {:.2} ({:.0}%) global {:?} over {} steps",
            frame,
            down,
            gravity.current_strength,
            gravity.strength_percentage * 100.0,
            environment.gravity,
            environment.steps
        );
    }

    let mut cameras = world.query::<(&CameraRig, &Transform)>();
    for (rig, transform) in cameras.iter(world) {
        info!(
            "frame {}: camera at {:?} size {:.2} offset {:?}",
            frame, transform.translation, rig.ortho_size, rig.offset
        );
    }
}
