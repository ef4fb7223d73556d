use bevy::math::Vec3;

// Game controller defaults
pub const DEFAULT_TILT_SENSITIVITY: f32 = 20.0;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 2.5;
pub const DEFAULT_GRAVITY_STRENGTH: f32 = 10.0;
pub const MAX_TILT_SENSITIVITY: f32 = 50.0;
pub const MAX_MOUSE_SENSITIVITY: f32 = 10.0;
pub const KEYBOARD_TILT_ADJUSTER: f32 = 10.0; // Tilt sensitivity multiplier for digital rotation

// Gravity controller
pub const DEFAULT_MAX_GRAV_STRENGTH: f32 = 50.0;
pub const SLOW_GRAV_MARGIN: f32 = 20.0; // Drag starts at max - margin
pub const SLOW_GRAV_FACTOR: f32 = 0.3;
pub const UNLIMITED_PERCENTAGE_DIVISOR: f32 = 100.0;
pub const THRUST_RATE: f32 = 30.0; // Strength removed per second while thrusting
pub const WALL_FRICTION: f32 = 40.0; // Strength removed per second while in contact

// Camera rig
pub const DEFAULT_RECT_SIZE: f32 = 8.0;
pub const DEFAULT_MOBILE_RECT_SIZE: f32 = 10.0;
pub const MAX_RECT_SIZE: f32 = 30.0;
pub const SPEED_ZOOM_FACTOR: f32 = 0.35;
pub const SPEED_MOBILE_ZOOM_FACTOR: f32 = 1.15;
pub const SPEED_OFFSET_FACTOR: f32 = 3.5;
pub const FOLLOW_SPEED: f32 = 10.0;
pub const DEFAULT_CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -10.0);

// Input
pub const MOUSE_AXIS_SCALE: f32 = 0.1; // Axis units per pixel of horizontal mouse motion

// Timing
pub const DEFAULT_FIXED_TIMESTEP: f64 = 1.0 / 60.0;
pub const SMOOTH_DELTA_WEIGHT: f32 = 0.2; // Weight of the newest sample in the smoothed delta

/// World "down" in a Y-up scene.
pub const WORLD_DOWN: Vec3 = Vec3::NEG_Y;
