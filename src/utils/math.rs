use bevy::math::{Quat, Vec3};

use super::constants::WORLD_DOWN;

const EPSILON: f32 = 1e-6;

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f32, end: f32, factor: f32) -> f32 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Spherical interpolation between two vectors.
///
/// Direction is rotated along the arc between `from` and `to` while the
/// magnitude is interpolated linearly. The factor is not clamped: values above
/// 1 keep rotating past `to`, which is how high sensitivities overshoot.
/// Degenerate inputs (a zero-length end point) fall back to a linear blend.
pub fn slerp(from: Vec3, to: Vec3, factor: f32) -> Vec3 {
    let from_len = from.length();
    let to_len = to.length();
    if from_len < EPSILON || to_len < EPSILON {
        return from + (to - from) * factor;
    }

    let from_dir = from / from_len;
    let to_dir = to / to_len;
    let length = from_len + (to_len - from_len) * factor;

    let cos_theta = from_dir.dot(to_dir).clamp(-1.0, 1.0);
    // Parallel directions round to a dot just below 1
    if cos_theta >= 1.0 - EPSILON {
        return from_dir * length;
    }
    let theta = cos_theta.acos();

    let axis = if (std::f32::consts::PI - theta) < 1e-4 {
        // Opposite vectors: turn about the view axis when it is usable
        if from_dir.z.abs() < 1e-4 {
            Vec3::Z
        } else {
            from_dir.any_orthonormal_vector()
        }
    } else {
        match from_dir.cross(to_dir).try_normalize() {
            Some(axis) => axis,
            None => return from_dir * length,
        }
    };

    Quat::from_axis_angle(axis, theta * factor) * from_dir * length
}

/// World down rotated about the forward (Z) axis by `degrees`.
pub fn rotated_down(degrees: f32) -> Vec3 {
    Quat::from_rotation_z(degrees.to_radians()) * WORLD_DOWN
}

/// Rotation that points a transform's local up axis along `up`.
///
/// Returns `None` for a zero-length target so callers keep their current
/// orientation instead of dividing by zero. Planar targets roll about Z only.
pub fn rotation_with_up(up: Vec3) -> Option<Quat> {
    let up = up.normalize_or_zero();
    if up == Vec3::ZERO {
        return None;
    }
    if up.z.abs() < EPSILON {
        Some(Quat::from_rotation_z((-up.x).atan2(up.y)))
    } else {
        Some(Quat::from_rotation_arc(Vec3::Y, up))
    }
}

/// Rotation after easing the up axis from `current_up` toward `target_up`.
///
/// `None` when the target is zero, leaving the orientation untouched.
pub fn eased_up_rotation(current_up: Vec3, target_up: Vec3, factor: f32) -> Option<Quat> {
    if target_up.length_squared() < EPSILON {
        return None;
    }
    rotation_with_up(slerp(current_up, target_up, factor))
}
