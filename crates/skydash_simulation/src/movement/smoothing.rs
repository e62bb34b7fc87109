//! Yaw math: stick → yaw, yaw → direction, critically damped smoothing.
//!
//! Соглашение: yaw в градусах вокруг +Y, 0° = +Z (forward), 90° = +X (right).

use bevy::prelude::*;

/// Кратчайшая разница углов `target - current` в диапазоне (-180, 180]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Critically damped approach (SmoothDamp)
///
/// `velocity` — состояние между вызовами. Не перелетает через `target`.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, delta: f32) -> f32 {
    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * delta;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * exp;

    let output = target + (change + temp) * exp;

    // Overshoot guard
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }

    output
}

/// SmoothDamp для углов (через кратчайшую дугу)
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, delta)
}

/// Yaw движения по стику относительно камеры
pub fn stick_yaw(stick: Vec2, camera_yaw: f32) -> f32 {
    stick.x.atan2(stick.y).to_degrees() + camera_yaw
}

pub fn yaw_to_direction(yaw_degrees: f32) -> Vec3 {
    let radians = yaw_degrees.to_radians();
    Vec3::new(radians.sin(), 0.0, radians.cos())
}

/// Yaw горизонтальной проекции `direction`
pub fn direction_to_yaw(direction: Vec3) -> f32 {
    direction.x.atan2(direction.z).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_angle_takes_short_arc() {
        assert!((delta_angle(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((delta_angle(10.0, 350.0) + 20.0).abs() < 1e-4);
        assert!((delta_angle(0.0, 180.0) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut current = 0.0;
        let mut velocity = 0.0;

        for _ in 0..100 {
            current = smooth_damp(current, 90.0, &mut velocity, 0.05, 0.02);
            assert!(current <= 90.0);
        }

        assert!((current - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_smooth_damp_zero_delta_holds() {
        let mut velocity = 0.0;
        assert_eq!(smooth_damp(10.0, 90.0, &mut velocity, 0.05, 0.0), 10.0);
    }

    #[test]
    fn test_smooth_damp_angle_wraps() {
        let mut velocity = 0.0;
        let mut current = 350.0;

        for _ in 0..100 {
            current = smooth_damp_angle(current, 10.0, &mut velocity, 0.05, 0.02);
        }

        // Через 0°, а не через 180°
        assert!((current - 370.0).abs() < 0.01);
    }

    #[test]
    fn test_stick_yaw_is_camera_relative() {
        assert!((stick_yaw(Vec2::new(0.0, 1.0), 0.0)).abs() < 1e-4);
        assert!((stick_yaw(Vec2::new(1.0, 0.0), 0.0) - 90.0).abs() < 1e-4);
        assert!((stick_yaw(Vec2::new(0.0, 1.0), 45.0) - 45.0).abs() < 1e-4);
    }

    #[test]
    fn test_yaw_direction_round_trip_axes() {
        let forward = yaw_to_direction(0.0);
        assert!((forward - Vec3::Z).length() < 1e-5);

        let right = yaw_to_direction(90.0);
        assert!((right - Vec3::X).length() < 1e-5);
        assert!((direction_to_yaw(Vec3::X) - 90.0).abs() < 1e-4);
    }
}
