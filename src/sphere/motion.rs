//! Per-frame momentum and auto-rotation

use super::input::VelocityState;
use super::math::normalize_angle;
use super::projection::RotationState;

/// Parameters for the frame step, taken from the widget config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    pub momentum_decay: f32,
    pub max_rotation_speed: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

/// Advances rotation by one frame.
///
/// Does nothing while a drag is active. Otherwise velocity decays first and
/// the decayed, clamped velocity is then added to rotation, plus the
/// auto-rotate yaw increment when enabled.
pub fn step(
    rotation: &mut RotationState,
    velocity: &mut VelocityState,
    dragging: bool,
    settings: &MotionSettings,
) {
    if dragging {
        return;
    }

    velocity.pitch *= settings.momentum_decay;
    velocity.yaw *= settings.momentum_decay;

    let applied = velocity.clamped(settings.max_rotation_speed);
    let mut yaw = rotation.yaw + applied.yaw;
    if settings.auto_rotate {
        yaw += settings.auto_rotate_speed;
    }

    rotation.pitch = normalize_angle(rotation.pitch + applied.pitch);
    rotation.yaw = normalize_angle(yaw);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(auto_rotate: bool) -> MotionSettings {
        MotionSettings {
            momentum_decay: 0.95,
            max_rotation_speed: 5.0,
            auto_rotate,
            auto_rotate_speed: 0.3,
        }
    }

    #[test]
    fn test_decay_is_geometric() {
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::new(4.0, 4.0);
        let mut expected = 4.0_f32;
        for _ in 0..25 {
            step(&mut rotation, &mut velocity, false, &settings(false));
            expected *= 0.95;
            assert_eq!(velocity, VelocityState::new(expected, expected));
        }
    }

    #[test]
    fn test_decay_converges() {
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::new(4.0, 4.0);
        for _ in 0..90 {
            step(&mut rotation, &mut velocity, false, &settings(false));
        }
        assert!(velocity.pitch.abs() < 0.01 * 4.0);
        assert!(velocity.yaw.abs() < 0.01 * 4.0);
    }

    #[test]
    fn test_decay_applied_before_rotation() {
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::new(0.0, 2.0);
        step(&mut rotation, &mut velocity, false, &settings(false));
        assert_eq!(rotation.yaw, 2.0 * 0.95);
    }

    #[test]
    fn test_applied_velocity_is_clamped() {
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::new(-40.0, 40.0);
        step(&mut rotation, &mut velocity, false, &settings(false));
        assert_eq!(rotation, RotationState::new(-5.0, 5.0));
    }

    #[test]
    fn test_auto_rotate_drifts_at_rest() {
        let mut rotation = RotationState::new(0.0, 0.0);
        let mut velocity = VelocityState::ZERO;
        for _ in 0..10 {
            step(&mut rotation, &mut velocity, false, &settings(true));
        }
        assert!((rotation.yaw - 3.0).abs() < 1e-4);
        assert_eq!(rotation.pitch, 0.0);
    }

    #[test]
    fn test_no_step_while_dragging() {
        let mut rotation = RotationState::new(10.0, 10.0);
        let mut velocity = VelocityState::new(1.0, 1.0);
        step(&mut rotation, &mut velocity, true, &settings(true));
        assert_eq!(rotation, RotationState::new(10.0, 10.0));
        assert_eq!(velocity, VelocityState::new(1.0, 1.0));
    }

    #[test]
    fn test_rotation_stays_normalized() {
        let mut rotation = RotationState::new(178.0, 179.0);
        let mut velocity = VelocityState::new(5.0, 5.0);
        for _ in 0..200 {
            step(&mut rotation, &mut velocity, false, &settings(true));
            assert!(rotation.pitch > -180.0 && rotation.pitch <= 180.0);
            assert!(rotation.yaw > -180.0 && rotation.yaw <= 180.0);
        }
    }
}
