//! Angle helpers shared by the sphere modules

/// Converts degrees to radians
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Wraps an angle in degrees into `(-180, 180]`.
///
/// Non-finite input collapses to `0.0` so a bad frame can never poison
/// the rotation state.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Clamps a per-frame angular speed into `[-max, max]`
pub fn clamp_speed(speed: f32, max: f32) -> f32 {
    speed.clamp(-max, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_angle_range() {
        for raw in [-1080.0, -540.0, -180.0, -179.5, 0.0, 179.9, 180.0, 181.0, 360.0, 725.0] {
            let a = normalize_angle(raw);
            assert!(a > -180.0 && a <= 180.0, "{} normalized to {}", raw, a);
        }
    }

    #[test]
    fn test_normalize_angle_values() {
        assert_eq!(normalize_angle(190.0), -170.0);
        assert_eq!(normalize_angle(-190.0), 170.0);
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(45.0), 45.0);
        assert_eq!(normalize_angle(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(25.0, 5.0), 5.0);
        assert_eq!(clamp_speed(-25.0, 5.0), -5.0);
        assert_eq!(clamp_speed(2.5, 5.0), 2.5);
    }
}
