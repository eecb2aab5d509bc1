//! Projection of spherical placements into screen space
//!
//! Each frame the whole sphere is re-projected from the current rotation.
//! Screen axes follow egui: +x right, +y down, +z toward the viewer.

use glam::Vec3;

use super::layout::SphericalPosition;
use super::math::deg_to_rad;
use crate::constants::projection::*;

/// Orientation of the whole sphere in degrees, each axis in `(-180, 180]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    /// Tilt about the horizontal axis
    pub pitch: f32,
    /// Turn about the vertical axis
    pub yaw: f32,
    /// Unused, always zero
    pub roll: f32,
}

impl RotationState {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw, roll: 0.0 }
    }
}

impl Default for RotationState {
    fn default() -> Self {
        let [pitch, yaw, roll] = crate::constants::INITIAL_ROTATION;
        Self { pitch, yaw, roll }
    }
}

/// Per-item, per-frame projection result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPosition {
    /// Offset from the container center
    pub x: f32,
    pub y: f32,
    /// Depth, positive toward the viewer
    pub z: f32,
    pub scale: f32,
    /// Stacking key, larger draws on top
    pub z_index: i32,
    pub is_visible: bool,
    pub fade_opacity: f32,
    pub original_index: usize,
}

/// Converts a placement to cartesian coordinates, unrotated
pub fn spherical_to_cartesian(pos: &SphericalPosition) -> Vec3 {
    let theta = deg_to_rad(pos.theta);
    let phi = deg_to_rad(pos.phi);
    Vec3::new(
        pos.radius * phi.sin() * theta.cos(),
        pos.radius * phi.cos(),
        pos.radius * phi.sin() * theta.sin(),
    )
}

/// Applies yaw (about the vertical axis) and then pitch (about the horizontal axis)
pub fn rotate_point(point: Vec3, rotation: &RotationState) -> Vec3 {
    let (sin_y, cos_y) = deg_to_rad(rotation.yaw).sin_cos();
    let (sin_x, cos_x) = deg_to_rad(rotation.pitch).sin_cos();

    let x = point.x * cos_y + point.z * sin_y;
    let z = -point.x * sin_y + point.z * cos_y;

    let y = point.y * cos_x - z * sin_x;
    let z = point.y * sin_x + z * cos_x;

    Vec3::new(x, y, z)
}

/// Whether an item at `depth` should be drawn at all
pub fn is_visible_at(depth: f32) -> bool {
    depth > FADE_FAR
}

/// Opacity for an item at `depth`: 1 in front, fading linearly to 0 across the fade band
pub fn fade_opacity_at(depth: f32) -> f32 {
    if depth > FADE_NEAR {
        1.0
    } else {
        ((depth - FADE_FAR) / (FADE_NEAR - FADE_FAR)).max(0.0)
    }
}

/// Combined center-bias and depth-bias scale for a rotated point
pub fn scale_for(point: Vec3, sphere_radius: f32) -> f32 {
    let radius = sphere_radius.max(f32::EPSILON);

    let planar = point.truncate().length();
    let distance_ratio = (planar / radius).min(1.0);
    let center_scale = (1.0 - distance_ratio * CENTER_FALLOFF).max(CENTER_SCALE_FLOOR);

    let depth_ratio = (point.z + radius) / (2.0 * radius);
    let depth_scale = (DEPTH_SCALE_BASE + depth_ratio * DEPTH_SCALE_GAIN).max(DEPTH_SCALE_FLOOR);

    center_scale * depth_scale
}

/// Stacking key, monotonic in depth and positive for every point on the sphere
pub fn z_index_for(depth: f32) -> i32 {
    (Z_INDEX_OFFSET + depth).round() as i32
}

/// Projects a single placement
pub fn project_one(
    index: usize,
    pos: &SphericalPosition,
    rotation: &RotationState,
    sphere_radius: f32,
) -> WorldPosition {
    let rotated = rotate_point(spherical_to_cartesian(pos), rotation);
    WorldPosition {
        x: rotated.x,
        y: rotated.y,
        z: rotated.z,
        scale: scale_for(rotated, sphere_radius),
        z_index: z_index_for(rotated.z),
        is_visible: is_visible_at(rotated.z),
        fade_opacity: fade_opacity_at(rotated.z),
        original_index: index,
    }
}

/// Projects every placement for the given rotation. Pure: equal inputs give equal outputs.
pub fn project_all(
    positions: &[SphericalPosition],
    rotation: &RotationState,
    sphere_radius: f32,
) -> Vec<WorldPosition> {
    positions
        .iter()
        .enumerate()
        .map(|(i, pos)| project_one(i, pos, rotation, sphere_radius))
        .collect()
}

/// Indices of visible items ordered back to front, ready for painting
pub fn draw_order(world: &[WorldPosition]) -> Vec<usize> {
    let mut order: Vec<usize> = world
        .iter()
        .filter(|w| w.is_visible)
        .map(|w| w.original_index)
        .collect();
    order.sort_by_key(|&i| world[i].z_index);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_spherical_to_cartesian_axes() {
        // phi = 90, theta = 90 points straight at the viewer
        let p = spherical_to_cartesian(&SphericalPosition { theta: 90.0, phi: 90.0, radius: 100.0 });
        assert!(approx(p.x, 0.0) && approx(p.y, 0.0) && approx(p.z, 100.0));
    }

    #[test]
    fn test_rotation_order_yaw_then_pitch() {
        let point = Vec3::new(100.0, 0.0, 0.0);
        let rotation = RotationState::new(90.0, 90.0);
        let r = rotate_point(point, &rotation);
        // Yaw 90 sends +x to -z, pitch 90 then sends -z to +y
        assert!(approx(r.x, 0.0), "{:?}", r);
        assert!(approx(r.y, 100.0), "{:?}", r);
        assert!(approx(r.z, 0.0), "{:?}", r);

        // Pitch first would have left the point on the x axis before yawing
        let pitch_first_yaw = rotate_point(
            rotate_point(point, &RotationState::new(90.0, 0.0)),
            &RotationState::new(0.0, 90.0),
        );
        assert!(!approx(pitch_first_yaw.y, r.y));
    }

    #[test]
    fn test_visibility_boundary_flips() {
        assert!(!is_visible_at(FADE_FAR));
        assert!(is_visible_at(FADE_FAR + 0.01));
        assert!(!is_visible_at(FADE_FAR - 0.01));
    }

    #[test]
    fn test_fade_band() {
        assert_eq!(fade_opacity_at(50.0), 1.0);
        assert_eq!(fade_opacity_at(-9.9), 1.0);
        assert!(approx(fade_opacity_at(FADE_NEAR), 1.0));
        assert!(approx(fade_opacity_at(-20.0), 0.5));
        assert_eq!(fade_opacity_at(FADE_FAR), 0.0);
        assert_eq!(fade_opacity_at(-200.0), 0.0);
    }

    #[test]
    fn test_scale_center_and_depth_bias() {
        let front = scale_for(Vec3::new(0.0, 0.0, 200.0), 200.0);
        let rim = scale_for(Vec3::new(200.0, 0.0, 0.0), 200.0);
        let back = scale_for(Vec3::new(0.0, 0.0, -200.0), 200.0);
        assert!(approx(front, 1.1));
        assert!(front > rim);
        assert!(front > back);
        assert!(rim >= CENTER_SCALE_FLOOR * DEPTH_SCALE_FLOOR);
    }

    #[test]
    fn test_z_index_positive_and_monotonic() {
        assert!(z_index_for(-200.0) > 0);
        assert!(z_index_for(10.0) > z_index_for(-10.0));
    }

    #[test]
    fn test_projection_is_pure() {
        let positions = vec![
            SphericalPosition { theta: 12.0, phi: 40.0, radius: 200.0 },
            SphericalPosition { theta: -130.0, phi: 120.0, radius: 200.0 },
            SphericalPosition { theta: 77.5, phi: 175.0, radius: 200.0 },
        ];
        let rotation = RotationState::new(-33.0, 140.0);
        let a = project_all(&positions, &rotation, 200.0);
        let b = project_all(&positions, &rotation, 200.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[2].original_index, 2);
    }

    #[test]
    fn test_draw_order_back_to_front() {
        let positions = vec![
            SphericalPosition { theta: 90.0, phi: 90.0, radius: 100.0 },
            SphericalPosition { theta: 0.0, phi: 90.0, radius: 100.0 },
            SphericalPosition { theta: -90.0, phi: 90.0, radius: 100.0 },
        ];
        let world = project_all(&positions, &RotationState::new(0.0, 0.0), 100.0);
        // Item 2 sits at the back and is culled
        assert_eq!(draw_order(&world), vec![1, 0]);
    }
}
