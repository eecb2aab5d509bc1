//! Fibonacci-sphere placement of items

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use crate::constants::layout::{AZIMUTH_JITTER_DEG, MAX_POLAR_DEG, MIN_POLAR_DEG};

/// Static placement of one item on the sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPosition {
    /// Azimuth in degrees, `(-180, 180]`
    pub theta: f32,
    /// Polar angle in degrees, `[5, 175]`
    pub phi: f32,
    pub radius: f32,
}

/// Spreads `count` points roughly evenly over a sphere of `radius`.
///
/// Inclination follows `acos(1 - 2i/N)` and azimuth advances by the golden
/// angle per index, then gets a small random jitter from `rng` to break up
/// visible banding. `count == 0` yields an empty layout.
pub fn generate_positions<R: Rng>(
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<SphericalPosition> {
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let angle_increment = std::f64::consts::TAU / golden_ratio;

    let mut positions = Vec::with_capacity(count);
    for i in 0..count {
        let t = i as f64 / count as f64;
        let inclination = (1.0 - 2.0 * t).acos();
        let azimuth = angle_increment * i as f64;

        let jitter = (rng.random::<f32>() - 0.5) * AZIMUTH_JITTER_DEG;
        let theta = normalize_angle((azimuth.to_degrees() % 360.0) as f32 + jitter);
        let phi = (inclination.to_degrees() as f32).clamp(MIN_POLAR_DEG, MAX_POLAR_DEG);

        positions.push(SphericalPosition { theta, phi, radius });
    }

    log::debug!("Generated {} sphere positions at radius {:.1}", count, radius);
    positions
}
