use super::{NM2RAD, TWO_PI};
use std::f64::consts::PI;

/// Radius below which circles get fewer points than the default count
const SMALL_RADIUS: f64 = 3.0 * NM2RAD;
/// Point count of a full circle with radius [`SMALL_RADIUS`]
const DEFAULT_POINTS: f64 = 300.0;
/// Point count of a full circle with radius approaching zero
const MIN_POINTS: f64 = 8.0;

/// Normalize an angle into `[0, 2π]`
///
/// The input may be negative or larger than a full turn but must be finite.
pub fn abs_angle(angle: f64) -> f64 {
    debug_assert!(angle.is_finite(), "angle must be finite: {angle}");
    let mut abs_angle = angle % TWO_PI;
    if abs_angle < 0.0 {
        abs_angle += TWO_PI;
    }
    debug_assert!((0.0..=TWO_PI).contains(&abs_angle));
    abs_angle
}

/// Signed shortest difference `angle - reference`, in `(-π, π]`
///
/// Both inputs must already be normalized with [`abs_angle`]. A positive
/// result means `angle` lies counter-clockwise (to the left) of `reference`.
/// Opposite angles give `π`.
pub fn delta_angle(angle: f64, reference: f64) -> f64 {
    debug_assert!((0.0..=TWO_PI).contains(&angle));
    debug_assert!((0.0..=TWO_PI).contains(&reference));
    let delta = angle - reference;
    if delta > PI {
        delta - TWO_PI
    } else if delta <= -PI {
        delta + TWO_PI
    } else {
        delta
    }
}

/// Number of segments used to discretize `angle` of a curve of `radius`
///
/// Circles smaller than 3 NM get between 8 (radius → 0) and 300 points per
/// full turn, scaled linearly with the radius. Larger curves are split so
/// that consecutive points are at most `resolution` apart. Never returns
/// zero.
pub fn step_count(radius: f64, angle: f64, resolution: f64) -> usize {
    debug_assert!((0.0..=TWO_PI).contains(&angle));
    debug_assert!(radius >= 0.0);
    debug_assert!(resolution > 0.0);
    let steps = if radius < SMALL_RADIUS {
        let m = DEFAULT_POINTS / SMALL_RADIUS;
        (angle * (m * radius + MIN_POINTS)) / TWO_PI
    } else {
        (angle * radius) / resolution
    };
    (steps as usize).max(1)
}

/// Angular step between two discretized points, see [`step_count`]
pub fn find_step(radius: f64, angle: f64, resolution: f64) -> f64 {
    angle / step_count(radius, angle, resolution) as f64
}
