use super::{
    TWO_PI, abs_angle, angular_distance, course, course_with_distance, delta_angle, radial_point,
};
use std::f64::consts::PI;
use tracing::trace;

/// `sin` values below this are treated as zero when looking for degenerate
/// radial configurations
const SIN_EPSILON: f64 = 1e-12;

/// Solution of a spherical triangle, see [`solve_spherical_triangle`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalTriangle {
    /// Angle opposite the known side
    pub alpha: f64,
    /// Side opposite `beta`
    pub b: f64,
    /// Side opposite `gamma`
    pub c: f64,
}

/// Solve a spherical triangle from one side and its two adjacent angles
///
/// `a` is the known side, `beta` and `gamma` the angles at its two ends.
pub fn solve_spherical_triangle(a: f64, beta: f64, gamma: f64) -> SphericalTriangle {
    debug_assert!((0.0..=TWO_PI).contains(&a));
    debug_assert!((0.0..=TWO_PI).contains(&beta));
    debug_assert!((0.0..=TWO_PI).contains(&gamma));

    let (sin_beta, cos_beta) = beta.sin_cos();
    let (sin_gamma, cos_gamma) = gamma.sin_cos();

    let alpha = (sin_beta * sin_gamma * a.cos() - cos_beta * cos_gamma)
        .clamp(-1.0, 1.0)
        .acos();
    let cos_alpha = alpha.cos();
    let numerator = a.sin() * sin_beta * sin_gamma;
    let b = f64::atan2(numerator, cos_beta + cos_gamma * cos_alpha);
    let c = f64::atan2(numerator, cos_gamma + cos_beta * cos_alpha);

    debug_assert!((0.0..=PI).contains(&alpha));
    SphericalTriangle { alpha, b, c }
}

/// Crossing point of two radials, see [`radial_intersection`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialIntersection {
    /// Latitude of the crossing point (radians)
    pub lat: f64,
    /// Longitude of the crossing point (radians, west-positive)
    pub lon: f64,
    /// Angular distance from point 1 to the crossing point
    pub dist13: f64,
    /// Angular distance from point 2 to the crossing point
    pub dist23: f64,
}

/// Intersect the great circle leaving point 1 along `course13` with the one
/// leaving point 2 along `course23`
///
/// Returns `None` when both radials lie on the great circle through the two
/// points (infinitely many intersections) or when they lead away on
/// opposite sides of it (ambiguous).
pub fn radial_intersection(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
    course13: f64,
    course23: f64,
) -> Option<RadialIntersection> {
    let dist12 = angular_distance(lat1, lon1, lat2, lon2);
    let course12 = course_with_distance(lat1, lon1, lat2, lon2, dist12);
    let course21 = course_with_distance(lat2, lon2, lat1, lon1, dist12);

    let angle1 = abs_angle(course13 - course12);
    let angle2 = abs_angle(course21 - course23);
    let sin1 = angle1.sin();
    let sin2 = angle2.sin();

    if sin1.abs() < SIN_EPSILON && sin2.abs() < SIN_EPSILON {
        trace!(angle1, angle2, "radials on the same great circle");
        return None;
    }
    if sin1 * sin2 < 0.0 {
        trace!(angle1, angle2, "radials diverge, intersection ambiguous");
        return None;
    }

    // vertex 1 carries angle1, so the side opposite it is 2-3
    let triangle = solve_spherical_triangle(dist12, angle1, angle2);
    let dist23 = triangle.b;
    let dist13 = triangle.c;
    debug_assert!((0.0..=PI).contains(&dist13));
    debug_assert!((0.0..=PI).contains(&dist23));

    let (lat, lon) = radial_point(lat1, lon1, course13, dist13);
    Some(RadialIntersection {
        lat,
        lon,
        dist13,
        dist23,
    })
}

/// Bisector of the angle at vertex `B` of the path `A -> B -> C`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisector {
    /// Bearing from `B` halfway between the bearings to `A` and `C`
    pub bearing: f64,
    /// Whether the path turns clockwise (right) at `B`
    pub clockwise: bool,
}

/// Compute the [`Bisector`] at `B`
///
/// A positive turn from the course `B -> A` to the course `B -> C` means
/// the inner angle is on the left, i.e. a counter-clockwise turn.
pub fn bisector(
    lat_a: f64,
    lon_a: f64,
    lat_b: f64,
    lon_b: f64,
    lat_c: f64,
    lon_c: f64,
) -> Bisector {
    let course_ba = course(lat_b, lon_b, lat_a, lon_a);
    let course_bc = course(lat_b, lon_b, lat_c, lon_c);
    let diff = delta_angle(course_bc, course_ba);

    Bisector {
        bearing: abs_angle(course_ba + diff / 2.0),
        clockwise: diff <= 0.0,
    }
}
