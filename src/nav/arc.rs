use super::{
    PI_2, RAD2NM, abs_angle, angular_distance, course_with_distance, delta_angle,
    radial_intersection, radial_point,
};
use crate::LatLon;
use std::f64::consts::PI;
use tracing::trace;

/// Turns closer than this to straight ahead (or straight back) count as no
/// turn at all
const COLLINEAR_EPSILON: f64 = 1e-9;

/// Circle recovered from three boundary points by [`fit_arc`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFit {
    pub center: LatLon,
    /// Angular radius (radians)
    pub radius: f64,
    /// Direction of travel `A -> B -> C` around the center
    pub clockwise: bool,
}

impl ArcFit {
    pub fn radius_nm(&self) -> f64 {
        self.radius * RAD2NM
    }
}

/// Check whether `A`, `B` and `C` lie on a common circular arc
///
/// The center is found by intersecting the perpendicular bisectors of the
/// chords `A-B` and `B-C`. The distances from the center to both chord
/// midpoints must agree within an eighth of their value, which holds for
/// evenly sampled arcs such as discretized boundaries.
///
/// Returns `None` for repeated points, for points on a single great circle,
/// for bisectors that do not intersect, for inconsistent midpoint distances
/// and when `A` or `C` is off the circle through `B` by an eighth of its
/// radius or more.
pub fn fit_arc(a: &LatLon, b: &LatLon, c: &LatLon) -> Option<ArcFit> {
    let (lat_a, lon_a) = (a.lat_rad(), a.lon_rad());
    let (lat_b, lon_b) = (b.lat_rad(), b.lon_rad());
    let (lat_c, lon_c) = (c.lat_rad(), c.lon_rad());

    let dist_ab = angular_distance(lat_a, lon_a, lat_b, lon_b);
    let dist_bc = angular_distance(lat_b, lon_b, lat_c, lon_c);
    if dist_ab == 0.0 || dist_bc == 0.0 {
        trace!(dist_ab, dist_bc, "repeated point, not an arc");
        return None;
    }

    let course_ab = course_with_distance(lat_a, lon_a, lat_b, lon_b, dist_ab);
    let course_ba = course_with_distance(lat_b, lon_b, lat_a, lon_a, dist_ab);
    let course_bc = course_with_distance(lat_b, lon_b, lat_c, lon_c, dist_bc);

    let delta = delta_angle(course_bc, course_ba);
    if delta.abs() < COLLINEAR_EPSILON || PI - delta.abs() < COLLINEAR_EPSILON {
        trace!(delta, "points are aligned, not an arc");
        return None;
    }

    // negative difference: inner angle on the right, turning clockwise
    let clockwise = delta < 0.0;
    let towards_center = |course: f64| {
        abs_angle(if clockwise { course - PI_2 } else { course + PI_2 })
    };

    let half_ab = dist_ab / 2.0;
    let (lat1, lon1) = radial_point(lat_a, lon_a, course_ab, half_ab);
    let course1a = course_with_distance(lat1, lon1, lat_a, lon_a, half_ab);

    let half_bc = dist_bc / 2.0;
    let (lat2, lon2) = radial_point(lat_b, lon_b, course_bc, half_bc);
    let course2b = course_with_distance(lat2, lon2, lat_b, lon_b, half_bc);

    let Some(crossing) = radial_intersection(
        lat1,
        lon1,
        lat2,
        lon2,
        towards_center(course1a),
        towards_center(course2b),
    ) else {
        trace!("chord bisectors do not intersect");
        return None;
    };

    if !(crossing.lat.is_finite() && crossing.lon.is_finite()) {
        trace!(lat = crossing.lat, lon = crossing.lon, "no usable center");
        return None;
    }

    let diff = (crossing.dist13 - crossing.dist23).abs();
    let limit = crossing.dist13 / 8.0;
    if diff >= limit {
        trace!(
            dist13 = crossing.dist13,
            dist23 = crossing.dist23,
            "center distances disagree"
        );
        return None;
    }

    // the bisectors only fix the center, the radius comes from B
    let radius = angular_distance(crossing.lat, crossing.lon, lat_b, lon_b);
    let off_circle = [(lat_a, lon_a), (lat_c, lon_c)].into_iter().any(|(lat, lon)| {
        let d = angular_distance(crossing.lat, crossing.lon, lat, lon);
        (d - radius).abs() >= radius / 8.0
    });
    if off_circle {
        trace!(radius, "end points are off the fitted circle");
        return None;
    }

    Some(ArcFit {
        center: LatLon::from_radians(crossing.lat, crossing.lon),
        radius,
        clockwise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{DEG2RAD, NM2RAD, radial_lat_lon};
    use approx::assert_abs_diff_eq;
    use claims::{assert_none, assert_some};

    fn sample(center: LatLon, radius: f64, bearings_deg: [f64; 3]) -> [LatLon; 3] {
        let (lat, lon) = (center.lat_rad(), center.lon_rad());
        bearings_deg.map(|deg| radial_lat_lon(lat, lon, deg * DEG2RAD, radius))
    }

    fn distance(a: &LatLon, b: &LatLon) -> f64 {
        angular_distance(a.lat_rad(), a.lon_rad(), b.lat_rad(), b.lon_rad())
    }

    #[test]
    fn recovers_clockwise_arc() {
        let center = LatLon::new(45.0, 10.0);
        let radius = 5.0 * NM2RAD;
        let [a, b, c] = sample(center, radius, [30.0, 60.0, 90.0]);

        let fit = assert_some!(fit_arc(&a, &b, &c));
        assert!(fit.clockwise);
        assert_abs_diff_eq!(distance(&fit.center, &center), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(fit.radius, radius, epsilon = 1e-6);
        assert_abs_diff_eq!(fit.radius_nm(), 5.0, epsilon = 5.0 / 8.0);
    }

    #[test]
    fn recovers_counter_clockwise_arc() {
        let center = LatLon::new(-33.9, 151.2);
        let radius = 12.0 * NM2RAD;
        let [a, b, c] = sample(center, radius, [200.0, 170.0, 140.0]);

        let fit = assert_some!(fit_arc(&a, &b, &c));
        assert!(!fit.clockwise);
        assert_abs_diff_eq!(distance(&fit.center, &center), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(fit.radius, radius, epsilon = 1e-6);
    }

    #[test]
    fn arc_across_north() {
        let center = LatLon::new(47.0, 8.0);
        let radius = 2.0 * NM2RAD;
        let [a, b, c] = sample(center, radius, [340.0, 0.0, 20.0]);

        let fit = assert_some!(fit_arc(&a, &b, &c));
        assert!(fit.clockwise);
        assert_abs_diff_eq!(distance(&fit.center, &center), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn rejects_points_on_equator() {
        let a = LatLon::new(0.0, 0.0);
        let b = LatLon::new(0.0, 1.0);
        let c = LatLon::new(0.0, 2.0);
        assert_none!(fit_arc(&a, &b, &c));
    }

    #[test]
    fn rejects_points_on_meridian() {
        let a = LatLon::new(44.0, 10.0);
        let b = LatLon::new(45.0, 10.0);
        let c = LatLon::new(46.0, 10.0);
        assert_none!(fit_arc(&a, &b, &c));
    }

    #[test]
    fn rejects_unevenly_sampled_points() {
        let center = LatLon::new(45.0, 10.0);
        let radius = 5.0 * NM2RAD;
        // chords of 10° and 170° put the midpoints at very different distances
        let [a, b, c] = sample(center, radius, [0.0, 10.0, 180.0]);
        assert_none!(fit_arc(&a, &b, &c));
    }

    #[test]
    fn rejects_repeated_point() {
        let a = LatLon::new(45.0, 10.0);
        let b = LatLon::new(45.1, 10.1);
        let c = LatLon::new(45.0, 10.2);
        assert_some!(fit_arc(&a, &b, &c));

        assert_none!(fit_arc(&a, &a, &c));
        assert_none!(fit_arc(&a, &b, &b));
        assert_none!(fit_arc(&a, &a, &a));
    }

    #[test]
    fn rejects_turn_at_pole() {
        // courses from the pole are meaningless, C is far off any circle
        let a = LatLon::new(89.0, 0.0);
        let b = LatLon::new(90.0, 0.0);
        let c = LatLon::new(89.0, 170.0);
        assert_none!(fit_arc(&a, &b, &c));
    }
}
