use super::{PI_2, TWO_PI, abs_angle};
use crate::LatLon;
use std::f64::consts::PI;

fn debug_assert_coords(lat: f64, lon: f64) {
    debug_assert!((-PI_2..=PI_2).contains(&lat), "latitude out of range: {lat}");
    debug_assert!((-PI..=PI).contains(&lon), "longitude out of range: {lon}");
}

/// Angular great-circle distance between two points (haversine formula)
///
/// Result is in `[0, π]`.
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    debug_assert_coords(lat1, lon1);
    debug_assert_coords(lat2, lon2);
    let sin_dlat = ((lat1 - lat2) / 2.0).sin();
    let sin_dlon = ((lon1 - lon2) / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * h.sqrt().min(1.0).asin()
}

/// Bearings that need no general formula: the poles and meridian travel
///
/// Heading to the north pole (or due north along a meridian) is encoded as
/// `2π`, never `0`.
fn special_course(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Option<f64> {
    if lat2 == PI_2 {
        Some(TWO_PI)
    } else if lat2 == -PI_2 {
        Some(PI)
    } else if lon1 == lon2 {
        Some(if lat1 > lat2 { PI } else { TWO_PI })
    } else {
        None
    }
}

/// Initial great-circle bearing from point 1 to point 2
///
/// Uses the already known angular distance `d` between the points instead
/// of computing it again. Result is in `[0, 2π]`. A zero distance falls back
/// to [`course`].
pub fn course_with_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, d: f64) -> f64 {
    debug_assert_coords(lat1, lon1);
    debug_assert_coords(lat2, lon2);
    if let Some(course) = special_course(lat1, lon1, lat2, lon2) {
        return course;
    }
    if d == 0.0 {
        return course(lat1, lon1, lat2, lon2);
    }

    let cos_course =
        ((lat2.sin() - lat1.sin() * d.cos()) / (d.sin() * lat1.cos())).clamp(-1.0, 1.0);
    let course = cos_course.acos();
    abs_angle(if (lon2 - lon1).sin() < 0.0 {
        course
    } else {
        TWO_PI - course
    })
}

/// Initial great-circle bearing from point 1 to point 2
///
/// Result is in `[0, 2π]`.
pub fn course(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    debug_assert_coords(lat1, lon1);
    debug_assert_coords(lat2, lon2);
    if let Some(course) = special_course(lat1, lon1, lat2, lon2) {
        return course;
    }

    let dlon = lon1 - lon2;
    let cos_lat2 = lat2.cos();
    abs_angle(f64::atan2(
        dlon.sin() * cos_lat2,
        lat1.cos() * lat2.sin() - lat1.sin() * cos_lat2 * dlon.cos(),
    ))
}

/// Destination reached from point 1 travelling `distance` along `bearing`
///
/// Returns `(lat, lon)` in radians, longitude normalized into `(-π, π]`.
pub fn radial_point(lat1: f64, lon1: f64, bearing: f64, distance: f64) -> (f64, f64) {
    debug_assert_coords(lat1, lon1);
    debug_assert!(bearing > -PI && bearing <= 2.0 * TWO_PI, "bearing out of range: {bearing}");

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_dst = distance.sin();
    let cos_dst = distance.cos();

    let lat = (sin_lat1 * cos_dst + cos_lat1 * sin_dst * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let dlon = f64::atan2(bearing.sin() * sin_dst * cos_lat1, cos_dst - sin_lat1 * lat.sin());
    let lon = PI - (PI - (lon1 - dlon)).rem_euclid(TWO_PI);

    debug_assert_coords(lat, lon);
    (lat, lon)
}

/// [`radial_point`] converted back to a degree coordinate
pub fn radial_lat_lon(lat1: f64, lon1: f64, bearing: f64, distance: f64) -> LatLon {
    let (lat, lon) = radial_point(lat1, lon1, bearing, distance);
    LatLon::from_radians(lat, lon)
}
