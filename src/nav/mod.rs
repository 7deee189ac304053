//! Great-circle navigation math on a spherical Earth
//!
//! All functions work in radians. Longitudes are **west-positive** (the
//! convention of the classic aviation formulary); use [`LatLon::lon_rad`]
//! and [`LatLon::from_radians`] to cross over from the east-positive degree
//! API. Distances are angular: multiply by [`RAD2NM`] to get nautical miles.
//!
//! [`LatLon::lon_rad`]: crate::LatLon::lon_rad
//! [`LatLon::from_radians`]: crate::LatLon::from_radians

mod angle;
mod arc;
mod great_circle;
mod intersection;

pub use angle::*;
pub use arc::*;
pub use great_circle::*;
pub use intersection::*;

use std::f64::consts::PI;

pub const TWO_PI: f64 = 2.0 * PI;
pub(crate) const PI_2: f64 = PI / 2.0;
pub const DEG2RAD: f64 = PI / 180.0;
pub const RAD2DEG: f64 = 180.0 / PI;
/// One nautical mile is one minute of arc
pub const NM2RAD: f64 = PI / (180.0 * 60.0);
pub const RAD2NM: f64 = (180.0 * 60.0) / PI;
