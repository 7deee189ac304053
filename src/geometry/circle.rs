use crate::error::{Error, Result};
use crate::nav::{NM2RAD, RAD2NM, TWO_PI, radial_lat_lon, step_count};
use crate::{Config, LatLon};

/// A full circle around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    center: LatLon,
    /// Angular radius (radians)
    radius: f64,
}

impl Circle {
    /// Create a circle of `radius_nm` nautical miles
    ///
    /// The radius must be finite and not negative; see [`Circle::try_new`]
    /// for a checked variant.
    pub fn new(center: LatLon, radius_nm: f64) -> Self {
        debug_assert!(radius_nm >= 0.0, "negative radius: {radius_nm}");
        Self {
            center,
            radius: radius_nm * NM2RAD,
        }
    }

    pub fn try_new(center: LatLon, radius_nm: f64) -> Result<Self> {
        if !radius_nm.is_finite() || radius_nm < 0.0 {
            return Err(Error::InvalidRadius(radius_nm));
        }
        Ok(Self::new(center, radius_nm))
    }

    pub fn center(&self) -> LatLon {
        self.center
    }

    /// Angular radius (radians)
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn radius_nm(&self) -> f64 {
        self.radius * RAD2NM
    }

    /// Append the circle as an open polyline
    ///
    /// Vertices start due north of the center and follow increasing
    /// bearings. The first vertex is not repeated at the end.
    pub fn discretize_into(&self, config: &Config, output: &mut Vec<LatLon>) {
        let steps = step_count(self.radius, TWO_PI, config.resolution());
        let step = TWO_PI / steps as f64;
        let (lat_c, lon_c) = (self.center.lat_rad(), self.center.lon_rad());
        output.reserve(steps);
        output.extend(
            (0..steps).map(|i| radial_lat_lon(lat_c, lon_c, step * i as f64, self.radius)),
        );
    }
}
