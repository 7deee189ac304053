use crate::error::{Error, Result};
use crate::nav::{
    DEG2RAD, NM2RAD, RAD2NM, TWO_PI, abs_angle, angular_distance, course, radial_lat_lon,
    step_count,
};
use crate::{Config, LatLon};
use tracing::debug;

/// Largest accepted difference between the distances of the two end points
/// from the center in [`Sector::from_points`]
const END_POINT_TOLERANCE_NM: f64 = 0.2;

/// An arc of a circle between two bearings from its center
///
/// Bearings are stored in radians, normalized into `[0, 2π]`. A clockwise
/// sector is traversed with increasing bearings.
///
/// With the `serde` feature a sector is stored as center, radius, bearings
/// and direction; the end points are projected again when it is read back.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "SectorParts", try_from = "SectorParts")
)]
pub struct Sector {
    center: LatLon,
    clockwise: bool,
    start: LatLon,
    end: LatLon,
    /// Angular radius (radians)
    radius: f64,
    angle_start: f64,
    angle_end: f64,
}

impl Sector {
    /// Create a sector from its radius in nautical miles and the start and
    /// end bearings in degrees
    ///
    /// The end points are projected from the center along both bearings.
    pub fn new(
        center: LatLon,
        radius_nm: f64,
        bearing_start: f64,
        bearing_end: f64,
        clockwise: bool,
    ) -> Self {
        debug_assert!(radius_nm >= 0.0, "negative radius: {radius_nm}");
        Self::from_bearings(
            center,
            radius_nm * NM2RAD,
            abs_angle(bearing_start * DEG2RAD),
            abs_angle(bearing_end * DEG2RAD),
            clockwise,
        )
    }

    /// Radius and normalized bearings in radians
    fn from_bearings(
        center: LatLon,
        radius: f64,
        angle_start: f64,
        angle_end: f64,
        clockwise: bool,
    ) -> Self {
        let (lat_c, lon_c) = (center.lat_rad(), center.lon_rad());
        Self {
            center,
            clockwise,
            start: radial_lat_lon(lat_c, lon_c, angle_start, radius),
            end: radial_lat_lon(lat_c, lon_c, angle_end, radius),
            radius,
            angle_start,
            angle_end,
        }
    }

    /// Checked variant of [`Sector::new`]
    pub fn try_new(
        center: LatLon,
        radius_nm: f64,
        bearing_start: f64,
        bearing_end: f64,
        clockwise: bool,
    ) -> Result<Self> {
        if !radius_nm.is_finite() || radius_nm < 0.0 {
            return Err(Error::InvalidRadius(radius_nm));
        }
        if let Some(bearing) = [bearing_start, bearing_end].into_iter().find(|b| !b.is_finite()) {
            return Err(Error::InvalidBearing(bearing));
        }
        Ok(Self::new(center, radius_nm, bearing_start, bearing_end, clockwise))
    }

    /// Create a sector from its two end points
    ///
    /// The radius is the distance from the center to `start`. Both points
    /// are expected on the same circle: in debug builds a difference of more
    /// than 0.2 NM between their distances from the center is a bug in the
    /// caller.
    pub fn from_points(center: LatLon, start: LatLon, end: LatLon, clockwise: bool) -> Self {
        let lat_c = center.lat_rad();
        let lon_c = center.lon_rad();
        let (lat1, lon1) = (start.lat_rad(), start.lon_rad());
        let (lat2, lon2) = (end.lat_rad(), end.lon_rad());

        let radius = angular_distance(lat_c, lon_c, lat1, lon1);
        let radius_end = angular_distance(lat_c, lon_c, lat2, lon2);
        let mismatch_nm = (radius - radius_end).abs() * RAD2NM;
        if mismatch_nm >= END_POINT_TOLERANCE_NM {
            debug!(
                %center,
                %start,
                %end,
                mismatch_nm,
                "sector end points are not on the same circle"
            );
        }
        debug_assert!(radius > 0.0, "sector start point equals its center");
        debug_assert!(mismatch_nm < END_POINT_TOLERANCE_NM);

        Self {
            center,
            clockwise,
            start,
            end,
            radius,
            angle_start: course(lat_c, lon_c, lat1, lon1),
            angle_end: course(lat_c, lon_c, lat2, lon2),
        }
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

    /// Start bearing from the center (radians)
    pub fn angle_start(&self) -> f64 {
        self.angle_start
    }

    /// End bearing from the center (radians)
    pub fn angle_end(&self) -> f64 {
        self.angle_end
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn start_point(&self) -> LatLon {
        self.start
    }

    pub fn end_point(&self) -> LatLon {
        self.end
    }

    /// Angle swept from start to end in the direction of travel, in
    /// `(0, 2π]`. Equal start and end bearings make a full turn.
    pub fn sweep(&self) -> f64 {
        let sweep = if self.clockwise {
            self.angle_end - self.angle_start
        } else {
            self.angle_start - self.angle_end
        };
        if sweep <= 0.0 { sweep + TWO_PI } else { sweep }
    }

    /// Append the arc as a polyline
    ///
    /// The first vertex sits on the start bearing. The end bearing itself is
    /// not emitted: the last vertex is one step before it, so the caller
    /// decides whether to append [`Sector::end_point`].
    pub fn discretize_into(&self, config: &Config, output: &mut Vec<LatLon>) {
        let sweep = self.sweep();
        let steps = step_count(self.radius, sweep, config.resolution());
        let direction = if self.clockwise { 1.0 } else { -1.0 };
        let step = direction * sweep / steps as f64;
        let (lat_c, lon_c) = (self.center.lat_rad(), self.center.lon_rad());
        output.reserve(steps);
        output.extend((0..steps).map(|i| {
            let bearing = abs_angle(self.angle_start + step * i as f64);
            radial_lat_lon(lat_c, lon_c, bearing, self.radius)
        }));
    }
}

/// Stored form of a [`Sector`], without the derived end points
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SectorParts {
    center: LatLon,
    /// Angular radius (radians)
    radius: f64,
    angle_start: f64,
    angle_end: f64,
    clockwise: bool,
}

#[cfg(feature = "serde")]
impl From<Sector> for SectorParts {
    fn from(sector: Sector) -> Self {
        Self {
            center: sector.center,
            radius: sector.radius,
            angle_start: sector.angle_start,
            angle_end: sector.angle_end,
            clockwise: sector.clockwise,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<SectorParts> for Sector {
    type Error = Error;

    fn try_from(parts: SectorParts) -> Result<Self> {
        if !parts.radius.is_finite() || parts.radius < 0.0 {
            return Err(Error::InvalidRadius(parts.radius * RAD2NM));
        }
        let angles = [parts.angle_start, parts.angle_end];
        if let Some(angle) = angles.into_iter().find(|a| !a.is_finite()) {
            return Err(Error::InvalidBearing(angle * crate::nav::RAD2DEG));
        }
        Ok(Self::from_bearings(
            parts.center,
            parts.radius,
            abs_angle(parts.angle_start),
            abs_angle(parts.angle_end),
            parts.clockwise,
        ))
    }
}
