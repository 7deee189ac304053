use crate::error::{Error, Result};
use crate::nav::{DEG2RAD, RAD2DEG};
use std::fmt;

/// A geodetic coordinate in decimal degrees
///
/// The public API is east-positive, but the radian accessors use a
/// **west-positive** longitude: `lon_rad() == -lon() * DEG2RAD`. All the
/// navigation formulas in [`crate::nav`] are written against that
/// convention, so coordinates must always cross the degree/radian boundary
/// through [`LatLon::lon_rad`] and [`LatLon::from_radians`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    /// Latitude of the [`UNDEFINED`](Self::UNDEFINED) sentinel
    pub const UNDEF_LAT: f64 = -91.0;
    /// Longitude of the [`UNDEFINED`](Self::UNDEFINED) sentinel
    pub const UNDEF_LON: f64 = -181.0;

    /// Sentinel for coordinates that have not been set yet
    ///
    /// None of the navigation functions may be called with this value.
    pub const UNDEFINED: LatLon = LatLon {
        lat: Self::UNDEF_LAT,
        lon: Self::UNDEF_LON,
    };

    /// Create a coordinate from degrees without range checks
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a coordinate from degrees, rejecting out-of-range values
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        let point = Self::new(lat, lon);
        if !point.is_valid() {
            return Err(Error::CoordinateOutOfRange { lat, lon });
        }
        Ok(point)
    }

    /// Create a coordinate from radians (west-positive longitude)
    pub fn from_radians(lat_rad: f64, lon_rad: f64) -> Self {
        Self::new(lat_rad * RAD2DEG, -lon_rad * RAD2DEG)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat * DEG2RAD
    }

    /// Longitude in radians, west-positive
    pub fn lon_rad(&self) -> f64 {
        -self.lon * DEG2RAD
    }

    pub fn set(&mut self, lat: f64, lon: f64) {
        self.lat = lat;
        self.lon = lon;
    }

    /// Set from radians (west-positive longitude)
    pub fn set_radians(&mut self, lat_rad: f64, lon_rad: f64) {
        *self = Self::from_radians(lat_rad, lon_rad);
    }

    /// `false` only for the [`UNDEFINED`](Self::UNDEFINED) sentinel
    pub fn is_defined(&self) -> bool {
        *self != Self::UNDEFINED
    }

    /// Check that both components are finite and within
    /// `[-90, 90]` / `[-180, 180]`
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Unsigned whole degrees and decimal minutes of the latitude
    pub fn lat_deg_min(&self) -> (u32, f64) {
        dec_to_deg_min(self.lat)
    }

    /// Unsigned whole degrees and decimal minutes of the longitude
    pub fn lon_deg_min(&self) -> (u32, f64) {
        dec_to_deg_min(self.lon)
    }

    /// Hemisphere letter of the latitude (`'N'` only for lat > 0)
    pub fn north_south(&self) -> char {
        if self.lat > 0.0 { 'N' } else { 'S' }
    }

    /// Hemisphere letter of the longitude (`'E'` only for lon > 0)
    pub fn east_west(&self) -> char {
        if self.lon > 0.0 { 'E' } else { 'W' }
    }
}

impl Default for LatLon {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lat_deg, lat_min) = self.lat_deg_min();
        let (lon_deg, lon_min) = self.lon_deg_min();
        write!(
            f,
            "{lat_deg:02}°{lat_min:06.3}'{} {lon_deg:03}°{lon_min:06.3}'{}",
            self.north_south(),
            self.east_west()
        )
    }
}

fn dec_to_deg_min(dec: f64) -> (u32, f64) {
    let decimal = dec.abs();
    let deg = decimal.floor();
    (deg as u32, (decimal - deg) * 60.0)
}
