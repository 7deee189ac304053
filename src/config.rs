//! Discretization settings

use crate::error::{Error, Result};
use crate::nav::{NM2RAD, RAD2NM};

/// Default maximum distance between two discretized points
const DEFAULT_RESOLUTION_NM: f64 = 0.3;

/// Settings passed to every discretization call
///
/// Build one at startup and share it; it is a plain `Copy` value, so
/// concurrent discretization needs no coordination.
///
/// # Example
///
/// ```
/// use airspace_geometry::Config;
///
/// let config = Config::default().with_resolution_nm(0.5).unwrap();
/// assert!((config.resolution_nm() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    resolution: f64,
}

impl Config {
    /// Set the maximum distance between two discretized points
    ///
    /// Only curves of at least 3 NM radius are bound by it; smaller ones use
    /// a fixed point count scaled by their radius.
    pub fn with_resolution_nm(self, resolution_nm: f64) -> Result<Self> {
        if !resolution_nm.is_finite() || resolution_nm <= 0.0 {
            return Err(Error::InvalidResolution(resolution_nm));
        }
        Ok(Self {
            resolution: resolution_nm * NM2RAD,
        })
    }

    /// Maximum distance between discretized points (radians)
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn resolution_nm(&self) -> f64 {
        self.resolution * RAD2NM
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION_NM * NM2RAD,
        }
    }
}
