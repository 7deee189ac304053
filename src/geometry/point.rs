use crate::{Config, LatLon};

/// A single boundary vertex
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    center: LatLon,
}

impl Point {
    pub fn new(center: LatLon) -> Self {
        Self { center }
    }

    pub fn center(&self) -> LatLon {
        self.center
    }

    /// Append the point itself
    pub fn discretize_into(&self, _config: &Config, output: &mut Vec<LatLon>) {
        output.push(self.center);
    }
}

impl From<LatLon> for Point {
    fn from(center: LatLon) -> Self {
        Self::new(center)
    }
}
