use crate::LatLon;

/// Bounding box of a set of coordinates
///
/// All bounds are stored in decimal degrees (east-positive longitude).
///
/// # Limitations
///
/// **Anti-meridian handling**: This implementation does not correctly handle areas
/// crossing the ±180° longitude line (anti-meridian). Simple min/max logic is used,
/// so a discretized circle crossing the anti-meridian produces a box spanning
/// nearly the entire globe instead of the actual smaller region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub west: f64,
    pub north: f64,
    pub east: f64,
    pub south: f64,
}

impl BoundingBox {
    /// Create a bounding box from a slice of points
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[LatLon]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self::from(*first);
        for &point in rest {
            bbox.extend(point);
        }
        Some(bbox)
    }

    /// Grow the bounding box if necessary to encompass the given point
    pub fn extend(&mut self, point: LatLon) {
        self.west = self.west.min(point.lon());
        self.east = self.east.max(point.lon());
        self.north = self.north.max(point.lat());
        self.south = self.south.min(point.lat());
    }

    /// Grow the bounding box if necessary to encompass the other bounding box
    pub fn merge(&mut self, other: BoundingBox) {
        self.west = self.west.min(other.west);
        self.east = self.east.max(other.east);
        self.north = self.north.max(other.north);
        self.south = self.south.min(other.south);
    }

    /// Check whether the point lies inside or on the border of the box
    pub fn contains(&self, point: LatLon) -> bool {
        (self.west..=self.east).contains(&point.lon())
            && (self.south..=self.north).contains(&point.lat())
    }
}

impl From<LatLon> for BoundingBox {
    fn from(point: LatLon) -> Self {
        Self {
            west: point.lon(),
            north: point.lat(),
            east: point.lon(),
            south: point.lat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_none;
    use insta::assert_compact_debug_snapshot;

    #[test]
    fn test_from_point() {
        let bbox = BoundingBox::from(LatLon::new(48.8566, 2.3522));
        assert_compact_debug_snapshot!(bbox, @"BoundingBox { west: 2.3522, north: 48.8566, east: 2.3522, south: 48.8566 }");
    }

    #[test]
    fn test_from_points_empty() {
        assert_none!(BoundingBox::from_points(&[]));
    }

    #[test]
    fn test_from_points_multiple() {
        let points = [
            LatLon::new(45.0, 10.0),
            LatLon::new(46.0, 9.0),  // North + West
            LatLon::new(44.0, 11.0), // South + East
            LatLon::new(45.5, 10.5),
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();
        assert_compact_debug_snapshot!(bbox, @"BoundingBox { west: 9.0, north: 46.0, east: 11.0, south: 44.0 }");
    }

    #[test]
    fn test_extend_with_point_inside_bbox() {
        let mut bbox = BoundingBox {
            west: 0.0,
            north: 1.0,
            east: 1.0,
            south: 0.0,
        };
        let before = bbox;
        bbox.extend(LatLon::new(0.5, 0.5));
        assert_eq!(bbox, before);
    }

    #[test]
    fn test_extend_multiple_directions() {
        let mut bbox = BoundingBox::from(LatLon::new(0.5, 0.5));
        bbox.extend(LatLon::new(0.8, 0.8)); // NE
        bbox.extend(LatLon::new(-0.2, -0.2)); // SW

        assert_eq!(bbox.west, -0.2);
        assert_eq!(bbox.north, 0.8);
        assert_eq!(bbox.east, 0.8);
        assert_eq!(bbox.south, -0.2);
    }

    #[test]
    fn test_merge_non_overlapping() {
        let mut bbox1 = BoundingBox {
            west: 0.0,
            north: 0.5,
            east: 0.5,
            south: 0.0,
        };
        let bbox2 = BoundingBox {
            west: 0.6,
            north: 1.0,
            east: 1.0,
            south: 0.6,
        };

        bbox1.merge(bbox2);
        assert_compact_debug_snapshot!(bbox1, @"BoundingBox { west: 0.0, north: 1.0, east: 1.0, south: 0.0 }");
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox {
            west: 9.0,
            north: 46.0,
            east: 11.0,
            south: 44.0,
        };
        assert!(bbox.contains(LatLon::new(45.0, 10.0)));
        assert!(bbox.contains(LatLon::new(46.0, 9.0)));
        assert!(!bbox.contains(LatLon::new(46.1, 10.0)));
        assert!(!bbox.contains(LatLon::new(45.0, 8.9)));
    }
}
