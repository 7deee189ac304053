//! Airspace boundary shapes
//!
//! A boundary is built from [`Geometry`] values. Each one turns into an
//! ordered polyline with [`Geometry::discretize`]; writers that can express
//! a shape natively (an arc or circle command) match on [`Geometry::kind`]
//! or on the variant itself instead.

mod circle;
mod point;
mod sector;

pub use circle::Circle;
pub use point::Point;
pub use sector::Sector;

use crate::{BoundingBox, Config, LatLon};

/// Variant tag of a [`Geometry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryKind {
    Point,
    Sector,
    Circle,
}

/// One element of an airspace boundary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    Sector(Sector),
    Circle(Circle),
}

impl Geometry {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Sector(_) => GeometryKind::Sector,
            Geometry::Circle(_) => GeometryKind::Circle,
        }
    }

    /// Center of a sector or circle, the point itself otherwise
    pub fn center(&self) -> LatLon {
        match self {
            Geometry::Point(point) => point.center(),
            Geometry::Sector(sector) => sector.center(),
            Geometry::Circle(circle) => circle.center(),
        }
    }

    /// Approximate the shape by an ordered, non-empty polyline
    pub fn discretize(&self, config: &Config) -> Vec<LatLon> {
        let mut output = Vec::new();
        self.discretize_into(config, &mut output);
        output
    }

    /// Append the polyline of [`Geometry::discretize`] to `output`
    ///
    /// Lets a boundary made of several shapes collect into one buffer.
    pub fn discretize_into(&self, config: &Config, output: &mut Vec<LatLon>) {
        match self {
            Geometry::Point(point) => point.discretize_into(config, output),
            Geometry::Sector(sector) => sector.discretize_into(config, output),
            Geometry::Circle(circle) => circle.discretize_into(config, output),
        }
    }

    /// Bounding box of the discretized shape
    pub fn bounding_box(&self, config: &Config) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.discretize(config))
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<Sector> for Geometry {
    fn from(sector: Sector) -> Self {
        Geometry::Sector(sector)
    }
}

impl From<Circle> for Geometry {
    fn from(circle: Circle) -> Self {
        Geometry::Circle(circle)
    }
}
