#![doc = include_str!("../README.md")]

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::geometry::{Circle, Geometry, GeometryKind, Point, Sector};
pub use crate::nav::ArcFit;
pub use crate::types::*;

mod config;
mod error;
pub mod geometry;
pub mod nav;
mod types;
