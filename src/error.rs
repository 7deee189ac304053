/// Errors raised while constructing geometry values
///
/// Geometric "no answer" outcomes (parallel radials, points that are not on
/// an arc) are not errors; those functions return `Option` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Coordinate out of range: lat {lat}, lon {lon}")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("Invalid discretization resolution: {0} NM (must be finite and positive)")]
    InvalidResolution(f64),

    #[error("Invalid radius: {0} NM (must be finite and not negative)")]
    InvalidRadius(f64),

    #[error("Invalid bearing: {0}° (must be finite)")]
    InvalidBearing(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
