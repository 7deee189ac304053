mod bounding_box;
mod lat_lon;

pub use bounding_box::*;
pub use lat_lon::*;
