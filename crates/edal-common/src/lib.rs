//! Common types and utilities shared across the EDAL crates.

pub mod bbox;
pub mod crs;
pub mod error;
pub mod extent;
pub mod format;
pub mod position;
pub mod time;

pub use bbox::BoundingBox;
pub use crs::CrsCode;
pub use error::{EdalError, EdalResult};
pub use extent::Extent;
pub use position::{GeoPosition, HorizontalPosition};
