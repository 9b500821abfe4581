//! Coordinate reference system transformations.
//!
//! The core crates treat a CRS as an opaque code. Anything that has to move a
//! position between two codes asks a [`PositionTransform`] for it; the host
//! application chooses which service to plug in.

pub mod mercator;
pub mod transform;

pub use mercator::WebMercator;
pub use transform::{NoTransform, PositionTransform};
