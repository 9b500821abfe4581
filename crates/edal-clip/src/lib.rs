//! Clipping for gridded environmental data.
//!
//! - [`Polygon`] / [`SimplePolygon`]: closed rings with an even-odd
//!   containment test where boundary points count as outside.
//! - [`Clipper::clip`]: the cells of a horizontal grid whose centres fall in
//!   a bounding box.
//! - [`Clipper::sutherland_hodgman`]: intersection of a polygon with a convex
//!   clip polygon.
//!
//! # Example
//!
//! ```
//! use edal_clip::Clipper;
//! use edal_common::{BoundingBox, CrsCode};
//! use edal_grid::RegularGrid;
//!
//! let extent = BoundingBox::new(100.0, 20.0, 130.0, 50.0, CrsCode::Epsg4326);
//! let grid = RegularGrid::from_bbox(&extent, 60, 60).unwrap();
//!
//! let region = BoundingBox::new(105.0, 22.3, 110.0, 24.8, CrsCode::Epsg4326);
//! let cells = Clipper::default().clip(&grid, &region).unwrap().unwrap();
//! assert_eq!(cells.len(), 10 * 5);
//! ```

pub mod clipper;
pub mod config;
pub mod polygon;

pub use clipper::Clipper;
pub use config::ClipperConfig;
pub use polygon::{Polygon, SimplePolygon};
