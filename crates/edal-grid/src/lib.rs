//! Axes, grids and domains for gridded environmental data.
//!
//! Everything in this crate is an immutable value built once from validated
//! inputs:
//!
//! ```text
//! IrregularAxis / RegularAxis ──┐
//!                               ├─► RectilinearGrid ──► GridCell2D (lazy)
//! IrregularAxis / RegularAxis ──┘
//!
//! Vec<HorizontalPosition> ──┐
//!                           ├─► HovmoellerDomain ──► Array2D<HovmoellerCell>
//! TimeAxis ─────────────────┘          │
//!                                      └─► HovmoellerFeature (values per variable)
//! ```
//!
//! # Example
//!
//! ```
//! use edal_grid::{IrregularAxis, ReferenceableAxis};
//!
//! let axis = IrregularAxis::new("depth", vec![10.0, 20.0, 30.0]).unwrap();
//! let extent = axis.coordinate_extent();
//! assert_eq!((extent.low(), extent.high()), (5.0, 35.0));
//! assert_eq!(axis.find_index_of(24.0), Some(1));
//! ```

pub mod array;
pub mod axis;
pub mod grid;
pub mod hovmoeller;
pub mod line_string;

// Re-export commonly used types at crate root
pub use array::{Array1D, Array2D};
pub use axis::{AxisKind, CoordinateValues, IrregularAxis, ReferenceableAxis, RegularAxis, TimeAxis};
pub use grid::{GridCell2D, GridCells, HorizontalGrid, RectilinearGrid, RegularGrid};
pub use hovmoeller::{HovmoellerCell, HovmoellerDomain, HovmoellerFeature, Parameter};
pub use line_string::LineString;
