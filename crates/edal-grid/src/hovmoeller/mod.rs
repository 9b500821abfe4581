//! Hovmoeller domains: sample points along a path crossed with time.
//!
//! A [`HovmoellerDomain`] holds one [`HovmoellerCell`] per (time, point)
//! pair, stored time-major. A [`HovmoellerFeature`] attaches per-variable
//! values of the same shape, and [`layout`] turns the path geometry into
//! strip widths for plotting.

mod domain;
mod feature;
pub mod layout;

pub use domain::{HovmoellerCell, HovmoellerDomain};
pub use feature::{HovmoellerFeature, Parameter};
