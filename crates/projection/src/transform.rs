//! The transform service seam.

use edal_common::{CrsCode, EdalError, EdalResult, HorizontalPosition};

/// Moves a horizontal position into a target CRS.
pub trait PositionTransform: Send + Sync {
    /// Transform `pos` into `target`.
    ///
    /// Implementations must return `pos` unchanged when it is already in
    /// `target`, and fail with `MismatchedReferenceSystem` for pairs they
    /// cannot convert.
    fn transform(&self, pos: &HorizontalPosition, target: CrsCode) -> EdalResult<HorizontalPosition>;
}

/// The absence of a transform service: only same-CRS positions pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransform;

impl PositionTransform for NoTransform {
    fn transform(&self, pos: &HorizontalPosition, target: CrsCode) -> EdalResult<HorizontalPosition> {
        EdalError::check_crs(target, pos.crs)?;
        Ok(*pos)
    }
}
