//! Error types for the EDAL crates.

use crate::CrsCode;
use thiserror::Error;

/// Result type alias using EdalError.
pub type EdalResult<T> = Result<T, EdalError>;

/// Primary error type for axis, grid, domain and polygon operations.
///
/// Empty results (a clip with no overlap, a Sutherland-Hodgman clip with no
/// intersection, a Hovmoeller domain with no samples) are not errors and are
/// reported through `Option` or empty containers instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdalError {
    // === Construction Errors ===
    #[error("Invalid construction: {0}")]
    Construction(String),

    #[error("Index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Geometry Errors ===
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Numerical degeneracy: {0}")]
    NumericalDegeneracy(String),

    // === Reference System Errors ===
    #[error("Mismatched reference systems: expected {expected}, found {found}")]
    MismatchedReferenceSystem { expected: CrsCode, found: CrsCode },

    #[error("Projection error: {0}")]
    Projection(String),
}

impl EdalError {
    /// Create a Construction error.
    pub fn construction(msg: impl Into<String>) -> Self {
        Self::Construction(msg.into())
    }

    /// Create an InvalidPolygon error.
    pub fn invalid_polygon(msg: impl Into<String>) -> Self {
        Self::InvalidPolygon(msg.into())
    }

    /// Create a NumericalDegeneracy error.
    pub fn degeneracy(msg: impl Into<String>) -> Self {
        Self::NumericalDegeneracy(msg.into())
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Fail with MismatchedReferenceSystem unless both codes agree.
    pub fn check_crs(expected: CrsCode, found: CrsCode) -> EdalResult<()> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::MismatchedReferenceSystem { expected, found })
        }
    }

    /// Stable short code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            EdalError::Construction(_) => "ConstructionError",
            EdalError::IndexOutOfRange { .. } => "IndexOutOfRangeError",
            EdalError::InvalidParameter { .. } => "InvalidParameterError",
            EdalError::InvalidPolygon(_) => "InvalidPolygonError",
            EdalError::NumericalDegeneracy(_) => "NumericalDegeneracyError",
            EdalError::MismatchedReferenceSystem { .. } => "MismatchedReferenceSystemError",
            EdalError::Projection(_) => "ProjectionError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_crs() {
        assert!(EdalError::check_crs(CrsCode::Epsg4326, CrsCode::Epsg4326).is_ok());

        let err = EdalError::check_crs(CrsCode::Epsg4326, CrsCode::Epsg3857).unwrap_err();
        assert_eq!(err.code(), "MismatchedReferenceSystemError");
        assert_eq!(
            err.to_string(),
            "Mismatched reference systems: expected EPSG:4326, found EPSG:3857"
        );
    }

    #[test]
    fn test_index_message() {
        let err = EdalError::IndexOutOfRange { index: 7, size: 3 };
        assert_eq!(err.to_string(), "Index 7 out of range for size 3");
    }
}
