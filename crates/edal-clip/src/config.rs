//! Configuration for the clipper.

use edal_common::{EdalError, EdalResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Configuration for [`crate::Clipper`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipperConfig {
    /// Relative tolerance on the line-intersection determinant.
    ///
    /// An intersection fails with `NumericalDegeneracy` when
    /// `|det| <= tolerance * |edge1| * |edge2|`, i.e. when the sine of the
    /// angle between the two edges is below the tolerance.
    pub determinant_tolerance: f64,

    /// Reject non-convex clip polygons instead of logging a warning.
    pub require_convex_clip: bool,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            determinant_tolerance: 1e-12,
            require_convex_clip: false,
        }
    }
}

impl ClipperConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("EDAL_DETERMINANT_TOLERANCE") {
            match val.parse() {
                Ok(tolerance) => config.determinant_tolerance = tolerance,
                Err(_) => warn!(
                    value = %val,
                    "Ignoring unparseable EDAL_DETERMINANT_TOLERANCE"
                ),
            }
        }

        if let Ok(val) = std::env::var("EDAL_REQUIRE_CONVEX_CLIP") {
            config.require_convex_clip = val.to_lowercase() == "true" || val == "1";
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> EdalResult<()> {
        if !self.determinant_tolerance.is_finite() || self.determinant_tolerance < 0.0 {
            return Err(EdalError::invalid_parameter(
                "determinant_tolerance",
                format!("must be finite and >= 0, got {}", self.determinant_tolerance),
            ));
        }
        Ok(())
    }
}
