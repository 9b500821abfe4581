//! Positions in space and time.

use crate::CrsCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in a horizontal coordinate reference system.
///
/// Equality is by value: two positions are equal when both coordinates and
/// the CRS match exactly. No transformation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalPosition {
    pub x: f64,
    pub y: f64,
    pub crs: CrsCode,
}

impl HorizontalPosition {
    pub fn new(x: f64, y: f64, crs: CrsCode) -> Self {
        Self { x, y, crs }
    }

    /// Position in WGS84 lon/lat.
    pub fn wgs84(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, CrsCode::Epsg4326)
    }

    /// Planar distance to another position in the same CRS units.
    pub fn distance_to(&self, other: &HorizontalPosition) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A horizontal position at an instant in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub horizontal: HorizontalPosition,
    pub time: DateTime<Utc>,
}

impl GeoPosition {
    pub fn new(horizontal: HorizontalPosition, time: DateTime<Utc>) -> Self {
        Self { horizontal, time }
    }
}
