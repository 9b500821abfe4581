//! Spherical Web Mercator (EPSG:3857).
//!
//! Uses the same sphere as web map tiling: x = R·λ, y = R·asinh(tan φ).
//! Geographic inputs may be EPSG:4326 or EPSG:4269; the two datums are
//! treated as identical at this precision.

use crate::PositionTransform;
use edal_common::{CrsCode, EdalError, EdalResult, HorizontalPosition};
use std::f64::consts::PI;
use tracing::trace;

/// Earth radius used by Web Mercator (meters).
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude limit of the square Web Mercator world (degrees).
pub const MAX_LATITUDE: f64 = 85.05112877980659;

/// Transform service between geographic lon/lat and Web Mercator meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl WebMercator {
    /// Project lon/lat degrees to Web Mercator meters.
    pub fn forward(lon_deg: f64, lat_deg: f64) -> EdalResult<(f64, f64)> {
        if !lat_deg.is_finite() || lat_deg.abs() > MAX_LATITUDE {
            return Err(EdalError::Projection(format!(
                "latitude {lat_deg} outside Web Mercator range ±{MAX_LATITUDE}"
            )));
        }
        let x = EARTH_RADIUS * lon_deg.to_radians();
        let y = EARTH_RADIUS * lat_deg.to_radians().tan().asinh();
        Ok((x, y))
    }

    /// Unproject Web Mercator meters to lon/lat degrees.
    pub fn inverse(x: f64, y: f64) -> (f64, f64) {
        let lon = (x / EARTH_RADIUS).to_degrees();
        let lat = (y / EARTH_RADIUS).sinh().atan().to_degrees();
        (lon, lat)
    }

    /// Wrap a longitude into [-180, 180).
    pub fn normalize_longitude(lon_deg: f64) -> f64 {
        let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if wrapped >= 180.0 {
            wrapped - 360.0
        } else {
            wrapped
        }
    }
}

impl PositionTransform for WebMercator {
    fn transform(&self, pos: &HorizontalPosition, target: CrsCode) -> EdalResult<HorizontalPosition> {
        if pos.crs == target {
            return Ok(*pos);
        }

        let (x, y) = match (pos.crs, target) {
            (CrsCode::Epsg4326, CrsCode::Epsg4269) | (CrsCode::Epsg4269, CrsCode::Epsg4326) => {
                (pos.x, pos.y)
            }
            (CrsCode::Epsg4326 | CrsCode::Epsg4269, CrsCode::Epsg3857) => {
                Self::forward(Self::normalize_longitude(pos.x), pos.y)?
            }
            (CrsCode::Epsg3857, CrsCode::Epsg4326 | CrsCode::Epsg4269) => {
                if pos.x.abs() > EARTH_RADIUS * PI + 1e-6 {
                    return Err(EdalError::Projection(format!(
                        "x {} outside Web Mercator world",
                        pos.x
                    )));
                }
                Self::inverse(pos.x, pos.y)
            }
            _ => {
                return Err(EdalError::MismatchedReferenceSystem {
                    expected: target,
                    found: pos.crs,
                })
            }
        };

        trace!(from = %pos.crs, to = %target, x, y, "transformed position");
        Ok(HorizontalPosition::new(x, y, target))
    }
}
