//! Bounding box types and operations.

use crate::{CrsCode, EdalError, EdalResult, Extent, HorizontalPosition};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in a horizontal CRS.
///
/// For geographic CRS (EPSG:4326), coordinates are in degrees.
/// For projected CRS (EPSG:3857, etc.), coordinates are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub crs: CrsCode,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64, crs: CrsCode) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            crs,
        }
    }

    /// Build a box from an x extent and a y extent.
    pub fn from_extents(x: &Extent<f64>, y: &Extent<f64>, crs: CrsCode) -> Self {
        Self::new(x.low(), y.low(), x.high(), y.high(), crs)
    }

    /// Parse a "minx,miny,maxx,maxy" string.
    pub fn from_string(s: &str, crs: CrsCode) -> EdalResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(EdalError::invalid_parameter(
                "bbox",
                format!("expected 'minx,miny,maxx,maxy', got '{s}'"),
            ));
        }

        let mut values = [0.0_f64; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part
                .trim()
                .parse()
                .map_err(|_| EdalError::invalid_parameter("bbox", format!("invalid number '{part}'")))?;
        }

        let bbox = Self::new(values[0], values[1], values[2], values[3], crs);
        if !bbox.is_valid() {
            return Err(EdalError::invalid_parameter(
                "bbox",
                format!("min corner exceeds max corner in '{s}'"),
            ));
        }
        Ok(bbox)
    }

    /// Check that the min corner does not exceed the max corner.
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn x_extent(&self) -> Extent<f64> {
        Extent::from_unordered(self.min_x, self.max_x)
    }

    pub fn y_extent(&self) -> Extent<f64> {
        Extent::from_unordered(self.min_y, self.max_y)
    }

    /// Check if this bbox shares any point with another (edges included).
    ///
    /// CRS codes are not compared here.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        !(self.max_x < other.min_x
            || other.max_x < self.min_x
            || self.max_y < other.min_y
            || other.max_y < self.min_y)
    }

    /// Compute the intersection of two bounding boxes.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        if !self.intersects(other) {
            return None;
        }

        Some(BoundingBox {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
            crs: self.crs,
        })
    }

    /// Check if a point is contained within this bbox (edges included).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Centre of the box.
    pub fn center(&self) -> HorizontalPosition {
        HorizontalPosition::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
            self.crs,
        )
    }

    /// Corners in counter-clockwise order starting at the min corner.
    pub fn vertices(&self) -> [HorizontalPosition; 4] {
        [
            HorizontalPosition::new(self.min_x, self.min_y, self.crs),
            HorizontalPosition::new(self.max_x, self.min_y, self.crs),
            HorizontalPosition::new(self.max_x, self.max_y, self.crs),
            HorizontalPosition::new(self.min_x, self.max_y, self.crs),
        ]
    }
}
