//! Numeric axes (projected coordinates, latitude, longitude, depth).

use super::{search_cells, ReferenceableAxis};
use edal_common::{EdalError, EdalResult};
use serde::{Deserialize, Serialize};

/// Period of a longitude axis, in degrees.
const LONGITUDE_PERIOD: f64 = 360.0;

/// How lookups on a numeric axis treat their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisKind {
    /// Plain linear coordinates.
    #[default]
    Linear,
    /// Longitude in degrees; lookups wrap every 360 degrees.
    Longitude,
}

/// Try `value`, `value + 360`, ... across the coordinate extent, after
/// shifting it to the first candidate at or above the extent's low bound.
fn find_periodic(low: f64, high: f64, value: f64, mut lookup: impl FnMut(f64) -> Option<usize>) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let mut candidate = low + (value - low).rem_euclid(LONGITUDE_PERIOD);
    while candidate <= high {
        if let Some(index) = lookup(candidate) {
            return Some(index);
        }
        candidate += LONGITUDE_PERIOD;
    }
    None
}

/// An axis defined by an explicit list of strictly monotonic values.
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularAxis {
    name: String,
    values: Vec<f64>,
    ascending: bool,
    kind: AxisKind,
}

impl IrregularAxis {
    /// Create a linear axis.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> EdalResult<Self> {
        Self::with_kind(name, values, AxisKind::Linear)
    }

    /// Create a longitude axis.
    pub fn longitude(name: impl Into<String>, values: Vec<f64>) -> EdalResult<Self> {
        Self::with_kind(name, values, AxisKind::Longitude)
    }

    pub fn with_kind(name: impl Into<String>, values: Vec<f64>, kind: AxisKind) -> EdalResult<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(EdalError::construction(format!("axis '{name}' has no values")));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(EdalError::construction(format!(
                "axis '{name}' contains non-finite value {bad}"
            )));
        }

        let ascending = values.len() < 2 || values[1] > values[0];
        let monotonic = values.windows(2).all(|w| {
            if ascending {
                w[1] > w[0]
            } else {
                w[1] < w[0]
            }
        });
        if !monotonic {
            return Err(EdalError::construction(format!(
                "axis '{name}' values are not strictly monotonic"
            )));
        }

        Ok(Self {
            name,
            values,
            ascending,
            kind,
        })
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl ReferenceableAxis for IrregularAxis {
    type Value = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.values.len()
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    fn first_value(&self) -> f64 {
        self.values[0]
    }

    fn last_value(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    fn is_ascending(&self) -> bool {
        self.ascending
    }

    fn extend_first_value(&self, first: f64, next: f64) -> f64 {
        first - (next - first) / 2.0
    }

    fn extend_last_value(&self, last: f64, second_last: f64) -> f64 {
        last + (last - second_last) / 2.0
    }

    fn midpoint(&self, a: f64, b: f64) -> f64 {
        a + (b - a) / 2.0
    }

    fn find_index_of(&self, value: f64) -> Option<usize> {
        match self.kind {
            AxisKind::Linear => search_cells(self, value),
            AxisKind::Longitude => {
                let extent = self.coordinate_extent();
                find_periodic(extent.low(), extent.high(), value, |v| search_cells(self, v))
            }
        }
    }
}

/// An axis of evenly spaced values: `first + k * spacing` for `k < size`.
///
/// A negative spacing gives a descending axis. Index lookup is arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct RegularAxis {
    name: String,
    first: f64,
    spacing: f64,
    size: usize,
    kind: AxisKind,
}

impl RegularAxis {
    /// Create a linear axis.
    pub fn new(name: impl Into<String>, first: f64, spacing: f64, size: usize) -> EdalResult<Self> {
        Self::with_kind(name, first, spacing, size, AxisKind::Linear)
    }

    /// Create a longitude axis.
    pub fn longitude(name: impl Into<String>, first: f64, spacing: f64, size: usize) -> EdalResult<Self> {
        Self::with_kind(name, first, spacing, size, AxisKind::Longitude)
    }

    pub fn with_kind(
        name: impl Into<String>,
        first: f64,
        spacing: f64,
        size: usize,
        kind: AxisKind,
    ) -> EdalResult<Self> {
        let name = name.into();
        if size == 0 {
            return Err(EdalError::construction(format!("axis '{name}' has no values")));
        }
        if !first.is_finite() || !spacing.is_finite() || spacing == 0.0 {
            return Err(EdalError::construction(format!(
                "axis '{name}' needs a finite start and a finite non-zero spacing (got {first}, {spacing})"
            )));
        }
        Ok(Self {
            name,
            first,
            spacing,
            size,
            kind,
        })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    fn index_of_linear(&self, value: f64) -> Option<usize> {
        if !self.coordinate_extent().contains(&value) {
            return None;
        }
        let fractional = (value - self.first) / self.spacing;
        // Halfway values belong to the cell with the larger coordinate,
        // which is the lower index on a descending axis
        let nearest = if self.spacing > 0.0 {
            fractional.round()
        } else {
            (fractional - 0.5).ceil()
        };
        // Values on the outer edges can round one step past either end
        let index = nearest.clamp(0.0, (self.size - 1) as f64);
        Some(index as usize)
    }
}

impl ReferenceableAxis for RegularAxis {
    type Value = f64;

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.size
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        (index < self.size).then(|| self.first + index as f64 * self.spacing)
    }

    fn first_value(&self) -> f64 {
        self.first
    }

    fn last_value(&self) -> f64 {
        self.first + (self.size - 1) as f64 * self.spacing
    }

    fn is_ascending(&self) -> bool {
        self.spacing > 0.0
    }

    fn extend_first_value(&self, first: f64, _next: f64) -> f64 {
        first - self.spacing / 2.0
    }

    fn extend_last_value(&self, last: f64, _second_last: f64) -> f64 {
        last + self.spacing / 2.0
    }

    fn midpoint(&self, a: f64, b: f64) -> f64 {
        a + (b - a) / 2.0
    }

    fn find_index_of(&self, value: f64) -> Option<usize> {
        match self.kind {
            AxisKind::Linear => self.index_of_linear(value),
            AxisKind::Longitude => {
                let extent = self.coordinate_extent();
                find_periodic(extent.low(), extent.high(), value, |v| self.index_of_linear(v))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_rejects_bad_values() {
        assert!(matches!(
            IrregularAxis::new("x", vec![]),
            Err(EdalError::Construction(_))
        ));
        assert!(IrregularAxis::new("x", vec![1.0, 1.0]).is_err());
        assert!(IrregularAxis::new("x", vec![1.0, 3.0, 2.0]).is_err());
        assert!(IrregularAxis::new("x", vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_regular_rejects_bad_spacing() {
        assert!(RegularAxis::new("x", 0.0, 0.0, 3).is_err());
        assert!(RegularAxis::new("x", 0.0, 1.0, 0).is_err());
        assert!(RegularAxis::new("x", f64::INFINITY, 1.0, 3).is_err());
    }

    #[test]
    fn test_regular_matches_irregular() {
        let regular = RegularAxis::new("lat", 20.25, 0.5, 60).unwrap();
        let values: Vec<f64> = regular.coordinate_values().collect();
        let irregular = IrregularAxis::new("lat", values).unwrap();

        assert_eq!(regular.coordinate_extent(), irregular.coordinate_extent());
        for value in [20.0, 20.3, 22.3, 24.8, 35.0, 49.74, 50.0] {
            assert_eq!(
                regular.find_index_of(value),
                irregular.find_index_of(value),
                "lookup of {value}"
            );
        }
    }

    #[test]
    fn test_descending_regular_matches_irregular() {
        let regular = RegularAxis::new("y", 50.0, -10.0, 4).unwrap();
        let irregular = IrregularAxis::new("y", vec![50.0, 40.0, 30.0, 20.0]).unwrap();

        assert_eq!(regular.coordinate_extent(), irregular.coordinate_extent());
        // Cell boundaries, outer edges and interior points
        for value in [15.0, 25.0, 35.0, 45.0, 55.0, 12.0, 20.0, 33.0, 44.9, 56.0] {
            assert_eq!(
                regular.find_index_of(value),
                irregular.find_index_of(value),
                "lookup of {value}"
            );
        }
        assert_eq!(regular.find_index_of(45.0), Some(0));
        assert_eq!(regular.find_index_of(15.0), Some(3));
    }

    #[test]
    fn test_regular_edges_clamp_into_range() {
        let axis = RegularAxis::new("x", 100.25, 0.5, 60).unwrap();
        assert_eq!(axis.find_index_of(100.0), Some(0));
        assert_eq!(axis.find_index_of(130.0), Some(59));
        assert_eq!(axis.find_index_of(130.01), None);
    }

    #[test]
    fn test_longitude_wraps() {
        let axis = IrregularAxis::longitude("lon", vec![0.0, 90.0, 180.0, 270.0]).unwrap();
        assert_eq!(axis.find_index_of(-90.0), Some(3));
        assert_eq!(axis.find_index_of(450.0), Some(1));
        assert_eq!(axis.find_index_of(-720.0), Some(0));

        let linear = IrregularAxis::new("x", vec![0.0, 90.0, 180.0, 270.0]).unwrap();
        assert_eq!(linear.find_index_of(-90.0), None);
    }

    #[test]
    fn test_regular_longitude_wraps() {
        let axis = RegularAxis::longitude("lon", -179.5, 1.0, 360).unwrap();
        assert_eq!(axis.find_index_of(189.8), axis.find_index_of(-170.2));
        assert_eq!(axis.find_index_of(-170.2), Some(9));
    }

    #[test]
    fn test_longitude_gap_is_not_found() {
        let axis = IrregularAxis::longitude("lon", vec![100.0, 110.0, 120.0]).unwrap();
        assert_eq!(axis.find_index_of(462.0), Some(0));
        assert_eq!(axis.find_index_of(200.0), None);
    }
}
