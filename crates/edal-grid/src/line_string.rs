//! Paths through ordered control points.

use edal_common::{CrsCode, EdalError, EdalResult, HorizontalPosition};

/// A piecewise-linear path through control points sharing one CRS.
///
/// Distances are planar, in the units of the CRS.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    control_points: Vec<HorizontalPosition>,
    /// Distance from the first control point to each control point.
    cumulative: Vec<f64>,
}

impl LineString {
    pub fn new(control_points: Vec<HorizontalPosition>) -> EdalResult<Self> {
        let Some(first) = control_points.first() else {
            return Err(EdalError::construction("line string has no control points"));
        };
        let crs = first.crs;
        for point in &control_points {
            EdalError::check_crs(crs, point.crs)?;
        }

        let mut cumulative = Vec::with_capacity(control_points.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in control_points.windows(2) {
            total += pair[0].distance_to(&pair[1]);
            cumulative.push(total);
        }

        Ok(Self {
            control_points,
            cumulative,
        })
    }

    pub fn control_points(&self) -> &[HorizontalPosition] {
        &self.control_points
    }

    pub fn crs(&self) -> CrsCode {
        self.control_points[0].crs
    }

    /// Total path length.
    pub fn length(&self) -> f64 {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Distance along the path to control point `index`, as a fraction of
    /// the total length. Zero everywhere for a zero-length path.
    pub fn fractional_control_point_distance(&self, index: usize) -> EdalResult<f64> {
        let distance = self.cumulative.get(index).ok_or(EdalError::IndexOutOfRange {
            index,
            size: self.cumulative.len(),
        })?;
        let length = self.length();
        if length > 0.0 {
            Ok(distance / length)
        } else {
            Ok(0.0)
        }
    }

    /// All fractional distances in control point order.
    pub fn fractional_distances(&self) -> Vec<f64> {
        let length = self.length();
        self.cumulative
            .iter()
            .map(|d| if length > 0.0 { d / length } else { 0.0 })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_distances() {
        let path = LineString::new(vec![
            HorizontalPosition::wgs84(100.0, 30.0),
            HorizontalPosition::wgs84(102.0, 30.0),
            HorizontalPosition::wgs84(105.0, 30.0),
        ])
        .unwrap();

        assert_eq!(path.length(), 5.0);
        assert_eq!(path.fractional_control_point_distance(0).unwrap(), 0.0);
        assert_eq!(path.fractional_control_point_distance(1).unwrap(), 0.4);
        assert_eq!(path.fractional_control_point_distance(2).unwrap(), 1.0);
        assert!(path.fractional_control_point_distance(3).is_err());
        assert_eq!(path.fractional_distances(), vec![0.0, 0.4, 1.0]);
    }

    #[test]
    fn test_zero_length_path() {
        let p = HorizontalPosition::wgs84(1.0, 2.0);
        let path = LineString::new(vec![p, p]).unwrap();
        assert_eq!(path.length(), 0.0);
        assert_eq!(path.fractional_control_point_distance(1).unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_points() {
        assert!(matches!(LineString::new(vec![]), Err(EdalError::Construction(_))));
        let mixed = vec![
            HorizontalPosition::wgs84(1.0, 2.0),
            HorizontalPosition::new(1.0, 2.0, CrsCode::Epsg3857),
        ];
        assert!(matches!(
            LineString::new(mixed),
            Err(EdalError::MismatchedReferenceSystem { .. })
        ));
    }
}
