//! Simple polygons and the even-odd point containment test.

use edal_common::{BoundingBox, CrsCode, EdalError, EdalResult, HorizontalPosition};
use projection::{NoTransform, PositionTransform};
use std::borrow::Cow;

/// A closed ring of vertices in one CRS.
///
/// The ring is implicitly closed: the last vertex connects to the first.
/// Containment follows the even-odd rule, and points on the boundary are
/// outside.
pub trait Polygon {
    fn crs(&self) -> CrsCode;

    /// Vertices in drawing order.
    fn boundary(&self) -> Cow<'_, [HorizontalPosition]>;

    /// Smallest axis-aligned box holding every vertex.
    fn bounding_box(&self) -> BoundingBox {
        let ring = self.boundary();
        let mut bbox = BoundingBox::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            self.crs(),
        );
        for v in ring.iter() {
            bbox.min_x = bbox.min_x.min(v.x);
            bbox.min_y = bbox.min_y.min(v.y);
            bbox.max_x = bbox.max_x.max(v.x);
            bbox.max_y = bbox.max_y.max(v.y);
        }
        bbox
    }

    /// Containment of a point in this polygon's CRS.
    ///
    /// A point in another CRS fails with `MismatchedReferenceSystem`; use
    /// [`Polygon::contains_with`] to transform it first.
    fn contains(&self, pos: &HorizontalPosition) -> EdalResult<bool> {
        self.contains_with(pos, &NoTransform)
    }

    /// Containment after moving `pos` into this polygon's CRS.
    fn contains_with(
        &self,
        pos: &HorizontalPosition,
        transform: &dyn PositionTransform,
    ) -> EdalResult<bool> {
        let ring = self.boundary();
        if ring.len() < 3 {
            return Err(EdalError::invalid_polygon(format!(
                "containment needs at least 3 vertices, got {}",
                ring.len()
            )));
        }
        let pos = transform.transform(pos, self.crs())?;
        Ok(even_odd_contains(&ring, pos.x, pos.y))
    }
}

/// Whether `(x, y)` lies on the segment from `a` to `b`.
fn on_segment(a: &HorizontalPosition, b: &HorizontalPosition, x: f64, y: f64) -> bool {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let (px, py) = (x - a.x, y - a.y);
    let cross = dx * py - dy * px;
    let scale = (dx.abs() + dy.abs()) * (px.abs() + py.abs());
    if cross.abs() > f64::EPSILON * scale {
        return false;
    }
    x >= a.x.min(b.x) && x <= a.x.max(b.x) && y >= a.y.min(b.y) && y <= a.y.max(b.y)
}

/// Even-odd ray casting; boundary points are outside.
pub(crate) fn even_odd_contains(ring: &[HorizontalPosition], x: f64, y: f64) -> bool {
    let n = ring.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (&ring[i], &ring[j]);
        if on_segment(vj, vi, x, y) {
            return false;
        }
        if (vi.y > y) != (vj.y > y) && x < (vj.x - vi.x) * (y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// A polygon given by an explicit vertex list.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePolygon {
    vertices: Vec<HorizontalPosition>,
}

impl SimplePolygon {
    /// Create a polygon from at least three vertices sharing one CRS.
    pub fn new(vertices: Vec<HorizontalPosition>) -> EdalResult<Self> {
        let Some(first) = vertices.first() else {
            return Err(EdalError::construction("polygon has no vertices"));
        };
        let crs = first.crs;
        for v in &vertices {
            EdalError::check_crs(crs, v.crs)?;
        }
        if vertices.len() < 3 {
            return Err(EdalError::invalid_polygon(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        Ok(Self { vertices })
    }

    /// Create a polygon from parallel coordinate arrays.
    pub fn from_xy(xs: &[f64], ys: &[f64], crs: CrsCode) -> EdalResult<Self> {
        if xs.len() != ys.len() {
            return Err(EdalError::construction(format!(
                "x and y point arrays differ in length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        let vertices = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| HorizontalPosition::new(x, y, crs))
            .collect();
        Self::new(vertices)
    }

    /// The four corners of `bbox`, counter-clockwise.
    pub fn from_bbox(bbox: &BoundingBox) -> Self {
        Self {
            vertices: bbox.vertices().to_vec(),
        }
    }

    pub fn vertices(&self) -> &[HorizontalPosition] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn x_points(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.x).collect()
    }

    pub fn y_points(&self) -> Vec<f64> {
        self.vertices.iter().map(|v| v.y).collect()
    }

    /// Shoelace area: positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let (a, b) = (&self.vertices[i], &self.vertices[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice / 2.0
    }

    /// Whether every turn along the ring goes the same way.
    ///
    /// Collinear vertices are ignored.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign = 0.0_f64;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            let c = &self.vertices[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross == 0.0 {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// The same ring traversed the other way.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// The same ring starting at vertex `k`.
    pub fn rotated(&self, k: usize) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.rotate_left(k % self.vertices.len().max(1));
        Self { vertices }
    }
}

impl Polygon for SimplePolygon {
    fn crs(&self) -> CrsCode {
        self.vertices[0].crs
    }

    fn boundary(&self) -> Cow<'_, [HorizontalPosition]> {
        Cow::Borrowed(&self.vertices)
    }
}

impl Polygon for BoundingBox {
    fn crs(&self) -> CrsCode {
        self.crs
    }

    fn boundary(&self) -> Cow<'_, [HorizontalPosition]> {
        Cow::Owned(self.vertices().to_vec())
    }

    fn bounding_box(&self) -> BoundingBox {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> SimplePolygon {
        SimplePolygon::from_xy(&[0.0, 10.0, 10.0, 0.0], &[0.0, 0.0, 10.0, 10.0], CrsCode::Epsg4326)
            .unwrap()
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            SimplePolygon::new(vec![]),
            Err(EdalError::Construction(_))
        ));
        assert!(matches!(
            SimplePolygon::from_xy(&[0.0, 1.0], &[0.0, 1.0], CrsCode::Epsg4326),
            Err(EdalError::InvalidPolygon(_))
        ));
        assert!(matches!(
            SimplePolygon::from_xy(&[0.0, 1.0, 2.0], &[0.0, 1.0], CrsCode::Epsg4326),
            Err(EdalError::Construction(_))
        ));
    }

    #[test]
    fn test_area_and_orientation() {
        let sq = square();
        assert_eq!(sq.signed_area(), 100.0);
        assert_eq!(sq.reversed().signed_area(), -100.0);
        assert!(sq.is_convex());
        assert!(sq.reversed().is_convex());
    }

    #[test]
    fn test_concave_detection() {
        let arrow = SimplePolygon::from_xy(
            &[0.0, 10.0, 5.0, 10.0],
            &[0.0, 0.0, 5.0, 10.0],
            CrsCode::Epsg4326,
        )
        .unwrap();
        assert!(!arrow.is_convex());
    }

    #[test]
    fn test_boundary_is_outside() {
        let sq = square();
        assert!(sq.contains(&HorizontalPosition::wgs84(5.0, 5.0)).unwrap());
        assert!(!sq.contains(&HorizontalPosition::wgs84(0.0, 5.0)).unwrap());
        assert!(!sq.contains(&HorizontalPosition::wgs84(10.0, 5.0)).unwrap());
        assert!(!sq.contains(&HorizontalPosition::wgs84(5.0, 0.0)).unwrap());
        assert!(!sq.contains(&HorizontalPosition::wgs84(5.0, 10.0)).unwrap());
        assert!(!sq.contains(&HorizontalPosition::wgs84(10.0, 10.0)).unwrap());
    }

    #[test]
    fn test_coordinate_arrays() {
        let sq = square();
        assert_eq!(sq.x_points(), vec![0.0, 10.0, 10.0, 0.0]);
        assert_eq!(sq.y_points(), vec![0.0, 0.0, 10.0, 10.0]);
        assert_eq!(
            Polygon::bounding_box(&sq),
            BoundingBox::new(0.0, 0.0, 10.0, 10.0, CrsCode::Epsg4326)
        );
    }

    #[test]
    fn test_bbox_as_polygon() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0, CrsCode::Epsg4326);
        assert!(bbox.contains(&HorizontalPosition::wgs84(5.0, 5.0)).unwrap());
        assert!(!bbox.contains(&HorizontalPosition::wgs84(10.0, 5.0)).unwrap());
        assert_eq!(SimplePolygon::from_bbox(&bbox).signed_area(), 100.0);
    }
}
