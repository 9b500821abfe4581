//! Grid clipping and polygon intersection.

use crate::config::ClipperConfig;
use crate::polygon::{Polygon, SimplePolygon};
use edal_common::{BoundingBox, EdalError, EdalResult, HorizontalPosition};
use edal_grid::{Array1D, GridCell2D, HorizontalGrid, ReferenceableAxis};
use nalgebra::{Matrix2, Vector2};
use std::ops::RangeInclusive;
use tracing::{debug, trace, warn};

/// Selects grid cells inside a region and intersects polygons.
#[derive(Debug, Clone, Default)]
pub struct Clipper {
    config: ClipperConfig,
}

impl Clipper {
    /// Create a clipper, rejecting an invalid configuration.
    pub fn new(config: ClipperConfig) -> EdalResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClipperConfig {
        &self.config
    }

    /// Cells of `grid` whose centre lies inside `bbox` (edges included).
    ///
    /// Returns `None` when the box misses the grid's footprint entirely,
    /// and otherwise the matching cells in row-major order (`j` outer,
    /// `i` inner), which may be empty. Box edges beyond the grid clamp to
    /// the outermost cells.
    pub fn clip<G: HorizontalGrid>(
        &self,
        grid: &G,
        bbox: &BoundingBox,
    ) -> EdalResult<Option<Array1D<GridCell2D>>> {
        self.select_cells(grid, bbox, |centre| {
            Ok(bbox.contains_point(centre.x, centre.y))
        })
    }

    /// Cells of `grid` whose centre lies strictly inside `polygon`.
    ///
    /// The search window is the polygon's bounding box; `None` has the same
    /// meaning as in [`Clipper::clip`].
    pub fn clip_polygon<G: HorizontalGrid, P: Polygon + ?Sized>(
        &self,
        grid: &G,
        polygon: &P,
    ) -> EdalResult<Option<Array1D<GridCell2D>>> {
        let bbox = polygon.bounding_box();
        self.select_cells(grid, &bbox, |centre| polygon.contains(centre))
    }

    fn select_cells<G: HorizontalGrid>(
        &self,
        grid: &G,
        bbox: &BoundingBox,
        mut accept: impl FnMut(&HorizontalPosition) -> EdalResult<bool>,
    ) -> EdalResult<Option<Array1D<GridCell2D>>> {
        EdalError::check_crs(grid.crs(), bbox.crs)?;

        let extent = grid.bounding_box();
        if bbox.max_x < extent.min_x
            || extent.max_x < bbox.min_x
            || bbox.max_y < extent.min_y
            || extent.max_y < bbox.min_y
        {
            debug!(
                bbox = ?(bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y),
                "Clip region does not overlap grid"
            );
            return Ok(None);
        }

        let x_range = index_window(grid.x_axis(), bbox.min_x, bbox.max_x);
        let y_range = index_window(grid.y_axis(), bbox.min_y, bbox.max_y);
        debug!(x_range = ?x_range, y_range = ?y_range, "Clip index window");

        let mut selected = Vec::new();
        for j in y_range {
            for i in x_range.clone() {
                let cell = grid.cell(i, j)?;
                if accept(&cell.centre)? {
                    selected.push(cell);
                }
            }
        }

        debug!(cells = selected.len(), "Clipped grid");
        Ok(Some(Array1D::new(selected)))
    }

    /// Intersect `subject` with the convex polygon `clip`.
    ///
    /// The clip polygon may be listed in either direction. Returns `None`
    /// when the intersection has no area (fewer than three vertices
    /// survive). A non-convex clip polygon is rejected when
    /// `require_convex_clip` is set; otherwise a warning is logged and the
    /// result is unspecified.
    pub fn sutherland_hodgman(
        &self,
        subject: &SimplePolygon,
        clip: &SimplePolygon,
    ) -> EdalResult<Option<SimplePolygon>> {
        EdalError::check_crs(clip.crs(), subject.crs())?;

        if !clip.is_convex() {
            if self.config.require_convex_clip {
                return Err(EdalError::invalid_polygon(
                    "clip polygon for Sutherland-Hodgman must be convex",
                ));
            }
            warn!(
                vertices = clip.len(),
                "Clip polygon is not convex; intersection may be wrong"
            );
        }

        let clip = if clip.signed_area() < 0.0 {
            clip.reversed()
        } else {
            clip.clone()
        };
        let clip_ring = clip.vertices();
        let n = clip_ring.len();

        let mut result: Vec<HorizontalPosition> = subject.vertices().to_vec();
        for i in 0..n {
            if result.is_empty() {
                break;
            }
            let edge_start = &clip_ring[(i + n - 1) % n];
            let edge_end = &clip_ring[i];

            let input = std::mem::take(&mut result);
            let m = input.len();
            for k in 0..m {
                let prev = &input[(k + m - 1) % m];
                let current = &input[k];

                if is_inside(edge_start, edge_end, current) {
                    if !is_inside(edge_start, edge_end, prev) {
                        let hit = self.intersection(edge_start, edge_end, prev, current)?;
                        push_distinct(&mut result, hit);
                    }
                    push_distinct(&mut result, *current);
                } else if is_inside(edge_start, edge_end, prev) {
                    let hit = self.intersection(edge_start, edge_end, prev, current)?;
                    push_distinct(&mut result, hit);
                }
            }
            if result.len() > 1 && result.first() == result.last() {
                result.pop();
            }
            trace!(edge = i, vertices = result.len(), "Clipped against edge");
        }

        if result.len() < 3 {
            debug!(vertices = result.len(), "Polygons do not intersect");
            return Ok(None);
        }
        SimplePolygon::new(result).map(Some)
    }

    /// Where the line through `a`, `b` meets the line through `p`, `q`.
    fn intersection(
        &self,
        a: &HorizontalPosition,
        b: &HorizontalPosition,
        p: &HorizontalPosition,
        q: &HorizontalPosition,
    ) -> EdalResult<HorizontalPosition> {
        // Each line as A x + B y = C
        let (a1, b1) = (b.y - a.y, a.x - b.x);
        let (a2, b2) = (q.y - p.y, p.x - q.x);
        let m = Matrix2::new(a1, b1, a2, b2);
        let c = Vector2::new(a1 * a.x + b1 * a.y, a2 * p.x + b2 * p.y);

        let det = m.determinant();
        let scale = a1.hypot(b1) * a2.hypot(b2);
        if !(det.abs() > self.config.determinant_tolerance * scale) {
            return Err(EdalError::degeneracy(format!(
                "edges ({}, {})-({}, {}) and ({}, {})-({}, {}) are parallel (det = {det:e})",
                a.x, a.y, b.x, b.y, p.x, p.y, q.x, q.y
            )));
        }

        // Cramer's rule: swap the constants into each column in turn
        let x = Matrix2::from_columns(&[c, m.column(1).into_owned()]).determinant() / det;
        let y = Matrix2::from_columns(&[m.column(0).into_owned(), c]).determinant() / det;
        if !(x.is_finite() && y.is_finite()) {
            return Err(EdalError::degeneracy(format!(
                "intersection is not finite (det = {det:e})"
            )));
        }
        Ok(HorizontalPosition::new(x, y, a.crs))
    }
}

/// Append `p` unless it repeats the previous vertex.
fn push_distinct(ring: &mut Vec<HorizontalPosition>, p: HorizontalPosition) {
    if ring.last() != Some(&p) {
        ring.push(p);
    }
}

/// Strictly left of the directed line from `a` to `b`.
fn is_inside(a: &HorizontalPosition, b: &HorizontalPosition, c: &HorizontalPosition) -> bool {
    (a.x - c.x) * (b.y - c.y) > (a.y - c.y) * (b.x - c.x)
}

/// Index range covering `[low, high]` on `axis`, clamped to the axis.
fn index_window<A>(axis: &A, low: f64, high: f64) -> RangeInclusive<usize>
where
    A: ReferenceableAxis<Value = f64>,
{
    let a = axis.nearest_index_clamped(low);
    let b = axis.nearest_index_clamped(high);
    a.min(b)..=a.max(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use edal_common::CrsCode;

    fn pos(x: f64, y: f64) -> HorizontalPosition {
        HorizontalPosition::wgs84(x, y)
    }

    #[test]
    fn test_is_inside_left_of_edge() {
        let (a, b) = (pos(0.0, 0.0), pos(10.0, 0.0));
        assert!(is_inside(&a, &b, &pos(5.0, 1.0)));
        assert!(!is_inside(&a, &b, &pos(5.0, -1.0)));
        assert!(!is_inside(&a, &b, &pos(5.0, 0.0)));
    }

    #[test]
    fn test_intersection_of_crossing_lines() {
        let clipper = Clipper::default();
        let hit = clipper
            .intersection(&pos(0.0, 0.0), &pos(10.0, 10.0), &pos(0.0, 10.0), &pos(10.0, 0.0))
            .unwrap();
        assert!((hit.x - 5.0).abs() < 1e-12);
        assert!((hit.y - 5.0).abs() < 1e-12);
        assert_eq!(hit.crs, CrsCode::Epsg4326);
    }

    #[test]
    fn test_parallel_lines_are_degenerate() {
        let clipper = Clipper::default();
        let err = clipper
            .intersection(&pos(0.0, 0.0), &pos(10.0, 0.0), &pos(0.0, 1.0), &pos(10.0, 1.0))
            .unwrap_err();
        assert_eq!(err.code(), "NumericalDegeneracyError");
    }

    #[test]
    fn test_new_validates_config() {
        let config = ClipperConfig {
            determinant_tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            Clipper::new(config),
            Err(EdalError::InvalidParameter { .. })
        ));
        assert!(Clipper::new(ClipperConfig::default()).is_ok());
    }

    #[test]
    fn test_push_distinct_skips_repeats() {
        let mut ring = vec![pos(5.0, -0.0)];
        push_distinct(&mut ring, pos(5.0, 0.0));
        push_distinct(&mut ring, pos(8.0, 5.0));
        assert_eq!(ring, vec![pos(5.0, -0.0), pos(8.0, 5.0)]);
    }

    #[test]
    fn test_index_window_orders_descending_axes() {
        let axis = edal_grid::IrregularAxis::new("y", vec![50.0, 40.0, 30.0, 20.0]).unwrap();
        assert_eq!(index_window(&axis, 28.0, 41.0), 1..=2);
        assert_eq!(index_window(&axis, -100.0, 100.0), 0..=3);
    }
}
