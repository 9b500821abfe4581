//! Horizontal grids built from a pair of numeric axes.
//!
//! Cells are derived on demand from the axes: cell `(i, j)` is centred on
//! `(x_axis[i], y_axis[j])` and its footprint is the product of the two
//! axis cell bounds. Nothing is materialised unless asked for.

use crate::array::Array2D;
use crate::axis::{AxisKind, IrregularAxis, ReferenceableAxis, RegularAxis};
use edal_common::{BoundingBox, CrsCode, EdalError, EdalResult, HorizontalPosition};
use tracing::debug;

/// One cell of a horizontal grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell2D {
    /// Index along the x axis.
    pub i: usize,
    /// Index along the y axis.
    pub j: usize,
    pub centre: HorizontalPosition,
    pub footprint: BoundingBox,
}

impl GridCell2D {
    /// Whether the footprint contains `pos` (closed bounds, same CRS only).
    pub fn contains(&self, pos: &HorizontalPosition) -> bool {
        pos.crs == self.footprint.crs && self.footprint.contains_point(pos.x, pos.y)
    }
}

/// A two-dimensional grid in a horizontal CRS.
pub trait HorizontalGrid {
    type XAxis: ReferenceableAxis<Value = f64>;
    type YAxis: ReferenceableAxis<Value = f64>;

    fn x_axis(&self) -> &Self::XAxis;

    fn y_axis(&self) -> &Self::YAxis;

    fn crs(&self) -> CrsCode;

    fn x_size(&self) -> usize {
        self.x_axis().size()
    }

    fn y_size(&self) -> usize {
        self.y_axis().size()
    }

    /// Outer footprint of all cells.
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_extents(
            &self.x_axis().coordinate_extent(),
            &self.y_axis().coordinate_extent(),
            self.crs(),
        )
    }

    /// The cell at x index `i`, y index `j`.
    fn cell(&self, i: usize, j: usize) -> EdalResult<GridCell2D> {
        if i >= self.x_size() {
            return Err(EdalError::IndexOutOfRange {
                index: i,
                size: self.x_size(),
            });
        }
        if j >= self.y_size() {
            return Err(EdalError::IndexOutOfRange {
                index: j,
                size: self.y_size(),
            });
        }
        let x_bounds = self.x_axis().coordinate_bounds(i)?;
        let y_bounds = self.y_axis().coordinate_bounds(j)?;
        let crs = self.crs();
        Ok(GridCell2D {
            i,
            j,
            centre: HorizontalPosition::new(
                self.x_axis().coordinate_value(i)?,
                self.y_axis().coordinate_value(j)?,
                crs,
            ),
            footprint: BoundingBox::from_extents(&x_bounds, &y_bounds, crs),
        })
    }

    /// `(i, j)` of the cell containing `pos`, or `None` outside the grid.
    fn find_cell_index(&self, pos: &HorizontalPosition) -> EdalResult<Option<(usize, usize)>> {
        EdalError::check_crs(self.crs(), pos.crs)?;
        let index = self
            .x_axis()
            .find_index_of(pos.x)
            .zip(self.y_axis().find_index_of(pos.y));
        Ok(index)
    }

    /// Lazy row-major iteration over all cells (`j` outer, `i` inner).
    fn cells(&self) -> GridCells<'_, Self>
    where
        Self: Sized,
    {
        GridCells {
            grid: self,
            i: 0,
            j: 0,
        }
    }

    /// All cells, materialised and indexed `[j][i]`.
    fn domain_objects(&self) -> EdalResult<Array2D<GridCell2D>>
    where
        Self: Sized,
    {
        let cells = self.cells().collect::<Vec<_>>();
        Array2D::from_vec(self.y_size(), self.x_size(), cells)
    }
}

/// Row-major iterator over the cells of a grid.
#[derive(Debug)]
pub struct GridCells<'a, G> {
    grid: &'a G,
    i: usize,
    j: usize,
}

impl<G: HorizontalGrid> Iterator for GridCells<'_, G> {
    type Item = GridCell2D;

    fn next(&mut self) -> Option<GridCell2D> {
        if self.j >= self.grid.y_size() {
            return None;
        }
        let cell = self.grid.cell(self.i, self.j).ok();
        self.i += 1;
        if self.i >= self.grid.x_size() {
            self.i = 0;
            self.j += 1;
        }
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.grid.x_size() * self.grid.y_size();
        let done = self.j * self.grid.x_size() + self.i;
        let remaining = total.saturating_sub(done);
        (remaining, Some(remaining))
    }
}

/// A grid whose cells are the product of two independent axes.
#[derive(Debug, Clone, PartialEq)]
pub struct RectilinearGrid<X = IrregularAxis, Y = IrregularAxis> {
    x_axis: X,
    y_axis: Y,
    crs: CrsCode,
}

/// A rectilinear grid with evenly spaced axes and O(1) cell lookup.
pub type RegularGrid = RectilinearGrid<RegularAxis, RegularAxis>;

impl<X, Y> RectilinearGrid<X, Y>
where
    X: ReferenceableAxis<Value = f64>,
    Y: ReferenceableAxis<Value = f64>,
{
    pub fn new(x_axis: X, y_axis: Y, crs: CrsCode) -> Self {
        debug!(
            x_axis = x_axis.name(),
            y_axis = y_axis.name(),
            nx = x_axis.size(),
            ny = y_axis.size(),
            crs = %crs,
            "Created rectilinear grid"
        );
        Self { x_axis, y_axis, crs }
    }
}

impl RegularGrid {
    /// Divide `bbox` into `nx` by `ny` equal cells.
    ///
    /// The box becomes the outer footprint of the grid, so cell centres sit
    /// at `min + (k + 0.5) * spacing`. Geographic grids get a wrapping
    /// longitude x axis.
    pub fn from_bbox(bbox: &BoundingBox, nx: usize, ny: usize) -> EdalResult<Self> {
        if nx == 0 || ny == 0 {
            return Err(EdalError::construction(format!(
                "grid must have at least one cell in each direction (got {nx}x{ny})"
            )));
        }
        if !bbox.is_valid() || bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Err(EdalError::construction(format!(
                "grid bounding box [{}, {}, {}, {}] has no area",
                bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
            )));
        }

        let dx = bbox.width() / nx as f64;
        let dy = bbox.height() / ny as f64;
        let (x_name, y_name, x_kind) = if bbox.crs.is_geographic() {
            ("longitude", "latitude", AxisKind::Longitude)
        } else {
            ("x", "y", AxisKind::Linear)
        };

        let x_axis = RegularAxis::with_kind(x_name, bbox.min_x + 0.5 * dx, dx, nx, x_kind)?;
        let y_axis = RegularAxis::new(y_name, bbox.min_y + 0.5 * dy, dy, ny)?;
        Ok(Self::new(x_axis, y_axis, bbox.crs))
    }

    pub fn x_spacing(&self) -> f64 {
        self.x_axis.spacing()
    }

    pub fn y_spacing(&self) -> f64 {
        self.y_axis.spacing()
    }
}

impl<X, Y> HorizontalGrid for RectilinearGrid<X, Y>
where
    X: ReferenceableAxis<Value = f64>,
    Y: ReferenceableAxis<Value = f64>,
{
    type XAxis = X;
    type YAxis = Y;

    fn x_axis(&self) -> &X {
        &self.x_axis
    }

    fn y_axis(&self) -> &Y {
        &self.y_axis
    }

    fn crs(&self) -> CrsCode {
        self.crs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_grid() -> RegularGrid {
        let bbox = BoundingBox::new(100.0, 20.0, 130.0, 50.0, CrsCode::Epsg4326);
        RegularGrid::from_bbox(&bbox, 60, 60).unwrap()
    }

    #[test]
    fn test_from_bbox_centres() {
        let grid = reference_grid();
        assert_eq!(grid.x_size(), 60);
        assert_eq!(grid.y_size(), 60);
        assert_eq!(grid.x_spacing(), 0.5);
        assert_eq!(grid.x_axis().name(), "longitude");
        assert_eq!(grid.x_axis().kind(), AxisKind::Longitude);

        let cell = grid.cell(0, 0).unwrap();
        assert_eq!((cell.centre.x, cell.centre.y), (100.25, 20.25));
        assert_eq!(
            cell.footprint,
            BoundingBox::new(100.0, 20.0, 100.5, 20.5, CrsCode::Epsg4326)
        );
        assert_eq!(
            grid.bounding_box(),
            BoundingBox::new(100.0, 20.0, 130.0, 50.0, CrsCode::Epsg4326)
        );
    }

    #[test]
    fn test_from_bbox_rejects_empty() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0, CrsCode::Epsg3857);
        assert!(RegularGrid::from_bbox(&bbox, 0, 5).is_err());

        let flat = BoundingBox::new(0.0, 0.0, 10.0, 0.0, CrsCode::Epsg3857);
        assert!(RegularGrid::from_bbox(&flat, 5, 5).is_err());

        let grid = RegularGrid::from_bbox(&bbox, 5, 5).unwrap();
        assert_eq!(grid.x_axis().name(), "x");
        assert_eq!(grid.x_axis().kind(), AxisKind::Linear);
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = reference_grid();
        assert_eq!(
            grid.cell(60, 0).unwrap_err(),
            EdalError::IndexOutOfRange { index: 60, size: 60 }
        );
        assert!(grid.cell(0, 60).is_err());
    }

    #[test]
    fn test_cells_are_row_major() {
        let bbox = BoundingBox::new(0.0, 0.0, 3.0, 2.0, CrsCode::Epsg3857);
        let grid = RegularGrid::from_bbox(&bbox, 3, 2).unwrap();

        let cells = grid.cells();
        assert_eq!(cells.size_hint(), (6, Some(6)));
        let order: Vec<(usize, usize)> = cells.map(|c| (c.i, c.j)).collect();
        assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);

        let objects = grid.domain_objects().unwrap();
        assert_eq!(objects.shape(), [2, 3]);
        let cell = objects.get(1, 2).unwrap();
        assert_eq!((cell.i, cell.j), (2, 1));
    }

    #[test]
    fn test_find_cell_index() {
        let grid = reference_grid();
        let pos = HorizontalPosition::wgs84(105.1, 22.3);
        assert_eq!(grid.find_cell_index(&pos).unwrap(), Some((10, 4)));
        assert!(grid.cell(10, 4).unwrap().contains(&pos));

        let outside = HorizontalPosition::wgs84(105.1, 60.0);
        assert_eq!(grid.find_cell_index(&outside).unwrap(), None);

        let wrapped = HorizontalPosition::wgs84(105.1 - 360.0, 22.3);
        assert_eq!(grid.find_cell_index(&wrapped).unwrap(), Some((10, 4)));

        let projected = HorizontalPosition::new(105.1, 22.3, CrsCode::Epsg3857);
        assert!(matches!(
            grid.find_cell_index(&projected),
            Err(EdalError::MismatchedReferenceSystem { .. })
        ));
    }

    #[test]
    fn test_rectilinear_with_descending_y() {
        let x = IrregularAxis::new("x", vec![0.0, 1.0, 3.0]).unwrap();
        let y = IrregularAxis::new("y", vec![30.0, 20.0, 10.0]).unwrap();
        let grid = RectilinearGrid::new(x, y, CrsCode::Epsg3857);

        let bbox = grid.bounding_box();
        assert_eq!((bbox.min_x, bbox.max_x), (-0.5, 4.0));
        assert_eq!((bbox.min_y, bbox.max_y), (5.0, 35.0));

        let cell = grid.cell(2, 0).unwrap();
        assert_eq!((cell.centre.x, cell.centre.y), (3.0, 30.0));
        assert_eq!(cell.footprint.min_y, 25.0);
        assert_eq!(cell.footprint.max_y, 35.0);
    }
}
