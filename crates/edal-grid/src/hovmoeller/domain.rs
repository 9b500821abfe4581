//! Hovmoeller cells and the domain of path points crossed with time.

use crate::array::Array2D;
use crate::axis::{ReferenceableAxis, TimeAxis};
use crate::line_string::LineString;
use chrono::{DateTime, Utc};
use edal_common::{CrsCode, EdalError, EdalResult, Extent, GeoPosition, HorizontalPosition};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One sample point paired with one time cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HovmoellerCell {
    pub position: HorizontalPosition,
    pub time_extent: Extent<DateTime<Utc>>,
}

impl HovmoellerCell {
    pub fn contains(&self, position: &HorizontalPosition, time: &DateTime<Utc>) -> bool {
        self.position == *position && self.time_extent.contains(time)
    }
}

/// The cross product of points along a path and the cells of a time axis.
///
/// Cells are indexed `[time_index][point_index]`. A domain built without
/// points or without times is empty: it has no cells and contains nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct HovmoellerDomain {
    points: Vec<HorizontalPosition>,
    time_axis: Option<TimeAxis>,
    cells: Array2D<HovmoellerCell>,
}

impl HovmoellerDomain {
    /// Build a domain from sample points sharing one CRS.
    pub fn new(points: Vec<HorizontalPosition>, time_axis: TimeAxis) -> EdalResult<Self> {
        let Some(first) = points.first() else {
            debug!("Hovmoeller domain has no points, using empty domain");
            return Ok(Self::empty());
        };
        let crs = first.crs;
        for point in &points {
            EdalError::check_crs(crs, point.crs)?;
        }

        let time_extents = (0..time_axis.size())
            .map(|t| time_axis.coordinate_bounds(t))
            .collect::<EdalResult<Vec<_>>>()?;
        let cells = Array2D::from_fn(time_extents.len(), points.len(), |t, p| HovmoellerCell {
            position: points[p],
            time_extent: time_extents[t],
        });

        debug!(
            points = points.len(),
            times = time_axis.size(),
            crs = %crs,
            "Created Hovmoeller domain"
        );

        Ok(Self {
            points,
            time_axis: Some(time_axis),
            cells,
        })
    }

    /// Build a domain from raw instants; no instants gives the empty domain.
    pub fn from_times(
        points: Vec<HorizontalPosition>,
        axis_name: &str,
        times: Vec<DateTime<Utc>>,
    ) -> EdalResult<Self> {
        if times.is_empty() {
            debug!("Hovmoeller domain has no times, using empty domain");
            return Ok(Self::empty());
        }
        Self::new(points, TimeAxis::new(axis_name, times)?)
    }

    /// The domain with no cells.
    pub fn empty() -> Self {
        Self {
            points: Vec::new(),
            time_axis: None,
            cells: Array2D::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether some cell sits exactly at the horizontal position of `pos`
    /// and its time extent contains the time of `pos`.
    ///
    /// This is a linear scan over every cell.
    pub fn contains(&self, pos: &GeoPosition) -> bool {
        self.contains_at(&pos.horizontal, &pos.time)
    }

    pub fn contains_at(&self, position: &HorizontalPosition, time: &DateTime<Utc>) -> bool {
        self.cells.iter().any(|cell| cell.contains(position, time))
    }

    pub fn points(&self) -> &[HorizontalPosition] {
        &self.points
    }

    pub fn time_axis(&self) -> Option<&TimeAxis> {
        self.time_axis.as_ref()
    }

    /// CRS of the sample points; `None` for the empty domain.
    pub fn crs(&self) -> Option<CrsCode> {
        self.points.first().map(|p| p.crs)
    }

    pub fn number_of_points(&self) -> usize {
        self.cells.x_size()
    }

    pub fn number_of_times(&self) -> usize {
        self.cells.y_size()
    }

    pub fn domain_objects(&self) -> &Array2D<HovmoellerCell> {
        &self.cells
    }

    /// The path through the sample points; `None` for the empty domain.
    pub fn line_string(&self) -> Option<LineString> {
        if self.is_empty() {
            return None;
        }
        LineString::new(self.points.clone()).ok()
    }
}
