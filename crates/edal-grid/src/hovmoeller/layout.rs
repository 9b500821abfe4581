//! Strip layout for Hovmoeller plots.
//!
//! Each sample point becomes a vertical strip whose width is proportional
//! to the stretch of path it represents: from the midpoint with its previous
//! neighbour to the midpoint with its next one. Widths are whole units so
//! that values can be repeated column by column.

use crate::array::Array2D;
use crate::axis::{ReferenceableAxis, TimeAxis};
use crate::line_string::LineString;
use chrono::Duration;
use edal_common::{EdalError, EdalResult};
use tracing::debug;

/// Strip widths and axis scaling for one path.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    /// Fractional distance of each strip's far edge along the path.
    pub mid_points: Vec<f64>,
    /// Width of each strip in integer units.
    pub widths: Vec<usize>,
    /// Units per whole path length.
    pub multiplier: usize,
    /// Tick spacing for the location axis, in units.
    pub tick_unit: f64,
}

impl StripLayout {
    /// Sum of all strip widths.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum()
    }
}

/// Midpoints between adjacent fractional distances; the last entry is the
/// last distance itself.
pub fn mid_points(distances: &[f64]) -> Vec<f64> {
    let mut mids: Vec<f64> = distances.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    if let Some(&last) = distances.last() {
        mids.push(last);
    }
    mids
}

/// Pick units per path length and tick unit from the narrowest strip.
fn scale_for(min_gap: f64) -> (usize, f64) {
    if min_gap > 0.0001 && min_gap < 0.001 {
        (10_000, 2000.0)
    } else if min_gap > 0.001 && min_gap < 0.01 {
        (1_000, 250.0)
    } else {
        (100, 25.0)
    }
}

/// Lay out one strip per control point of `line`.
///
/// A zero-length path shares the width equally between its points.
pub fn strip_layout(line: &LineString) -> StripLayout {
    let distances = line.fractional_distances();
    let mids = mid_points(&distances);

    let gaps: Vec<f64> = mids
        .iter()
        .enumerate()
        .map(|(i, &m)| if i == 0 { m } else { m - mids[i - 1] })
        .collect();
    let min_gap = gaps.iter().skip(1).copied().fold(f64::MAX, f64::min);
    let (multiplier, tick_unit) = scale_for(min_gap);

    let widths = if line.length() > 0.0 {
        // round, not truncate: 0.5 * 100 may come out as 49.999...
        gaps.iter()
            .map(|g| (g * multiplier as f64).round().max(0.0) as usize)
            .collect()
    } else {
        vec![multiplier / gaps.len().max(1); gaps.len()]
    };

    debug!(
        points = gaps.len(),
        multiplier,
        total_width = widths.iter().sum::<usize>(),
        "Computed Hovmoeller strip layout"
    );

    StripLayout {
        mid_points: mids,
        widths,
        multiplier,
        tick_unit,
    }
}

/// Repeat each column of `values` as many times as its strip width.
pub fn pad_values<T: Clone>(values: &Array2D<T>, widths: &[usize]) -> EdalResult<Array2D<T>> {
    if widths.len() != values.x_size() {
        return Err(EdalError::construction(format!(
            "{} strip widths for {} columns",
            widths.len(),
            values.x_size()
        )));
    }

    let padded_x: usize = widths.iter().sum();
    let mut data = Vec::with_capacity(padded_x * values.y_size());
    for y in 0..values.y_size() {
        for (value, &width) in values.row(y)?.iter().zip(widths) {
            data.extend(std::iter::repeat(value).take(width).cloned());
        }
    }
    Array2D::from_vec(values.y_size(), padded_x, data)
}

/// Average time cell length: coordinate extent divided by the number of
/// times.
pub fn time_step(axis: &TimeAxis) -> Duration {
    let extent = axis.coordinate_extent();
    let size = i32::try_from(axis.size()).unwrap_or(i32::MAX);
    extent.duration() / size
}
