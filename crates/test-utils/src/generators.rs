//! Test data generators for synthetic grids and time series.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written correctly
/// by checking that grid[row][col] == col * 1000 + row.
///
/// # Arguments
///
/// * `width` - Number of columns
/// * `height` - Number of rows
///
/// # Returns
///
/// A `Vec<f64>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a test grid with `None` at the given `(col, row)` positions and
/// `col * 1000 + row` elsewhere.
pub fn create_grid_with_gaps(
    width: usize,
    height: usize,
    missing: &[(usize, usize)],
) -> Vec<Option<f64>> {
    let mut data: Vec<Option<f64>> = create_test_grid(width, height).into_iter().map(Some).collect();
    for &(col, row) in missing {
        if col < width && row < height {
            data[row * width + col] = None;
        }
    }
    data
}

/// `count` consecutive days at midnight UTC, starting from `(year, month, day)`.
///
/// Panics on an invalid start date; fixtures are fixed at compile time.
pub fn daily_times(start: (i32, u32, u32), count: usize) -> Vec<DateTime<Utc>> {
    let first = Utc
        .with_ymd_and_hms(start.0, start.1, start.2, 0, 0, 0)
        .single()
        .expect("valid fixture date");
    (0..count).map(|k| first + Duration::days(k as i64)).collect()
}

/// The daily Hovmoeller test series: 1994-02-02 through 1994-02-22.
pub fn hovmoeller_times() -> Vec<DateTime<Utc>> {
    daily_times(crate::fixtures::time::FIRST_DAY, crate::fixtures::time::DAY_COUNT)
}

/// Irregularly spaced instants: gaps of 1, 2, 4, ... hours.
pub fn irregular_times(count: usize) -> Vec<DateTime<Utc>> {
    let mut current = daily_times(crate::fixtures::time::FIRST_DAY, 1)[0];
    let mut gap = Duration::hours(1);
    let mut times = Vec::with_capacity(count);
    for _ in 0..count {
        times.push(current);
        current += gap;
        gap = gap * 2;
    }
    times
}

/// Vertices of a regular polygon with `sides` sides around `(cx, cy)`,
/// counter-clockwise from angle zero.
pub fn regular_polygon(cx: f64, cy: f64, radius: f64, sides: usize) -> Vec<(f64, f64)> {
    (0..sides)
        .map(|k| {
            let angle = std::f64::consts::TAU * k as f64 / sides as f64;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}
