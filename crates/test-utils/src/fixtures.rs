//! Common test fixtures for EDAL tests.
//!
//! Bounding boxes are `(min_x, min_y, max_x, max_y)` tuples; polygons are
//! vertex slices in drawing order. All coordinates are WGS84 lon/lat unless
//! noted.

/// Common bounding box definitions for testing.
pub mod bbox {
    /// Global bounding box (-180 to 180, -90 to 90)
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Outer extent of the reference 60x60 grid
    pub const REFERENCE_GRID: (f64, f64, f64, f64) = (100.0, 20.0, 130.0, 50.0);

    /// Fully inside the reference grid
    pub const INSIDE: (f64, f64, f64, f64) = (105.0, 22.3, 110.0, 24.8);

    /// West of the reference grid, same latitudes
    pub const WEST: (f64, f64, f64, f64) = (65.0, 22.3, 90.0, 24.8);

    /// West of and below the reference grid
    pub const SOUTH_WEST: (f64, f64, f64, f64) = (65.0, 10.3, 90.0, 18.8);

    /// Spans the grid's longitudes but lies entirely below it
    pub const SOUTH: (f64, f64, f64, f64) = (11.0, 10.3, 150.0, 18.8);

    /// East of the reference grid
    pub const EAST: (f64, f64, f64, f64) = (131.0, 22.3, 140.0, 24.8);

    /// North of the reference grid
    pub const NORTH: (f64, f64, f64, f64) = (105.0, 51.0, 110.0, 60.0);

    /// Partial overlaps with the reference grid, each clipped on at least
    /// one side
    pub const PARTIAL_OVERLAPS: [(f64, f64, f64, f64); 9] = [
        (90.0, 22.3, 112.0, 24.8),
        (105.0, 12.3, 110.0, 24.8),
        (90.0, 12.3, 135.0, 55.0),
        (125.0, 12.3, 135.0, 24.8),
        (95.0, 45.2, 105.0, 60.3),
        (108.0, 45.2, 110.0, 60.3),
        (128.0, 45.2, 140.0, 60.3),
        (90.0, 25.0, 110.0, 27.0),
        (128.0, 25.0, 140.0, 27.0),
    ];

    /// Invalid bbox (min > max)
    pub const INVALID: (f64, f64, f64, f64) = (10.0, 10.0, 5.0, 5.0);
}

/// Common grid specifications for testing.
pub mod grid {
    /// The 60x60, half-degree grid over [100, 130] x [20, 50]
    pub const REFERENCE_60X60: GridSpec = GridSpec {
        width: 60,
        height: 60,
        min_x: 100.0,
        max_x: 130.0,
        min_y: 20.0,
        max_y: 50.0,
    };

    /// Simple 10x10 test grid
    pub const SIMPLE_10X10: GridSpec = GridSpec {
        width: 10,
        height: 10,
        min_x: -10.0,
        max_x: 10.0,
        min_y: -10.0,
        max_y: 10.0,
    };

    /// Grid specification for testing.
    #[derive(Debug, Clone, Copy)]
    pub struct GridSpec {
        pub width: usize,
        pub height: usize,
        pub min_x: f64,
        pub max_x: f64,
        pub min_y: f64,
        pub max_y: f64,
    }

    impl GridSpec {
        /// Returns the total number of grid cells.
        pub fn size(&self) -> usize {
            self.width * self.height
        }

        /// Returns the cell size along each axis.
        pub fn resolution(&self) -> (f64, f64) {
            let dx = (self.max_x - self.min_x) / self.width as f64;
            let dy = (self.max_y - self.min_y) / self.height as f64;
            (dx, dy)
        }

        /// Returns the bounding box as (min_x, min_y, max_x, max_y).
        pub fn bbox(&self) -> (f64, f64, f64, f64) {
            (self.min_x, self.min_y, self.max_x, self.max_y)
        }
    }
}

/// Reference polygons.
pub mod polygon {
    /// Axis-aligned rectangle [10, 20] x [5, 10], as separate x and y arrays
    pub const RECTANGLE_X: [f64; 4] = [10.0, 10.0, 20.0, 20.0];
    pub const RECTANGLE_Y: [f64; 4] = [5.0, 10.0, 10.0, 5.0];

    /// Irregular convex pentagon
    pub const PENTAGON: [(f64, f64); 5] = [
        (0.0, 100.0),
        (30.0, 0.0),
        (80.0, 20.0),
        (100.0, 120.0),
        (60.0, 130.0),
    ];

    /// Square [0, 10] x [0, 10], counter-clockwise
    pub const UNIT_SQUARE_10: [(f64, f64); 4] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];

    /// Square [20, 30] x [0, 10], counter-clockwise (disjoint from
    /// `UNIT_SQUARE_10`)
    pub const FAR_SQUARE: [(f64, f64); 4] = [(20.0, 0.0), (30.0, 0.0), (30.0, 10.0), (20.0, 10.0)];

    /// Tall rectangle [30, 70] x [-10, 50]
    pub const SUBJECT_RECTANGLE: [(f64, f64); 4] =
        [(30.0, -10.0), (70.0, -10.0), (70.0, 50.0), (30.0, 50.0)];

    /// Clip rectangle [10, 40] x [0, 80]
    pub const CLIP_RECTANGLE: [(f64, f64); 4] =
        [(10.0, 0.0), (40.0, 0.0), (40.0, 80.0), (10.0, 80.0)];

    /// Concave nine-vertex subject polygon
    pub const CONCAVE_X: [f64; 9] = [50.0, 200.0, 350.0, 350.0, 250.0, 200.0, 150.0, 100.0, 100.0];
    pub const CONCAVE_Y: [f64; 9] = [150.0, 50.0, 150.0, 300.0, 300.0, 250.0, 350.0, 250.0, 200.0];

    /// Clip square [100, 300] x [100, 300]
    pub const CLIP_SQUARE_X: [f64; 4] = [100.0, 300.0, 300.0, 100.0];
    pub const CLIP_SQUARE_Y: [f64; 4] = [100.0, 100.0, 300.0, 300.0];
}

/// Common time values for testing.
pub mod time {
    /// First day of the reference daily series
    pub const FIRST_DAY: (i32, u32, u32) = (1994, 2, 2);

    /// Number of days in the reference daily series (1994-02-02 to 1994-02-22)
    pub const DAY_COUNT: usize = 21;

    /// A fixed reference time for tests
    pub const REFERENCE_TIME: &str = "1994-02-02T12:00:00Z";
}

/// Hovmoeller sample paths.
pub mod path {
    /// Three points along latitude 30, unevenly spaced
    pub const LATITUDE_30: [(f64, f64); 3] = [(100.0, 30.0), (102.0, 30.0), (105.0, 30.0)];
}
