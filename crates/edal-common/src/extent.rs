//! Closed intervals over ordered values.

use crate::{EdalError, EdalResult};
use chrono::{DateTime, Duration, Utc};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed interval `[low, high]` with `low <= high`.
///
/// Used for axis coordinate extents, cell bounds and time spans. The
/// invariant is checked on construction (including deserialization), so an
/// `Extent` is never inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawExtent<T>",
    bound(deserialize = "T: Deserialize<'de> + PartialOrd + fmt::Debug")
)]
pub struct Extent<T> {
    low: T,
    high: T,
}

#[derive(Deserialize)]
struct RawExtent<T> {
    low: T,
    high: T,
}

impl<T: PartialOrd + fmt::Debug> TryFrom<RawExtent<T>> for Extent<T> {
    type Error = EdalError;

    fn try_from(raw: RawExtent<T>) -> EdalResult<Self> {
        Extent::new(raw.low, raw.high)
    }
}

impl<T: PartialOrd + fmt::Debug> Extent<T> {
    /// Create an extent, failing if `low > high` or the bounds are unordered (NaN).
    pub fn new(low: T, high: T) -> EdalResult<Self> {
        if low <= high {
            Ok(Self { low, high })
        } else {
            Err(EdalError::construction(format!(
                "extent low {:?} is not <= high {:?}",
                low, high
            )))
        }
    }
}

impl<T: PartialOrd> Extent<T> {
    /// Create an extent from two bounds in either order.
    pub fn from_unordered(a: T, b: T) -> Self {
        if b < a {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    /// Closed containment test.
    pub fn contains(&self, value: &T) -> bool {
        &self.low <= value && value <= &self.high
    }

    /// Check if two extents share at least one value.
    pub fn intersects(&self, other: &Extent<T>) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Check if this extent is a single value.
    pub fn is_point(&self) -> bool {
        self.low == self.high
    }

    pub fn low_ref(&self) -> &T {
        &self.low
    }

    pub fn high_ref(&self) -> &T {
        &self.high
    }
}

impl<T: Copy> Extent<T> {
    /// A degenerate extent holding one value.
    pub fn point(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub fn low(&self) -> T {
        self.low
    }

    pub fn high(&self) -> T {
        self.high
    }
}

impl<T: Float> Extent<T> {
    /// Width of the interval.
    pub fn width(&self) -> T {
        self.high - self.low
    }

    /// Centre of the interval.
    pub fn midpoint(&self) -> T {
        self.low + (self.high - self.low) / (T::one() + T::one())
    }
}

impl Extent<DateTime<Utc>> {
    /// Length of the time span.
    pub fn duration(&self) -> Duration {
        self.high - self.low
    }
}

impl<T: fmt::Display> fmt::Display for Extent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
