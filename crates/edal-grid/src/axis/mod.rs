//! Referenceable axes: ordered, named sequences of coordinate values.
//!
//! Each coordinate value is the centre of a cell. Cell bounds sit halfway
//! between neighbouring values, and the outermost bounds are extrapolated
//! half a gap beyond the first and last values. The direction of an axis
//! (ascending or descending) is fixed when it is built.
//!
//! Three axis types cover the supported coordinates:
//!
//! - [`IrregularAxis`]: explicit numeric values, binary-search lookup
//! - [`RegularAxis`]: evenly spaced numeric values, O(1) lookup
//! - [`TimeAxis`]: instants, with duration-based extrapolation
//!
//! Numeric axes carry an [`AxisKind`]; longitude axes resolve lookups modulo
//! 360 degrees.

mod numeric;
mod time;

pub use numeric::{AxisKind, IrregularAxis, RegularAxis};
pub use time::TimeAxis;

use edal_common::{EdalError, EdalResult, Extent};
use std::fmt::Debug;
use std::marker::PhantomData;

/// An ordered, named, strictly monotonic sequence of coordinate values.
///
/// Implementors supply value access and the extrapolation rules; extents,
/// cell bounds and index search are derived here.
pub trait ReferenceableAxis {
    type Value: Copy + PartialOrd + Debug;

    fn name(&self) -> &str;

    /// Number of coordinate values (always at least one).
    fn size(&self) -> usize;

    /// The value at `index`, or `None` past the end.
    fn value_at(&self, index: usize) -> Option<Self::Value>;

    fn first_value(&self) -> Self::Value;

    fn last_value(&self) -> Self::Value;

    fn is_ascending(&self) -> bool;

    /// Outer bound of the first cell, from the first two values.
    ///
    /// Generally `first - (next - first) / 2`.
    fn extend_first_value(&self, first: Self::Value, next: Self::Value) -> Self::Value;

    /// Outer bound of the last cell, from the last two values.
    ///
    /// Generally `last + (last - second_last) / 2`.
    fn extend_last_value(&self, last: Self::Value, second_last: Self::Value) -> Self::Value;

    /// The boundary between two adjacent cells.
    fn midpoint(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    /// The value at `index`.
    fn coordinate_value(&self, index: usize) -> EdalResult<Self::Value> {
        self.value_at(index).ok_or(EdalError::IndexOutOfRange {
            index,
            size: self.size(),
        })
    }

    fn minimum_value(&self) -> Self::Value {
        if self.is_ascending() {
            self.first_value()
        } else {
            self.last_value()
        }
    }

    fn maximum_value(&self) -> Self::Value {
        if self.is_ascending() {
            self.last_value()
        } else {
            self.first_value()
        }
    }

    /// Index holding the minimum value.
    fn minimum_index(&self) -> usize {
        if self.is_ascending() {
            0
        } else {
            self.size() - 1
        }
    }

    /// Index holding the maximum value.
    fn maximum_index(&self) -> usize {
        if self.is_ascending() {
            self.size() - 1
        } else {
            0
        }
    }

    /// Combined footprint of all cells.
    ///
    /// A one-value axis has a point extent. Otherwise the bounds are the
    /// extrapolated outer edges of the first and last cells, ordered so that
    /// `low <= high` regardless of the axis direction.
    fn coordinate_extent(&self) -> Extent<Self::Value> {
        let first = self.first_value();
        let last = self.last_value();
        let n = self.size();
        if n < 2 {
            return Extent::from_unordered(first, last);
        }
        let (Some(second), Some(second_last)) = (self.value_at(1), self.value_at(n - 2)) else {
            return Extent::from_unordered(first, last);
        };
        Extent::from_unordered(
            self.extend_first_value(first, second),
            self.extend_last_value(last, second_last),
        )
    }

    /// Footprint of the cell at `index`.
    fn coordinate_bounds(&self, index: usize) -> EdalResult<Extent<Self::Value>> {
        let value = self.coordinate_value(index)?;
        let n = self.size();
        if n == 1 {
            return Ok(Extent::point(value));
        }

        let towards_first = if index == 0 {
            self.extend_first_value(value, self.coordinate_value(1)?)
        } else {
            self.midpoint(self.coordinate_value(index - 1)?, value)
        };
        let towards_last = if index == n - 1 {
            self.extend_last_value(value, self.coordinate_value(n - 2)?)
        } else {
            self.midpoint(value, self.coordinate_value(index + 1)?)
        };

        Ok(Extent::from_unordered(towards_first, towards_last))
    }

    /// Index of the cell whose bounds contain `value`, or `None` when the
    /// value lies outside the coordinate extent.
    fn find_index_of(&self, value: Self::Value) -> Option<usize> {
        search_cells(self, value)
    }

    /// Index lookup with out-of-range values clamped to the nearest end.
    ///
    /// Values below the extent map to the minimum-value index and values
    /// above it to the maximum-value index. Values inside the extent are
    /// resolved without any periodic wrapping.
    fn nearest_index_clamped(&self, value: Self::Value) -> usize {
        let extent = self.coordinate_extent();
        if value > extent.high() {
            return self.maximum_index();
        }
        // also catches unordered values such as NaN
        if !(value >= extent.low()) {
            return self.minimum_index();
        }
        search_cells(self, value).unwrap_or_else(|| self.minimum_index())
    }

    /// Lazy view over all coordinate values in index order.
    fn coordinate_values(&self) -> CoordinateValues<'_, Self>
    where
        Self: Sized,
    {
        CoordinateValues::new(self)
    }
}

/// Binary search for the cell containing `value`.
///
/// Ties on a shared boundary resolve to the cell with the larger value.
pub(crate) fn search_cells<A>(axis: &A, value: A::Value) -> Option<usize>
where
    A: ReferenceableAxis + ?Sized,
{
    if !axis.coordinate_extent().contains(&value) {
        return None;
    }
    let n = axis.size();
    if n == 1 {
        return Some(0);
    }

    // First index whose value is not "before" the target along the axis
    let ascending = axis.is_ascending();
    let (mut lo, mut hi) = (0usize, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let v = axis.value_at(mid)?;
        let before = if ascending { v < value } else { v > value };
        if before {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    let contains = |index: usize| {
        axis.coordinate_bounds(index)
            .map(|bounds| bounds.contains(&value))
            .unwrap_or(false)
    };

    // Ascending: `lo` holds the larger value. Descending: `lo - 1` does.
    let (preferred, other) = if ascending {
        (Some(lo).filter(|&i| i < n), lo.checked_sub(1))
    } else {
        (lo.checked_sub(1), Some(lo).filter(|&i| i < n))
    };
    [preferred, other]
        .into_iter()
        .flatten()
        .find(|&index| contains(index))
}

/// Iterator over the coordinate values of an axis, by index.
#[derive(Debug, Clone)]
pub struct CoordinateValues<'a, A: ReferenceableAxis> {
    axis: &'a A,
    front: usize,
    back: usize,
    _marker: PhantomData<A::Value>,
}

impl<'a, A: ReferenceableAxis> CoordinateValues<'a, A> {
    fn new(axis: &'a A) -> Self {
        Self {
            axis,
            front: 0,
            back: axis.size(),
            _marker: PhantomData,
        }
    }
}

impl<A: ReferenceableAxis> Iterator for CoordinateValues<'_, A> {
    type Item = A::Value;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let value = self.axis.value_at(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl<A: ReferenceableAxis> DoubleEndedIterator for CoordinateValues<'_, A> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.axis.value_at(self.back)
    }
}

impl<A: ReferenceableAxis> ExactSizeIterator for CoordinateValues<'_, A> {}
