//! Dense, shape-checked containers for domain objects and data values.
//!
//! Both containers iterate in a fixed order (index order for `Array1D`,
//! row-major for `Array2D`) so that values can be zipped positionally
//! against the domain they were sampled on.

use edal_common::{EdalError, EdalResult};

/// A one-dimensional array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array1D<T> {
    data: Vec<T>,
}

impl<T> Array1D<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn shape(&self) -> [usize; 1] {
        [self.data.len()]
    }

    /// Get the element at `index`.
    pub fn get(&self, index: usize) -> EdalResult<&T> {
        self.data.get(index).ok_or(EdalError::IndexOutOfRange {
            index,
            size: self.data.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> FromIterator<T> for Array1D<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array1D<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array1D<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// A two-dimensional array indexed `[y][x]`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2D<T> {
    y_size: usize,
    x_size: usize,
    data: Vec<T>,
}

impl<T> Array2D<T> {
    /// Wrap row-major data, checking it matches the shape.
    pub fn from_vec(y_size: usize, x_size: usize, data: Vec<T>) -> EdalResult<Self> {
        let expected = y_size.checked_mul(x_size).ok_or_else(|| {
            EdalError::construction(format!("shape {y_size}x{x_size} overflows"))
        })?;
        if data.len() != expected {
            return Err(EdalError::construction(format!(
                "{} values do not fill a {}x{} array",
                data.len(),
                y_size,
                x_size
            )));
        }
        Ok(Self {
            y_size,
            x_size,
            data,
        })
    }

    /// Build an array by evaluating `f(y, x)` in row-major order.
    pub fn from_fn(y_size: usize, x_size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(y_size * x_size);
        for y in 0..y_size {
            for x in 0..x_size {
                data.push(f(y, x));
            }
        }
        Self {
            y_size,
            x_size,
            data,
        }
    }

    /// A 0x0 array.
    pub fn empty() -> Self {
        Self {
            y_size: 0,
            x_size: 0,
            data: Vec::new(),
        }
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    /// Shape as `[y_size, x_size]`.
    pub fn shape(&self) -> [usize; 2] {
        [self.y_size, self.x_size]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the element at row `y`, column `x`.
    pub fn get(&self, y: usize, x: usize) -> EdalResult<&T> {
        if y >= self.y_size {
            return Err(EdalError::IndexOutOfRange {
                index: y,
                size: self.y_size,
            });
        }
        if x >= self.x_size {
            return Err(EdalError::IndexOutOfRange {
                index: x,
                size: self.x_size,
            });
        }
        Ok(&self.data[y * self.x_size + x])
    }

    /// Borrow row `y`.
    pub fn row(&self, y: usize) -> EdalResult<&[T]> {
        if y >= self.y_size {
            return Err(EdalError::IndexOutOfRange {
                index: y,
                size: self.y_size,
            });
        }
        let start = y * self.x_size;
        Ok(&self.data[start..start + self.x_size])
    }

    /// Row-major iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Row-major iteration with `(y, x)` indices.
    pub fn indexed_iter(&self) -> impl Iterator<Item = ((usize, usize), &T)> + '_ {
        let x_size = self.x_size;
        self.data
            .iter()
            .enumerate()
            .map(move |(k, v)| ((k / x_size, k % x_size), v))
    }

    /// Apply `f` to every element, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array2D<U> {
        Array2D {
            y_size: self.y_size,
            x_size: self.x_size,
            data: self.data.iter().map(f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a Array2D<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array1d_get() {
        let a = Array1D::new(vec![1, 2, 3]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.shape(), [3]);
        assert_eq!(*a.get(2).unwrap(), 3);
        assert_eq!(
            a.get(3).unwrap_err(),
            EdalError::IndexOutOfRange { index: 3, size: 3 }
        );
    }

    #[test]
    fn test_array1d_empty_is_valid() {
        let a: Array1D<f64> = Array1D::default();
        assert!(a.is_empty());
        assert_eq!(a.iter().count(), 0);
    }

    #[test]
    fn test_array2d_shape_check() {
        assert!(Array2D::from_vec(2, 3, vec![0; 6]).is_ok());
        assert!(matches!(
            Array2D::from_vec(2, 3, vec![0; 5]),
            Err(EdalError::Construction(_))
        ));
    }

    #[test]
    fn test_array2d_row_major() {
        let a = Array2D::from_fn(2, 3, |y, x| y * 10 + x);
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(*a.get(1, 2).unwrap(), 12);
        assert_eq!(a.row(1).unwrap(), &[10, 11, 12]);
        assert!(a.get(2, 0).is_err());
        assert!(a.get(0, 3).is_err());

        let indexed: Vec<_> = a.indexed_iter().map(|(idx, v)| (idx, *v)).collect();
        assert_eq!(indexed[4], ((1, 1), 11));
    }

    #[test]
    fn test_array2d_map() {
        let a = Array2D::from_fn(2, 2, |y, x| (y + x) as f64);
        let b = a.map(|v| v * 2.0);
        assert_eq!(b.shape(), [2, 2]);
        assert_eq!(*b.get(1, 1).unwrap(), 4.0);
    }
}
