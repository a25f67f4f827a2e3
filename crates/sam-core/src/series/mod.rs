//! Series - Ordered numeric sequences
//!
//! An index-addressable, resizable sequence of `f64` values. Every
//! aggregate, structural and sampling operation in the workspace is
//! defined over a [`Series`].
//!
//! Index order is significant and preserved by all operations except the
//! explicit sorts in [`sort`]. Rescaling returns a new series rather than
//! reassigning the receiver.

mod rescale;
mod select;
mod sort;
mod stats;

pub use rescale::{LogScaleResult, RescaleResult};
pub use select::Selection;
pub use sort::{SortOrder, sort_by_key};

use crate::error::{Error, Result};
use std::any::Any;

/// Ordered sequence of floating-point values
///
/// `Series` wraps a `Vec<f64>` and adds the statistical queries used for
/// summarising one-dimensional, signal-like data.
///
/// # Examples
///
/// ```
/// use sam_core::Series;
///
/// let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
/// assert_eq!(s.len(), 5);
/// assert_eq!(s.max(), 8.0);
/// assert_eq!(s.mean().unwrap(), 3.8);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    data: Vec<f64>,
}

impl Series {
    /// Create a new empty Series
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a Series with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a Series from a vector of values
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Create a Series from a slice of f64 values
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a Series from a slice of i32 values
    ///
    /// Each integer is converted to f64.
    pub fn from_i32_slice(data: &[i32]) -> Self {
        Self {
            data: data.iter().map(|&v| v as f64).collect(),
        }
    }

    /// Get the number of values
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a value by index
    pub fn get(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }

    /// Add a value to the end
    pub fn push(&mut self, val: f64) {
        self.data.push(val);
    }

    /// Remove and return the last value
    pub fn pop(&mut self) -> Option<f64> {
        self.data.pop()
    }

    /// Set a value at index
    pub fn set(&mut self, index: usize, val: f64) -> Result<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = val;
        Ok(())
    }

    /// Insert a value at index, shifting later values right
    pub fn insert(&mut self, index: usize, val: f64) -> Result<()> {
        if index > self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        self.data.insert(index, val);
        Ok(())
    }

    /// Remove a value at index
    pub fn remove(&mut self, index: usize) -> Result<f64> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(self.data.remove(index))
    }

    /// Clear all values
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the underlying data as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get the underlying data as a mutable slice
    pub fn as_slice_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get the underlying vector (consuming self)
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Multiply every value in place by `factor`
    pub fn scale_by(&mut self, factor: f64) {
        for v in self.data.iter_mut() {
            *v *= factor;
        }
    }

    /// Exact, order-sensitive equality against an arbitrary value.
    ///
    /// Returns `false` when `other` is not a `Series`; a type mismatch is
    /// an inequality, not an error.
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let a = Series::from_slice(&[1.0, 2.0]);
    /// assert!(a.equal(&Series::from_slice(&[1.0, 2.0])));
    /// assert!(!a.equal(&vec![1.0f64, 2.0]));
    /// ```
    pub fn equal(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Series>()
            .is_some_and(|s| s.data == self.data)
    }

    /// Check whether both series have the same length and every value of
    /// `self` occurs somewhere in `other` (order ignored).
    pub fn similar_to(&self, other: &Series) -> bool {
        self.len() == other.len() && self.data.iter().all(|&v| other.contains(v))
    }

    /// Check whether `val` occurs in the series (exact comparison)
    pub fn contains(&self, val: f64) -> bool {
        crate::scalar::contains(&self.data, val)
    }

    /// Create an iterator over values
    pub fn iter(&self) -> SeriesIter<'_> {
        SeriesIter {
            series: self,
            index: 0,
        }
    }

    /// Create a mutable iterator over values
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.data.iter_mut()
    }
}

/// Iterator over Series values
pub struct SeriesIter<'a> {
    series: &'a Series,
    index: usize,
}

impl Iterator for SeriesIter<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.series.get(self.index)?;
        self.index += 1;
        Some(val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.series.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SeriesIter<'_> {}

impl<'a> IntoIterator for &'a Series {
    type Item = f64;
    type IntoIter = SeriesIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Series {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<f64>> for Series {
    fn from(data: Vec<f64>) -> Self {
        Self { data }
    }
}

impl std::ops::Index<usize> for Series {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl std::ops::IndexMut<usize> for Series {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
