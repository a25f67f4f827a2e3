//! Aggregate statistics over a Series.
//!
//! Empty-input policy:
//!   - `mean`, `average_deviation` and `mode` return [`Error::EmptyInput`].
//!   - `min`, `max`, `bounds`, `non_zero_bounds` and `range` return the
//!     zero sentinel; use `min_index` / `max_index` to tell an empty
//!     series apart from one whose extremum is zero.
//!   - `sum` is zero and `product` is zero.

use super::Series;
use crate::count::{CountMap, FloatKey, ValueMap};
use crate::error::{Error, Result};
use crate::scalar;
use crate::topk::TopK;

impl Series {
    /// Sum of all values
    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Product of all values (zero for an empty series)
    pub fn product(&self) -> f64 {
        self.iter().reduce(|acc, v| acc * v).unwrap_or(0.0)
    }

    /// Arithmetic mean of all values
    ///
    /// # Examples
    ///
    /// ```
    /// use sam_core::{Error, Series};
    ///
    /// let s = Series::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(s.mean().unwrap(), 2.5);
    /// assert!(matches!(Series::new().mean(), Err(Error::EmptyInput(_))));
    /// ```
    pub fn mean(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyInput("mean of an empty series"));
        }
        Ok(self.sum() / self.len() as f64)
    }

    /// Mean absolute deviation from the mean
    pub fn average_deviation(&self) -> Result<f64> {
        let mean = self.mean()?;
        let total: f64 = self.iter().map(|v| (v - mean).abs()).sum();
        Ok(total / self.len() as f64)
    }

    /// Smallest value, or `0.0` for an empty series
    pub fn min(&self) -> f64 {
        self.min_index().map_or(0.0, |(_, v)| v)
    }

    /// Index and value of the smallest value (first occurrence wins)
    pub fn min_index(&self) -> Option<(usize, f64)> {
        scalar::min_index(self.as_slice())
    }

    /// Largest value, or `0.0` for an empty series
    pub fn max(&self) -> f64 {
        self.max_index().map_or(0.0, |(_, v)| v)
    }

    /// Index and value of the largest value (first occurrence wins)
    pub fn max_index(&self) -> Option<(usize, f64)> {
        scalar::max_index(self.as_slice())
    }

    /// `(min, max)` found in one pass; `(0.0, 0.0)` for an empty series
    pub fn bounds(&self) -> (f64, f64) {
        scalar::bounds(self.as_slice()).unwrap_or((0.0, 0.0))
    }

    /// `(min, max)` over the non-zero values only
    ///
    /// Returns `(0.0, 0.0)` when every value is zero (or the series is
    /// empty).
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[0.0, 3.0, 0.0, -2.0, 7.0]);
    /// assert_eq!(s.non_zero_bounds(), (-2.0, 7.0));
    /// assert_eq!(Series::from_slice(&[0.0, 0.0]).non_zero_bounds(), (0.0, 0.0));
    /// ```
    pub fn non_zero_bounds(&self) -> (f64, f64) {
        if self.is_zeroed() {
            return (0.0, 0.0);
        }
        scalar::bounds(self.non_zero_values().as_slice()).unwrap_or((0.0, 0.0))
    }

    /// Absolute difference between the largest and smallest value
    pub fn range(&self) -> f64 {
        let (min, max) = self.bounds();
        (max - min).abs()
    }

    /// New series holding only the values that are not exactly zero
    pub fn non_zero_values(&self) -> Series {
        self.iter().filter(|&v| v != 0.0).collect()
    }

    /// `true` when every value is exactly zero (vacuously for empty input)
    pub fn is_zeroed(&self) -> bool {
        self.iter().all(|v| v == 0.0)
    }

    /// `true` iff more than half of the values are exactly zero
    ///
    /// An empty series has no majority and returns `false`.
    pub fn majority_zero(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let zeros = self.iter().filter(|&v| v == 0.0).count();
        zeros as f64 / self.len() as f64 > 0.5
    }

    /// `true` when no value is below zero (zeros are allowed)
    pub fn strictly_positive(&self) -> bool {
        self.iter().all(|v| v >= 0.0)
    }

    /// `true` when every value is below zero
    ///
    /// Unlike [`strictly_positive`](Self::strictly_positive), a zero value
    /// violates this test.
    pub fn strictly_negative(&self) -> bool {
        self.iter().all(|v| v < 0.0)
    }

    /// Occurrence count of every distinct value, in first-seen order
    pub fn counts(&self) -> CountMap<FloatKey> {
        self.iter().map(FloatKey::new).collect()
    }

    /// Most frequent value
    ///
    /// Ties resolve to the value seen first in the series.
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[2.0, 1.0, 1.0, 2.0, 3.0]);
    /// assert_eq!(s.mode().unwrap(), 2.0);
    /// ```
    pub fn mode(&self) -> Result<f64> {
        self.counts()
            .max()
            .map(|(key, _)| key.value())
            .ok_or(Error::EmptyInput("mode of an empty series"))
    }

    /// The `k` largest values, reported in their original order
    ///
    /// Runs in O(n·k) time and O(k) space. A value equal to the current
    /// smallest retained value does not displace it, so earlier values
    /// win ties.
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[1.0, 5.0, 3.0, 5.0, 2.0]);
    /// assert_eq!(s.top_k(3).as_slice(), &[5.0, 3.0, 5.0]);
    /// assert!(s.top_k(0).is_empty());
    /// ```
    pub fn top_k(&self, k: usize) -> Series {
        let mut selector = TopK::new(k);
        for (i, v) in self.iter().enumerate() {
            selector.offer(i, v);
        }
        selector.into_vec().into_iter().map(|(_, v)| v).collect()
    }

    /// The `k` largest values keyed by their index in the series
    pub fn top_k_indexed(&self, k: usize) -> ValueMap<usize> {
        let mut selector = TopK::new(k);
        for (i, v) in self.iter().enumerate() {
            selector.offer(i, v);
        }
        selector.into_vec().into_iter().collect()
    }
}
