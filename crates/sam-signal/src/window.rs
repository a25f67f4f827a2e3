//! Fixed-length windows over a series
//!
//! Windows skip a lead-in of `length + stride` values: the first window
//! starts at that index and each later one starts `stride` further on. A
//! window is produced only while it fits entirely inside the series.

use crate::error::{SignalError, SignalResult};
use sam_core::Series;

/// Lazy iterator over contiguous windows of a series
///
/// Created by [`windows`], [`consecutive_windows`] and
/// [`overlapping_windows`].
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    values: &'a [f64],
    length: usize,
    stride: usize,
    start: usize,
}

impl<'a> Windows<'a> {
    fn new(values: &'a [f64], length: usize, stride: usize) -> SignalResult<Self> {
        if length == 0 {
            return Err(SignalError::InvalidParameters(
                "window length must be > 0".to_string(),
            ));
        }
        if stride == 0 {
            return Err(SignalError::InvalidParameters(
                "window stride must be > 0".to_string(),
            ));
        }
        Ok(Self {
            values,
            length,
            stride,
            start: length.saturating_add(stride),
        })
    }

    /// Window length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Distance between successive window starts
    pub fn stride(&self) -> usize {
        self.stride
    }

    fn remaining(&self) -> usize {
        match self.start.checked_add(self.length) {
            Some(end) if end <= self.values.len() => {
                (self.values.len() - end) / self.stride + 1
            }
            _ => 0,
        }
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = &'a [f64];

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.start.checked_add(self.length)?;
        let window = self.values.get(self.start..end)?;
        self.start = self.start.saturating_add(self.stride);
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Windows<'_> {}

/// Windows of `length` values whose starts are `stride` apart
///
/// Returns [`SignalError::InvalidParameters`] if `length` or `stride` is
/// zero.
///
/// # Examples
///
/// ```
/// use sam_core::Series;
/// use sam_signal::windows;
///
/// let s: Series = (0..10).map(f64::from).collect();
/// let w: Vec<&[f64]> = windows(&s, 2, 1).unwrap().collect();
/// assert_eq!(w.first(), Some(&&[3.0, 4.0][..]));
/// assert_eq!(w.last(), Some(&&[8.0, 9.0][..]));
/// assert_eq!(w.len(), 6);
/// ```
pub fn windows(series: &Series, length: usize, stride: usize) -> SignalResult<Windows<'_>> {
    Windows::new(series.as_slice(), length, stride)
}

/// Non-overlapping windows (`stride == length`)
pub fn consecutive_windows(series: &Series, length: usize) -> SignalResult<Windows<'_>> {
    windows(series, length, length)
}

/// Windows advancing one value at a time (`stride == 1`)
pub fn overlapping_windows(series: &Series, length: usize) -> SignalResult<Windows<'_>> {
    windows(series, length, 1)
}
