//! Rescaling transforms.
//!
//! Both transforms are pure: the receiver is left untouched and the scaled
//! values come back in a result struct together with the parameters that
//! were applied, so the caller can invert them.

use super::Series;

/// Result of [`Series::rescale_to_unit_interval`].
#[derive(Debug, Clone, PartialEq)]
pub struct RescaleResult {
    /// The rescaled values, each in `[0, 1]`.
    pub values: Series,
    /// Minimum of the source series (maps to 0.0).
    pub min: f64,
    /// Maximum of the source series (maps to 1.0).
    pub max: f64,
}

/// Result of [`Series::shift_and_log_scale`].
#[derive(Debug, Clone, PartialEq)]
pub struct LogScaleResult {
    /// `ln(value + shift)` for every source value.
    pub values: Series,
    /// Offset added before taking the logarithm; zero when the source
    /// minimum was already positive.
    pub shift: f64,
}

impl Series {
    /// Map every value to `(value - min) / (max - min)`.
    ///
    /// A constant series (`max == min`) maps to all zeros instead of
    /// dividing by zero. An empty series yields an empty result with
    /// `min == max == 0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[2.0, 4.0, 6.0]);
    /// let r = s.rescale_to_unit_interval();
    /// assert_eq!(r.values.as_slice(), &[0.0, 0.5, 1.0]);
    /// assert_eq!((r.min, r.max), (2.0, 6.0));
    /// ```
    pub fn rescale_to_unit_interval(&self) -> RescaleResult {
        let (min, max) = self.bounds();
        let span = max - min;
        let values = if span == 0.0 {
            tracing::debug!(len = self.len(), min, "constant series rescaled to zeros");
            self.iter().map(|_| 0.0).collect()
        } else {
            self.iter().map(|v| (v - min) / span).collect()
        };
        RescaleResult { values, min, max }
    }

    /// Shift the series to be positive when needed, then take `ln`.
    ///
    /// If the minimum is `<= 0` the shift is `1 - min`, which moves the
    /// minimum to exactly 1.0 (and so to 0.0 after the logarithm).
    /// Otherwise no shift is applied: values in `(0, 1)` still
    /// log-transform to negative numbers.
    pub fn shift_and_log_scale(&self) -> LogScaleResult {
        let min = self.min();
        let shift = if min <= 0.0 { (0.0 - min) + 1.0 } else { 0.0 };
        if shift != 0.0 {
            tracing::debug!(min, shift, "shifting series before log scaling");
        }
        let values = self.iter().map(|v| (v + shift).ln()).collect();
        LogScaleResult { values, shift }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_maps_extremes() {
        let s = Series::from_slice(&[5.0, -3.0, 1.0, 13.0]);
        let r = s.rescale_to_unit_interval();
        assert_eq!(r.values.get(1), Some(0.0));
        assert_eq!(r.values.get(3), Some(1.0));
        assert_eq!(r.values.get(2), Some(0.25));
        // source is unchanged
        assert_eq!(s.get(0), Some(5.0));
    }

    #[test]
    fn test_rescale_constant_is_zeros() {
        let r = Series::from_slice(&[7.0, 7.0, 7.0]).rescale_to_unit_interval();
        assert_eq!(r.values.as_slice(), &[0.0, 0.0, 0.0]);
        assert!(r.values.iter().all(|v| !v.is_nan()));
    }

    #[test]
    fn test_rescale_empty() {
        let r = Series::new().rescale_to_unit_interval();
        assert!(r.values.is_empty());
    }

    #[test]
    fn test_log_scale_with_shift() {
        let s = Series::from_slice(&[-2.0, 0.0, 1.0]);
        let r = s.shift_and_log_scale();
        assert_eq!(r.shift, 3.0);
        assert_eq!(r.values.get(0), Some(0.0));
        assert!((r.values[1] - 3.0f64.ln()).abs() < 1e-12);
        assert!((r.values[2] - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_log_scale_positive_no_shift() {
        let s = Series::from_slice(&[0.5, 1.0, std::f64::consts::E]);
        let r = s.shift_and_log_scale();
        assert_eq!(r.shift, 0.0);
        assert!(r.values[0] < 0.0);
        assert_eq!(r.values[1], 0.0);
        assert!((r.values[2] - 1.0).abs() < 1e-12);
    }
}
