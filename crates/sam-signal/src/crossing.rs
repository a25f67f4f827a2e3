//! Crossing and hitting rates
//!
//! A crossing is an adjacent pair that lies strictly on opposite sides of a
//! reference level; touching the level does not count. Rates are the number
//! of crossings (or hits) divided by the series length.
//!
//! Every rate reports [`SignalError::EmptyInput`] for an empty series.

use crate::error::{SignalError, SignalResult};
use sam_core::Series;

/// Which zero statistic [`zeroing_rate`] reports for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroingMode {
    /// Mixed signs: count sign changes
    Crossing,
    /// One-signed: count exact zeros
    Hitting,
}

fn ensure_non_empty(series: &Series, what: &'static str) -> SignalResult<()> {
    if series.is_empty() {
        return Err(SignalError::EmptyInput(what));
    }
    Ok(())
}

fn crossings(values: &[f64], level: f64) -> usize {
    values
        .windows(2)
        .filter(|w| (w[0] < level && w[1] > level) || (w[0] > level && w[1] < level))
        .count()
}

fn is_one_signed(series: &Series) -> bool {
    series.strictly_positive() || series.strictly_negative()
}

/// Fraction of adjacent pairs that cross the series mean
///
/// # Examples
///
/// ```
/// use sam_core::Series;
/// use sam_signal::mean_crossing_rate;
///
/// let s = Series::from_slice(&[0.0, 2.0, 0.0, 2.0]);
/// assert_eq!(mean_crossing_rate(&s).unwrap(), 0.75);
/// ```
pub fn mean_crossing_rate(series: &Series) -> SignalResult<f64> {
    ensure_non_empty(series, "mean crossing rate of an empty series")?;
    let mean = series.mean()?;
    Ok(crossings(series.as_slice(), mean) as f64 / series.len() as f64)
}

/// Fraction of adjacent pairs that change sign
///
/// Zero for a one-signed series.
pub fn zero_crossing_rate(series: &Series) -> SignalResult<f64> {
    ensure_non_empty(series, "zero crossing rate of an empty series")?;
    if is_one_signed(series) {
        return Ok(0.0);
    }
    Ok(crossings(series.as_slice(), 0.0) as f64 / series.len() as f64)
}

/// Fraction of values exactly equal to zero
///
/// Only meaningful for one-signed data; a mixed-sign series reports zero.
pub fn zero_hitting_rate(series: &Series) -> SignalResult<f64> {
    ensure_non_empty(series, "zero hitting rate of an empty series")?;
    if !is_one_signed(series) {
        return Ok(0.0);
    }
    let hits = series.iter().filter(|&v| v == 0.0).count();
    Ok(hits as f64 / series.len() as f64)
}

/// Choose the zero statistic that is observable for `series`
pub fn zeroing_mode(series: &Series) -> ZeroingMode {
    if is_one_signed(series) {
        ZeroingMode::Hitting
    } else {
        ZeroingMode::Crossing
    }
}

/// Hitting rate for one-signed data, crossing rate otherwise
pub fn zeroing_rate(series: &Series) -> SignalResult<f64> {
    let mode = zeroing_mode(series);
    tracing::trace!(len = series.len(), ?mode, "zeroing rate dispatch");
    match mode {
        ZeroingMode::Hitting => zero_hitting_rate(series),
        ZeroingMode::Crossing => zero_crossing_rate(series),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_crossing_rate() {
        // mean 2.5
        let s = Series::from_slice(&[1.0, 4.0, 2.0, 3.0]);
        assert_eq!(mean_crossing_rate(&s).unwrap(), 0.75);
        let flat = Series::from_slice(&[2.0, 2.0]);
        assert_eq!(mean_crossing_rate(&flat).unwrap(), 0.0);
    }

    #[test]
    fn test_touching_zero_is_not_crossing() {
        let s = Series::from_slice(&[-1.0, 0.0, 1.0, -1.0]);
        assert_eq!(zero_crossing_rate(&s).unwrap(), 0.25);
    }

    #[test]
    fn test_one_signed_crossing_is_zero() {
        let s = Series::from_slice(&[1.0, 0.0, 2.0]);
        assert_eq!(zero_crossing_rate(&s).unwrap(), 0.0);
        assert!((zero_hitting_rate(&s).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_mixed_sign_hitting_is_zero() {
        let s = Series::from_slice(&[-1.0, 0.0, 1.0]);
        assert_eq!(zero_hitting_rate(&s).unwrap(), 0.0);
    }

    #[test]
    fn test_zeroing_rate_dispatch() {
        let positive = Series::from_slice(&[0.0, 3.0, 0.0, 1.0]);
        assert_eq!(zeroing_mode(&positive), ZeroingMode::Hitting);
        assert_eq!(zeroing_rate(&positive).unwrap(), 0.5);

        let mixed = Series::from_slice(&[1.0, -1.0, 1.0, -1.0]);
        assert_eq!(zeroing_mode(&mixed), ZeroingMode::Crossing);
        assert_eq!(zeroing_rate(&mixed).unwrap(), 0.75);
    }

    #[test]
    fn test_empty_series_is_error() {
        let empty = Series::new();
        let rates: [fn(&Series) -> SignalResult<f64>; 4] = [
            mean_crossing_rate,
            zero_crossing_rate,
            zero_hitting_rate,
            zeroing_rate,
        ];
        for rate in rates {
            assert!(matches!(rate(&empty), Err(SignalError::EmptyInput(_))));
        }
    }
}
