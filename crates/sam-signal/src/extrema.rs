//! Local extrema detection and inter-extrema distances
//!
//! An interior index `i` is a peak when its value is strictly greater than
//! both neighbours and a valley when strictly smaller. The first and last
//! indices are never extrema, and a flat plateau produces none.

use sam_core::Series;
use std::collections::BTreeMap;

/// Extremum positions mapped to their values, in ascending index order
pub type ExtremaMap = BTreeMap<usize, f64>;

/// Kind of local extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtremumKind {
    /// Strictly above both neighbours
    Peak,
    /// Strictly below both neighbours
    Valley,
}

/// Classify the interior index `i` of `values`
fn classify(values: &[f64], i: usize) -> Option<ExtremumKind> {
    if i == 0 || i + 1 >= values.len() {
        return None;
    }
    let (prev, cur, next) = (values[i - 1], values[i], values[i + 1]);
    if cur > prev && cur > next {
        Some(ExtremumKind::Peak)
    } else if cur < prev && cur < next {
        Some(ExtremumKind::Valley)
    } else {
        None
    }
}

/// Indices of extrema matching `want` (any kind when `None`)
fn extremum_indices(series: &Series, want: Option<ExtremumKind>) -> Vec<usize> {
    let values = series.as_slice();
    (1..values.len().saturating_sub(1))
        .filter(|&i| match classify(values, i) {
            Some(kind) => want.is_none_or(|w| w == kind),
            None => false,
        })
        .collect()
}

fn collect_map(series: &Series, indices: Vec<usize>) -> ExtremaMap {
    indices.into_iter().map(|i| (i, series[i])).collect()
}

/// Successive differences of an ascending index list
fn distances(indices: &[usize]) -> Series {
    indices.windows(2).map(|w| (w[1] - w[0]) as f64).collect()
}

/// Local peaks keyed by index
///
/// # Examples
///
/// ```
/// use sam_core::Series;
/// use sam_signal::peaks;
///
/// let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
/// let p = peaks(&s);
/// assert_eq!(p.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(p[&3], 8.0);
/// ```
pub fn peaks(series: &Series) -> ExtremaMap {
    collect_map(series, extremum_indices(series, Some(ExtremumKind::Peak)))
}

/// Local valleys keyed by index
pub fn valleys(series: &Series) -> ExtremaMap {
    collect_map(series, extremum_indices(series, Some(ExtremumKind::Valley)))
}

/// Peaks and valleys together, keyed by index
pub fn extrema(series: &Series) -> ExtremaMap {
    collect_map(series, extremum_indices(series, None))
}

/// Number of local peaks
pub fn peak_count(series: &Series) -> usize {
    extremum_indices(series, Some(ExtremumKind::Peak)).len()
}

/// Number of local valleys
pub fn valley_count(series: &Series) -> usize {
    extremum_indices(series, Some(ExtremumKind::Valley)).len()
}

/// Number of local peaks and valleys
pub fn extrema_count(series: &Series) -> usize {
    extremum_indices(series, None).len()
}

/// Index gaps between successive peaks
///
/// The result has one element fewer than the number of peaks, and is
/// empty when there are fewer than two.
pub fn peak_distances(series: &Series) -> Series {
    distances(&extremum_indices(series, Some(ExtremumKind::Peak)))
}

/// Index gaps between successive valleys
pub fn valley_distances(series: &Series) -> Series {
    distances(&extremum_indices(series, Some(ExtremumKind::Valley)))
}

/// Index gaps between successive extrema of either kind
pub fn extrema_distances(series: &Series) -> Series {
    distances(&extremum_indices(series, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peaks_and_valleys() {
        let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
        assert_eq!(peaks(&s).into_iter().collect::<Vec<_>>(), vec![(1, 5.0), (3, 8.0)]);
        assert_eq!(valleys(&s).into_iter().collect::<Vec<_>>(), vec![(2, 2.0)]);
        assert_eq!(extrema(&s).len(), 3);
        assert_eq!(peak_count(&s), 2);
        assert_eq!(valley_count(&s), 1);
        assert_eq!(extrema_count(&s), 3);
    }

    #[test]
    fn test_distances() {
        let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
        assert_eq!(peak_distances(&s).as_slice(), &[2.0]);
        assert!(valley_distances(&s).is_empty());
        assert_eq!(extrema_distances(&s).as_slice(), &[1.0, 1.0]);
    }

    #[test]
    fn test_plateau_is_not_extremum() {
        let s = Series::from_slice(&[0.0, 2.0, 2.0, 0.0]);
        assert!(extrema(&s).is_empty());
    }

    #[test]
    fn test_short_series() {
        assert!(peaks(&Series::new()).is_empty());
        assert!(peaks(&Series::from_slice(&[1.0])).is_empty());
        assert!(peaks(&Series::from_slice(&[1.0, 2.0])).is_empty());
        assert!(peak_distances(&Series::from_slice(&[1.0, 2.0])).is_empty());
    }
}
