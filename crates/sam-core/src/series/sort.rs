//! Sorting, the external-sort contract, median, and parallel key sorting.

use super::Series;
use crate::error::{Error, Result};
use crate::scalar::Scalar;
use std::cmp::Ordering;

/// Sort order for sorting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest first).
    Increasing,
    /// Sort in descending order (largest first).
    Decreasing,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Increasing => ord,
            SortOrder::Decreasing => ord.reverse(),
        }
    }
}

impl Series {
    /// `true` when the value at `i` orders before the value at `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    /// Exchange the values at `i` and `j`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.as_slice_mut().swap(i, j);
    }

    /// Sort the values in place using IEEE total ordering
    pub fn sort(&mut self, order: SortOrder) {
        self.as_slice_mut()
            .sort_by(|a, b| order.apply(a.total_cmp(b)));
    }

    /// Sorted copy of the series
    pub fn sorted(&self, order: SortOrder) -> Series {
        let mut out = self.clone();
        out.sort(order);
        out
    }

    /// Upper median: the value at position `len / 2` of the sorted values
    ///
    /// Returns `(position, value)` where `position` indexes the sorted
    /// order. The receiver is not reordered.
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[9.0, 1.0, 5.0, 3.0]);
    /// assert_eq!(s.median(), Some((2, 5.0)));
    /// assert_eq!(Series::new().median(), None);
    /// ```
    pub fn median(&self) -> Option<(usize, f64)> {
        if self.is_empty() {
            return None;
        }
        let sorted = self.sorted(SortOrder::Increasing);
        let index = sorted.len() / 2;
        sorted.get(index).map(|v| (index, v))
    }
}

/// Reorder `dependent` by the values of `independent`, moving both slices.
///
/// The sort is stable: entries with equal keys keep their relative order.
/// A NaN key is rejected with [`Error::InvalidParameter`] and nothing moves.
///
/// # Examples
///
/// ```
/// use sam_core::{SortOrder, sort_by_key};
///
/// let mut names = vec!["b", "c", "a"];
/// let mut scores = vec![2.0, 3.0, 1.0];
/// sort_by_key(&mut names, &mut scores, SortOrder::Decreasing).unwrap();
/// assert_eq!(names, ["c", "b", "a"]);
/// assert_eq!(scores, [3.0, 2.0, 1.0]);
/// ```
pub fn sort_by_key<D, K: Scalar>(
    dependent: &mut [D],
    independent: &mut [K],
    order: SortOrder,
) -> Result<()> {
    if dependent.len() != independent.len() {
        return Err(Error::LengthMismatch {
            expected: independent.len(),
            actual: dependent.len(),
        });
    }
    if let Some(i) = independent.iter().position(|k| k.partial_cmp(k).is_none()) {
        return Err(Error::InvalidParameter(format!(
            "unordered sort key at index {i}"
        )));
    }

    let mut perm: Vec<usize> = (0..independent.len()).collect();
    perm.sort_by(|&a, &b| {
        let ord = independent[a]
            .partial_cmp(&independent[b])
            .unwrap_or(Ordering::Equal);
        order.apply(ord)
    });

    apply_permutation(dependent, &perm);
    apply_permutation(independent, &perm);
    Ok(())
}

/// Rearrange `data` in place so that `data[i]` becomes the old `data[perm[i]]`.
fn apply_permutation<T>(data: &mut [T], perm: &[usize]) {
    for i in 0..perm.len() {
        // Follow the cycle back to the slot the source element now lives in.
        let mut j = perm[i];
        while j < i {
            j = perm[j];
        }
        data.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_less_swap() {
        let mut s = Series::from_slice(&[3.0, 1.0]);
        assert!(!s.less(0, 1));
        s.swap(0, 1);
        assert!(s.less(0, 1));
        assert_eq!(s.as_slice(), &[1.0, 3.0]);
    }

    #[test]
    fn test_sort_orders() {
        let s = Series::from_slice(&[3.0, -1.0, 2.0]);
        assert_eq!(s.sorted(SortOrder::Increasing).as_slice(), &[-1.0, 2.0, 3.0]);
        assert_eq!(s.sorted(SortOrder::Decreasing).as_slice(), &[3.0, 2.0, -1.0]);
    }

    #[test]
    fn test_median_leaves_receiver() {
        let s = Series::from_slice(&[4.0, 2.0, 8.0]);
        assert_eq!(s.median(), Some((1, 4.0)));
        assert_eq!(s.as_slice(), &[4.0, 2.0, 8.0]);
    }

    #[test]
    fn test_sort_by_int_key_stable() {
        let mut words = vec!["x", "y", "z", "w"];
        let mut keys = vec![2i32, 1, 2, 0];
        sort_by_key(&mut words, &mut keys, SortOrder::Increasing).unwrap();
        assert_eq!(words, ["w", "y", "x", "z"]);
        assert_eq!(keys, [0, 1, 2, 2]);
    }

    #[test]
    fn test_sort_by_key_length_mismatch() {
        let mut words = vec!["a"];
        let mut keys = vec![1.0f64, 2.0];
        assert_eq!(
            sort_by_key(&mut words, &mut keys, SortOrder::Increasing),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_sort_by_key_rejects_nan() {
        let mut words = vec!["a", "b"];
        let mut keys = vec![1.0f64, f64::NAN];
        assert!(matches!(
            sort_by_key(&mut words, &mut keys, SortOrder::Decreasing),
            Err(Error::InvalidParameter(_))
        ));
        assert_eq!(words, ["a", "b"]);
    }

    #[test]
    fn test_apply_permutation_cycle() {
        let mut data = vec!['a', 'b', 'c', 'd'];
        apply_permutation(&mut data, &[2, 0, 3, 1]);
        assert_eq!(data, ['c', 'a', 'd', 'b']);
    }
}
