//! Threshold selection: which values lie above, below or at a level.

use super::Series;

/// Values of a series that satisfy a threshold test.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    /// Indices of the matching values, ascending.
    pub indices: Vec<usize>,
    /// Number of matching values.
    pub count: usize,
    /// `count / len`; zero for an empty series.
    pub fraction: f64,
}

impl Series {
    /// Values strictly greater than `threshold`
    ///
    /// ```
    /// use sam_core::Series;
    ///
    /// let s = Series::from_slice(&[1.0, 4.0, 2.0, 8.0]);
    /// let sel = s.greater_than(2.0);
    /// assert_eq!(sel.indices, vec![1, 3]);
    /// assert_eq!(sel.fraction, 0.5);
    /// ```
    pub fn greater_than(&self, threshold: f64) -> Selection {
        self.select_where(|v| v > threshold)
    }

    /// Values strictly less than `threshold`
    pub fn less_than(&self, threshold: f64) -> Selection {
        self.select_where(|v| v < threshold)
    }

    /// Values exactly equal to `target`
    pub fn equal_to(&self, target: f64) -> Selection {
        self.select_where(|v| v == target)
    }

    fn select_where(&self, pred: impl Fn(f64) -> bool) -> Selection {
        let indices: Vec<usize> = self
            .iter()
            .enumerate()
            .filter(|&(_, v)| pred(v))
            .map(|(i, _)| i)
            .collect();
        let count = indices.len();
        let fraction = if self.is_empty() {
            0.0
        } else {
            count as f64 / self.len() as f64
        };
        Selection {
            indices,
            count,
            fraction,
        }
    }
}
