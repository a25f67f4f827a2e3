//! Bounded top-k selection.
//!
//! [`TopK`] keeps the `k` pairs with the greatest value out of a stream of
//! `(key, value)` pairs in O(n·k) time and O(k) space. It backs
//! [`Series::top_k`](crate::Series::top_k), [`ValueMap::top_k`](crate::ValueMap::top_k),
//! [`CountMap::top_k`](crate::CountMap::top_k) and the mode computation.
//!
//! # Selection policy
//!
//! - While fewer than `k` pairs are held, every offered pair is kept.
//! - Once full, the held pair with the smallest value is found. The
//!   incoming pair replaces it only if its value is strictly greater.
//! - When several held pairs tie for the smallest value, the one that
//!   arrived last is the one evicted.
//!
//! Together these rules mean that among equal values the earliest arrival
//! always wins, so the outcome depends only on the order in which pairs are
//! offered.

/// A retained pair and the order in which it was offered.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    arrival: usize,
    key: K,
    value: V,
}

/// Bounded selector holding the `k` largest values seen so far.
///
/// Retained pairs are kept in arrival order.
///
/// # Examples
///
/// ```
/// use sam_core::TopK;
///
/// let mut top = TopK::new(2);
/// for (key, value) in [("a", 1.0), ("b", 5.0), ("c", 3.0), ("d", 5.0)] {
///     top.offer(key, value);
/// }
/// assert_eq!(top.into_vec(), vec![("b", 5.0), ("d", 5.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct TopK<K, V> {
    capacity: usize,
    entries: Vec<Entry<K, V>>,
    offered: usize,
}

impl<K, V: PartialOrd> TopK<K, V> {
    /// Create a selector that retains at most `capacity` pairs
    ///
    /// Storage grows with the pairs actually retained, so `capacity` may be
    /// arbitrarily large (`usize::MAX` keeps everything).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
            offered: 0,
        }
    }

    /// Maximum number of retained pairs
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of pairs currently retained
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offer a pair; returns `true` if it was retained
    pub fn offer(&mut self, key: K, value: V) -> bool {
        let arrival = self.offered;
        self.offered += 1;

        if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                arrival,
                key,
                value,
            });
            return true;
        }

        let Some(slot) = self.eviction_slot() else {
            return false;
        };
        if value > self.entries[slot].value {
            // Remove-then-push keeps `entries` sorted by arrival.
            self.entries.remove(slot);
            self.entries.push(Entry {
                arrival,
                key,
                value,
            });
            true
        } else {
            false
        }
    }

    /// Position of the held entry to evict: the smallest value, latest
    /// arrival among ties. `None` when nothing is held.
    fn eviction_slot(&self) -> Option<usize> {
        let mut slot: Option<usize> = None;
        for (i, e) in self.entries.iter().enumerate() {
            match slot {
                None => slot = Some(i),
                Some(s) => {
                    let cur = &self.entries[s];
                    if e.value < cur.value || (e.value == cur.value && e.arrival > cur.arrival) {
                        slot = Some(i);
                    }
                }
            }
        }
        slot
    }

    /// Iterate over retained pairs in arrival order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Consume the selector, returning retained pairs in arrival order
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries.into_iter().map(|e| (e.key, e.value)).collect()
    }
}

/// Select the `k` pairs with the greatest value from `pairs`.
///
/// The result is in the order the pairs were produced by the iterator.
/// `k == 0` yields an empty result; `k >= n` returns every pair.
///
/// ```
/// use sam_core::top_k;
///
/// let pairs = [(0, 1.0), (1, 5.0), (2, 3.0), (3, 5.0), (4, 2.0)];
/// let top = top_k(pairs, 3);
/// assert_eq!(top, vec![(1, 5.0), (2, 3.0), (3, 5.0)]);
/// ```
pub fn top_k<K, V, I>(pairs: I, k: usize) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    V: PartialOrd,
{
    if k == 0 {
        tracing::debug!("top_k called with k = 0");
        return Vec::new();
    }
    let mut selector = TopK::new(k);
    for (key, value) in pairs {
        selector.offer(key, value);
    }
    selector.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut top = TopK::new(0);
        assert!(!top.offer(1, 10.0));
        assert!(top.is_empty());
        assert!(top_k([(1, 1.0)], 0).is_empty());
    }

    #[test]
    fn test_capacity_above_len_keeps_all() {
        let pairs = vec![(0, 3.0), (1, 1.0), (2, 2.0)];
        assert_eq!(top_k(pairs.clone(), 3), pairs);
        assert_eq!(top_k(pairs.clone(), 99), pairs);
    }

    #[test]
    fn test_huge_capacity_keeps_all() {
        let pairs = vec![(0, 2.0), (1, 7.0), (2, 1.0)];
        assert_eq!(top_k(pairs.clone(), usize::MAX), pairs);
        assert_eq!(top_k(pairs.clone(), usize::MAX / 2), pairs);
        assert_eq!(top_k(pairs.clone(), 1 << 40), pairs);

        let mut top = TopK::new(usize::MAX);
        assert!(top.offer('a', 1));
        assert_eq!(top.capacity(), usize::MAX);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_equal_to_minimum_is_dropped() {
        let mut top = TopK::new(2);
        top.offer('a', 2);
        top.offer('b', 4);
        assert!(!top.offer('c', 2));
        assert_eq!(top.into_vec(), vec![('a', 2), ('b', 4)]);
    }

    #[test]
    fn test_tied_minimum_evicts_latest_arrival() {
        let mut top = TopK::new(3);
        top.offer("first", 1);
        top.offer("second", 1);
        top.offer("third", 9);
        assert!(top.offer("fourth", 5));
        // "second" arrived after "first", so it goes
        assert_eq!(
            top.into_vec(),
            vec![("first", 1), ("third", 9), ("fourth", 5)]
        );
    }

    #[test]
    fn test_soundness() {
        let values = [4.0, 9.0, 1.0, 7.0, 7.0, 3.0, 8.0, 0.5, 9.0];
        let pairs: Vec<(usize, f64)> = values.iter().copied().enumerate().collect();
        let top = top_k(pairs, 4);
        assert_eq!(top.len(), 4);
        let kept: Vec<usize> = top.iter().map(|&(i, _)| i).collect();
        let min_kept = top.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        for (i, &v) in values.iter().enumerate() {
            if !kept.contains(&i) {
                assert!(v <= min_kept, "excluded {v} exceeds kept minimum {min_kept}");
            }
        }
        assert_eq!(kept, vec![1, 3, 6, 8]);
    }

    #[test]
    fn test_iter_in_arrival_order() {
        let mut top = TopK::new(2);
        top.offer(10, 1.0);
        top.offer(11, 2.0);
        top.offer(12, 3.0);
        let keys: Vec<i32> = top.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![11, 12]);
        assert_eq!(top.capacity(), 2);
        assert_eq!(top.len(), 2);
    }
}
