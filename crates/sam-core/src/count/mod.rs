//! CountMap, ValueMap - keyed tallies
//!
//! [`CountMap`] records how many times each key was observed and
//! [`ValueMap`] associates each key with a floating-point value. Both keep
//! keys in insertion order, so every query that has to break a tie (max,
//! min, top-k) resolves it the same way on every run: the key inserted
//! first wins.
//!
//! Keys can be any `Hash + Eq` type; use [`FloatKey`] for `f64` keys.

mod key;
mod value;

pub use key::FloatKey;
pub use value::ValueMap;

use crate::error::{Error, Result};
use crate::topk::TopK;
use indexmap::{Equivalent, IndexMap};
use std::hash::Hash;

/// Occurrence counts per key
///
/// A key is present only once it has been observed at least once; absent
/// keys report a count of zero.
///
/// # Examples
///
/// ```
/// use sam_core::CountMap;
///
/// let counts: CountMap<&str> = ["a", "b", "a"].into_iter().collect();
/// assert_eq!(counts.get("a"), 2);
/// assert_eq!(counts.get("z"), 0);
/// assert_eq!(counts.max(), Some((&"a", 2)));
/// assert_eq!(counts.average_count().unwrap(), 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct CountMap<K> {
    counts: IndexMap<K, u64>,
}

impl<K> Default for CountMap<K> {
    fn default() -> Self {
        Self {
            counts: IndexMap::default(),
        }
    }
}

impl<K: Hash + Eq> CountMap<K> {
    /// Create a new empty CountMap
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `key`
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Record `n` observations of `key`
    ///
    /// Adding zero to an unseen key does not insert it.
    pub fn add(&mut self, key: K, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(key).or_insert(0) += n;
    }

    /// Count for `key` (zero if never observed)
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Check whether `key` has been observed
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.counts.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no key has been observed
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Counts in key insertion order
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// `(key, count)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Key with the highest count
    ///
    /// Ties resolve to the key inserted first. `None` when empty.
    pub fn max(&self) -> Option<(&K, u64)> {
        let mut top = TopK::new(1);
        for (key, count) in self.iter() {
            top.offer(key, count);
        }
        top.into_vec().into_iter().next()
    }

    /// Key with the lowest count
    ///
    /// Ties resolve to the key inserted first. `None` when empty.
    pub fn min(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, count) in self.iter() {
            match best {
                Some((_, c)) if count < c => best = Some((key, count)),
                None => best = Some((key, count)),
                _ => {}
            }
        }
        best
    }

    /// Mean count per distinct key
    ///
    /// Returns [`Error::EmptyInput`] when no key has been observed.
    pub fn average_count(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(Error::EmptyInput("average count of an empty map"));
        }
        Ok(self.total() as f64 / self.len() as f64)
    }

    /// The `k` keys with the highest counts, in insertion order
    pub fn top_k(&self, k: usize) -> CountMap<K>
    where
        K: Clone,
    {
        let mut top = TopK::new(k);
        for (key, count) in self.iter() {
            top.offer(key, count);
        }
        let mut out = CountMap::new();
        for (key, count) in top.into_vec() {
            out.add(key.clone(), count);
        }
        out
    }
}

impl<K: Hash + Eq> PartialEq for CountMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Hash + Eq> Eq for CountMap<K> {}

impl<K: Hash + Eq> FromIterator<K> for CountMap<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut map = CountMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq> Extend<K> for CountMap<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.increment(key);
        }
    }
}
