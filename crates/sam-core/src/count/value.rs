//! Keyed floating-point values (index → value, label → score).

use crate::series::Series;
use crate::topk::TopK;
use indexmap::{Equivalent, IndexMap};
use std::hash::Hash;

/// Map from key to `f64` value, kept in insertion order
///
/// # Examples
///
/// ```
/// use sam_core::ValueMap;
///
/// let scores: ValueMap<&str> = [("low", 0.1), ("high", 0.9), ("mid", 0.5)]
///     .into_iter()
///     .collect();
/// assert_eq!(scores.max_key(), Some((&"high", 0.9)));
/// assert_eq!(scores.min_key(), Some((&"low", 0.1)));
///
/// let top = scores.top_k(2);
/// assert_eq!(top.keys().copied().collect::<Vec<_>>(), ["high", "mid"]);
/// ```
#[derive(Debug, Clone)]
pub struct ValueMap<K> {
    values: IndexMap<K, f64>,
}

impl<K> Default for ValueMap<K> {
    fn default() -> Self {
        Self {
            values: IndexMap::default(),
        }
    }
}

impl<K: Hash + Eq> ValueMap<K> {
    /// Create a new empty ValueMap
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `key`, returning the previous value
    ///
    /// Overwriting keeps the key's original insertion position.
    pub fn insert(&mut self, key: K, value: f64) -> Option<f64> {
        self.values.insert(key, value)
    }

    /// Add 1.0 to the value for `key`, starting from zero
    pub fn increment(&mut self, key: K) {
        *self.values.entry(key).or_insert(0.0) += 1.0;
    }

    /// Value for `key`
    pub fn get<Q>(&self, key: &Q) -> Option<f64>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.values.get(key).copied()
    }

    /// Check whether `key` is present
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.values.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    /// Values in key insertion order
    pub fn values(&self) -> Series {
        self.values.values().copied().collect()
    }

    /// Keys and values as two index-aligned collections
    pub fn keys_and_values(&self) -> (Vec<K>, Series)
    where
        K: Clone,
    {
        let keys = self.values.keys().cloned().collect();
        (keys, self.values())
    }

    /// `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.values.iter().map(|(k, &v)| (k, v))
    }

    /// Key holding the smallest value (first inserted wins ties)
    pub fn min_key(&self) -> Option<(&K, f64)> {
        let mut best: Option<(&K, f64)> = None;
        for (key, value) in self.iter() {
            match best {
                Some((_, b)) if value < b => best = Some((key, value)),
                None => best = Some((key, value)),
                _ => {}
            }
        }
        best
    }

    /// Key holding the largest value (first inserted wins ties)
    pub fn max_key(&self) -> Option<(&K, f64)> {
        let mut top = TopK::new(1);
        for (key, value) in self.iter() {
            top.offer(key, value);
        }
        top.into_vec().into_iter().next()
    }

    /// The `k` entries with the largest values, in insertion order
    pub fn top_k(&self, k: usize) -> ValueMap<K>
    where
        K: Clone,
    {
        let mut top = TopK::new(k);
        for (key, value) in self.iter() {
            top.offer(key, value);
        }
        top.into_vec()
            .into_iter()
            .map(|(key, value)| (key.clone(), value))
            .collect()
    }
}

impl<K: Hash + Eq> PartialEq for ValueMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K: Hash + Eq> FromIterator<(K, f64)> for ValueMap<K> {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<K: Hash + Eq> Extend<(K, f64)> for ValueMap<K> {
    fn extend<T: IntoIterator<Item = (K, f64)>>(&mut self, iter: T) {
        self.values.extend(iter);
    }
}
