//! Hashable wrapper for floating-point map keys.

use std::fmt;
use std::hash::{Hash, Hasher};

/// An `f64` usable as a hash-map key.
///
/// Two keys are equal when their values are bit-identical after
/// canonicalisation: `-0.0` and `0.0` are the same key, and every NaN is
/// the same key.
#[derive(Debug, Clone, Copy)]
pub struct FloatKey(f64);

impl FloatKey {
    /// Wrap a value
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped value
    pub fn value(self) -> f64 {
        self.0
    }

    fn canonical_bits(self) -> u64 {
        if self.0 == 0.0 {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_bits() == other.canonical_bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_bits().hash(state);
    }
}

impl From<f64> for FloatKey {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<FloatKey> for f64 {
    fn from(key: FloatKey) -> Self {
        key.0
    }
}

impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
