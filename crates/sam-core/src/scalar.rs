//! Scalar element types shared by every sequence operation.
//!
//! The aggregate helpers in this module are written once against the
//! [`Scalar`] trait and instantiated for `f32`, `f64`, `i32` and `i64`,
//! so integer slices get the same `sum`/`product`/extrema behaviour as
//! [`Series`](crate::Series) without a per-type copy of the logic.
//!
//! Integer arithmetic is checked: a sum, product or increment whose running
//! value leaves the element type's range reports [`Error::Overflow`]
//! instead of wrapping. Float arithmetic never overflows (it reaches
//! infinity).

use crate::error::{Error, Result};
use std::fmt::Debug;
use std::ops::{Add, Mul};

/// A primitive numeric element that can be summed, multiplied and ordered.
pub trait Scalar: Copy + PartialOrd + Debug + Add<Output = Self> + Mul<Output = Self> {
    /// Additive identity.
    const ZERO: Self;

    /// Seed for a running minimum: larger than or equal to every value.
    ///
    /// `+inf` for floats, `MAX` for integers.
    const MIN_SEED: Self;

    /// Seed for a running maximum: smaller than or equal to every value.
    ///
    /// `-inf` for floats, `MIN` for integers.
    const MAX_SEED: Self;

    /// Widen to `f64` for ratio computations.
    fn to_f64(self) -> f64;

    /// Addition that returns `None` instead of overflowing.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Multiplication that returns `None` instead of overflowing.
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const MIN_SEED: Self = <$t>::INFINITY;
            const MAX_SEED: Self = <$t>::NEG_INFINITY;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const MIN_SEED: Self = <$t>::MAX;
            const MAX_SEED: Self = <$t>::MIN;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64);

/// Sum of all values. Zero for an empty slice.
///
/// Returns [`Error::Overflow`] if any running sum overflows.
pub fn sum<T: Scalar>(values: &[T]) -> Result<T> {
    values.iter().try_fold(T::ZERO, |acc, &v| {
        acc.checked_add(v).ok_or(Error::Overflow("sum"))
    })
}

/// Product of all values.
///
/// The fold is seeded with the first element, so an empty slice yields
/// zero rather than one. Returns [`Error::Overflow`] if any running
/// product overflows.
pub fn product<T: Scalar>(values: &[T]) -> Result<T> {
    let mut iter = values.iter();
    match iter.next() {
        Some(&first) => iter.try_fold(first, |acc, &v| {
            acc.checked_mul(v).ok_or(Error::Overflow("product"))
        }),
        None => Ok(T::ZERO),
    }
}

/// Index and value of the smallest element.
///
/// The first occurrence wins ties. Returns `None` for an empty slice.
pub fn min_index<T: Scalar>(values: &[T]) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v < b => best = Some((i, v)),
            None => best = Some((i, v)),
            _ => {}
        }
    }
    best
}

/// Index and value of the largest element.
///
/// The first occurrence wins ties. Returns `None` for an empty slice.
pub fn max_index<T: Scalar>(values: &[T]) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, b)) if v > b => best = Some((i, v)),
            None => best = Some((i, v)),
            _ => {}
        }
    }
    best
}

/// Smallest and largest element found in a single pass.
///
/// Running extrema are seeded with [`Scalar::MIN_SEED`] and
/// [`Scalar::MAX_SEED`]; `None` for an empty slice.
pub fn bounds<T: Scalar>(values: &[T]) -> Option<(T, T)> {
    if values.is_empty() {
        return None;
    }
    let mut min = T::MIN_SEED;
    let mut max = T::MAX_SEED;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

/// Check whether `target` occurs in the slice.
pub fn contains<T: Scalar>(values: &[T], target: T) -> bool {
    values.iter().any(|&v| v == target)
}

/// Add `one` to the element at `index`.
///
/// The element is left unchanged on error.
pub fn increment_at<T: Scalar>(values: &mut [T], index: usize, one: T) -> Result<()> {
    let len = values.len();
    let v = values
        .get_mut(index)
        .ok_or(Error::IndexOutOfBounds { index, len })?;
    *v = (*v).checked_add(one).ok_or(Error::Overflow("increment"))?;
    Ok(())
}
