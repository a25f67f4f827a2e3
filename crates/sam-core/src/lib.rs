//! sam-core - Basic data structures for sequence statistics
//!
//! This crate provides the containers the rest of sam is built on:
//!
//! - [`Series`] - Ordered sequence of `f64` values with aggregate statistics,
//!   selection, sorting and rescaling
//! - [`CountMap`] / [`ValueMap`] - Insertion-ordered keyed tallies and values
//! - [`TopK`] - Bounded selector for the `k` largest values
//! - [`Scalar`] - Numeric element trait behind the generic slice helpers in
//!   [`scalar`]
//!
//! Every operation is deterministic: ties are resolved by position or
//! insertion order, never by hash order.

pub mod count;
pub mod error;
pub mod scalar;
pub mod series;
pub mod topk;

pub use count::{CountMap, FloatKey, ValueMap};
pub use error::{Error, Result};
pub use scalar::Scalar;
pub use series::{
    LogScaleResult, RescaleResult, Selection, Series, SeriesIter, SortOrder, sort_by_key,
};
pub use topk::{TopK, top_k};
