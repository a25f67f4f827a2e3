//! sam-signal - Structural analysis and sampling of sam series
//!
//! This crate treats a [`Series`](sam_core::Series) as a one-dimensional
//! signal and provides:
//!
//! - **Extrema** - Local peaks and valleys, their counts and the index
//!   distances between them
//! - **Crossing rates** - Mean crossing, zero crossing and zero hitting
//!   rates, with [`zeroing_rate`] picking the meaningful one
//! - **Windows** - Lazy fixed-length windows with a configurable stride
//! - **Sampling** - Bernoulli and contiguous random samples driven by an
//!   injected random source
//!
//! # Examples
//!
//! ```
//! use sam_core::Series;
//! use sam_signal::{peak_count, peak_distances, zeroing_rate};
//!
//! let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
//! assert_eq!(peak_count(&s), 2);
//! assert_eq!(peak_distances(&s).as_slice(), &[2.0]);
//! assert_eq!(zeroing_rate(&s).unwrap(), 0.0);
//! ```

pub mod crossing;
pub mod error;
pub mod extrema;
pub mod sample;
pub mod window;

pub use crossing::{
    ZeroingMode, mean_crossing_rate, zero_crossing_rate, zero_hitting_rate, zeroing_mode,
    zeroing_rate,
};
pub use error::{SignalError, SignalResult};
pub use extrema::{
    ExtremaMap, extrema, extrema_count, extrema_distances, peak_count,
    peak_distances, peaks, valley_count, valley_distances, valleys,
};
pub use sample::{random_subsequence, sample_by_count, sample_by_percentage};
pub use window::{Windows, consecutive_windows, overlapping_windows, windows};
