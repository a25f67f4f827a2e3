//! sam - Statistical summaries of one-dimensional series
//!
//! # Overview
//!
//! sam summarises ordered numeric sequences and keyed counts:
//!
//! - Aggregates (sum, mean, average deviation, extrema, bounds, range)
//! - Counting maps, mode and deterministic bounded top-k selection
//! - Rescaling to the unit interval and shifted log scaling
//! - Peak/valley detection, crossing and hitting rates
//! - Fixed-stride windows and seedable random sampling
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sam::{Series, signal};
//!
//! let s = Series::from_slice(&[1.0, 5.0, 2.0, 8.0, 3.0]);
//! assert_eq!(s.max(), 8.0);
//! assert_eq!(s.top_k(2).as_slice(), &[5.0, 8.0]);
//! assert_eq!(signal::peak_count(&s), 2);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! assert_eq!(signal::sample_by_count(&s, 5, &mut rng), s);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use sam_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use sam_signal as signal;
