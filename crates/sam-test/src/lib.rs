//! sam-test - Regression test framework for sam
//!
//! This crate provides the regression test harness used by the other
//! workspace crates, supporting two modes:
//!
//! - **Compare**: Compare computed values with expected ones (default)
//! - **Display**: Print every comparison without failing
//!
//! # Usage
//!
//! ```
//! use sam_core::Series;
//! use sam_test::RegParams;
//!
//! let s = Series::from_slice(&[1.0, 2.0, 3.0]);
//! let mut rp = RegParams::new("example");
//! rp.compare_values(2.0, s.mean().unwrap(), 0.0);
//! rp.compare_series(&[1.0, 2.0, 3.0], &s, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
