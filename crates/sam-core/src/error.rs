//! Error types for sam-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Operations that are mathematically undefined on an empty collection
//! (mean, average deviation, mode, average count) report [`Error::EmptyInput`]
//! instead of silently dividing by zero.

use thiserror::Error;

/// sam error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operation is undefined on an empty collection
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Integer arithmetic left the element type's range
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Two parallel collections differ in length
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for sam operations
pub type Result<T> = std::result::Result<T, Error>;
