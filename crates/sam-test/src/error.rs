//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Series comparison failed on length
    #[error("series comparison failed at index {index}: expected length {expected}, got {actual}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Series comparison failed on an element
    #[error(
        "series comparison failed at index {index}, position {position}: expected {expected}, got {actual}"
    )]
    ElementMismatch {
        index: usize,
        position: usize,
        expected: f64,
        actual: f64,
    },

    /// Byte-string comparison failed
    #[error("string comparison failed at index {index}: sizes {expected} vs {actual}")]
    StringMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// One or more comparisons in a test failed
    #[error("{test_name}_reg: {count} comparison(s) failed")]
    Failed { test_name: String, count: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
