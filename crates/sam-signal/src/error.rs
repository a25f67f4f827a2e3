//! Error types for sam-signal

use thiserror::Error;

/// Errors that can occur during signal analysis
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SignalError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sam_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Rate or statistic requested on an empty series
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
}

/// Result type for signal operations
pub type SignalResult<T> = Result<T, SignalError>;
