//! Error types for the fallible utility operations.

use thiserror::Error;

/// Error type for span construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanError {
    /// Start offset past the end offset
    #[error("invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },
}

/// Error type for parsing diagnostic codes from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    /// Code does not start with a known prefix
    #[error("diagnostic code must start with 'E' or 'W': {0:?}")]
    UnknownPrefix(String),

    /// Code has no parsable numeric part
    #[error("diagnostic code has no numeric part: {0:?}")]
    MissingNumber(String),
}
