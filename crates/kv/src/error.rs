//! Key/Value Format Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A key/value format error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for key/value format operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A multi-line value contains the record separator and cannot be written
    /// without corrupting the output.
    #[display("value of field '{key}' contains the record separator")]
    SeparatorCollision {
        /// Field whose value collided.
        key: String,
    },
    /// Keys must be non-empty and may not contain colons, whitespace or newlines.
    #[display("invalid field key: {_0:?}")]
    InvalidKey(#[error(not(source))] String),
    /// Input could not be read back as a record.
    #[display("malformed record at line {line}")]
    Malformed {
        /// One-based line number where reading failed.
        line: usize,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
