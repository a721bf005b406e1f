//! Dump Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A dump loading error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for dump loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source file of the dump does not exist.
    #[display("dump file not found: {}", _0.display())]
    NotFound(#[error(not(source))] PathBuf),
    /// Reading a source file failed for a reason other than it being missing.
    #[display("I/O error")]
    Io,
    /// The compressed stream is corrupt or truncated.
    #[display("invalid or corrupted data")]
    InvalidData,
    /// The decompressed content does not match the expected record schema.
    #[display("malformed records in {source_name}")]
    Malformed {
        /// File name of the offending source.
        source_name: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The dump is immutable for the duration of a run; the same input will
        // fail the same way.
        false
    }
}
