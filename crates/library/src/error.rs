//! Library Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A library error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// Every one of these aborts the run: the book configuration and the dump are
/// maintained together, so a mismatch needs fixing at the source rather than
/// working around.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A configured book names a tag that is not in the dump.
    #[display("no tag titled '{_0}' in the dump")]
    TagNotFound(#[error(not(source))] String),
    /// Two imported books would be written to the same directory.
    #[display("more than one book would be written to '{_0}'")]
    DuplicateBook(#[error(not(source))] String),
    /// A chapter or section could not be rendered to the record format.
    #[display("could not serialize {}", _0.display())]
    Serialize(#[error(not(source))] PathBuf),
    /// A generated path is empty or escapes the books directory.
    #[display("invalid output path: {}", _0.display())]
    InvalidPath(#[error(not(source))] PathBuf),
    /// Creating a directory or writing a file failed.
    #[display("could not write {}", _0.display())]
    Write(#[error(not(source))] PathBuf),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
