//! Line-oriented key/value record format.
//!
//! A record is a sequence of fields. A short, simple value is written on one
//! line; anything else is written as a block terminated by [`SEPARATOR`]:
//!
//! ```text
//! Title: Hello World
//! Score: 12
//! Body:
//! Multi-line content
//! with: colons
//! |======|
//! ```
//!
//! Blank values are dropped entirely, so a reader never sees an empty field.

pub mod error;
mod read;
mod write;

pub use crate::read::parse;
pub use crate::write::{Record, fits_one_line, is_blank, serialize_field};

/// Terminates a block-form value. Must never occur inside a value.
pub const SEPARATOR: &str = "|======|";
/// Longest value (in UTF-8 bytes) that may be written in single-line form.
pub const MAX_LINE_WIDTH: usize = 80;
/// Suffix of the key used when only the HTML rendering of a field is present.
pub const HTML_SUFFIX: &str = "Html";
