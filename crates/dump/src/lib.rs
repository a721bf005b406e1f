//! Loading of a Stack Overflow Documentation dump.
//!
//! The dump consists of four flat, foreign-key-linked record sets (tags,
//! topics, topic histories and examples), each stored as a compressed JSON
//! array. [`Dump::load`] reads all of them into memory at once.

pub mod error;
pub mod models;
mod source;
mod store;

pub use crate::source::Compression;
pub use crate::store::{Dump, EXAMPLES_FILE, TAGS_FILE, TOPIC_HISTORIES_FILE, TOPICS_FILE, load_records};
