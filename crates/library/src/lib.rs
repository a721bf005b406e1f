//! Turns a documentation dump into plain-text book sources.
//!
//! - [`Linker`] resolves tags to topics and topics to examples.
//! - [`sort_examples`] puts a chapter's sections in presentation order.
//! - [`ImportSession`] drives both and writes the numbered book tree.

pub mod error;
mod link;
mod order;
mod path;
mod records;
mod report;
mod session;
mod slug;

pub use crate::link::{Linker, Resolution, TagStats};
pub use crate::order::{sort_examples, sort_key};
pub use crate::records::{chapter_record, section_record};
pub use crate::report::{BookReport, EmptyExample, RunReport};
pub use crate::session::{INDEX_FILE, ImportSession, NUMBER_STEP};
pub use crate::slug::{chapter_dir, section_file, slug};
