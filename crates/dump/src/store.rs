//! Record Store
//!
//! The four record collections are read once, in full, before anything else
//! happens. There is no partial dump: a missing or unreadable file aborts the
//! load.

use crate::Compression;
use crate::error::{ErrorKind, Result};
use crate::models::{Example, Tag, Topic, TopicHistory};
use exn::ResultExt;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Instant;
use tracing::instrument;

pub const TAGS_FILE: &str = "doctags.json.gz";
pub const TOPICS_FILE: &str = "topics.json.gz";
pub const TOPIC_HISTORIES_FILE: &str = "topichistories.json.gz";
pub const EXAMPLES_FILE: &str = "examples.json.gz";

/// Immutable snapshot of a documentation dump.
///
/// Collections keep the order they were stored in; chapter ordering and
/// history deduplication both depend on it.
#[derive(Debug, Clone, Default)]
pub struct Dump {
    pub tags: Vec<Tag>,
    pub topics: Vec<Topic>,
    pub histories: Vec<TopicHistory>,
    pub examples: Vec<Example>,
}
impl Dump {
    /// Loads all four collections from their well-known file names inside `dir`.
    #[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let start = Instant::now();
        let dump = Self {
            tags: load_records(dir.join(TAGS_FILE))?,
            topics: load_records(dir.join(TOPICS_FILE))?,
            examples: load_records(dir.join(EXAMPLES_FILE))?,
            histories: load_records(dir.join(TOPIC_HISTORIES_FILE))?,
        };
        tracing::info!(
            tags = dump.tags.len(),
            topics = dump.topics.len(),
            histories = dump.histories.len(),
            examples = dump.examples.len(),
            elapsed = ?start.elapsed(),
            "loaded dump"
        );
        Ok(dump)
    }
}

/// Reads one source file as a JSON array of `T`, transparently decompressing it.
#[instrument(skip_all, fields(path = %path.as_ref().display(), records))]
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
        Err(e) => return Err(e).or_raise(|| ErrorKind::Io),
    };
    let detected = Compression::from_magic_bytes(&bytes);
    let expected = Compression::from_path(path);
    if detected != expected {
        tracing::warn!(%detected, %expected, "file extension does not match contents");
    }
    let json = detected.decompress(&bytes)?;
    let source_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let records: Vec<T> = serde_json::from_slice(&json).or_raise(|| ErrorKind::Malformed { source_name })?;
    tracing::Span::current().record("records", records.len());
    Ok(records)
}
