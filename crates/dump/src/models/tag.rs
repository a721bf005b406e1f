use serde::Deserialize;

/// A documentation subject area (e.g. "Python Language"); becomes one book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tag {
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "Title", default, deserialize_with = "super::nullable")]
    pub title: String,
    /// Topic count as recorded by the dump itself.
    #[serde(rename = "TopicCount", default, deserialize_with = "super::nullable")]
    pub topic_count: u64,
}
