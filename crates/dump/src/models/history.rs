use serde::Deserialize;

/// Join record placing an [`Example`](super::Example) under a
/// [`Topic`](super::Topic) of a [`Tag`](super::Tag).
///
/// One row is written per edit of the example, so the same triple routinely
/// appears many times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct TopicHistory {
    #[serde(rename = "DocTagId")]
    pub tag_id: u64,
    #[serde(rename = "DocTopicId")]
    pub topic_id: u64,
    /// Absent or `null` when the row does not point at an example.
    #[serde(rename = "DocExampleId", default)]
    pub example_id: Option<u64>,
}
