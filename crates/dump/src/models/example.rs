use serde::Deserialize;

/// A worked sample under a topic; becomes one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Example {
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "Title", default, deserialize_with = "super::nullable")]
    pub title: String,
    #[serde(rename = "Score", default, deserialize_with = "super::nullable")]
    pub score: i64,
    #[serde(rename = "IsPinned", default, deserialize_with = "super::nullable")]
    pub is_pinned: bool,
    #[serde(rename = "BodyMarkdown", default, deserialize_with = "super::nullable")]
    pub body_markdown: String,
    #[serde(rename = "BodyHtml", default, deserialize_with = "super::nullable")]
    pub body_html: String,
}
impl Example {
    /// Returns `true` when neither rendering of the body has any content.
    pub fn is_empty(&self) -> bool {
        super::is_blank(&self.body_markdown) && super::is_blank(&self.body_html)
    }
}
