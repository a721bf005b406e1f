use serde::Deserialize;

/// A subsection of a [`Tag`](super::Tag); becomes one chapter.
///
/// Each prose field comes in a Markdown and an HTML rendering. Older topics
/// frequently only carry the HTML one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Topic {
    #[serde(rename = "Id")]
    pub id: u64,
    #[serde(rename = "DocTagId")]
    pub tag_id: u64,
    #[serde(rename = "Title", default, deserialize_with = "super::nullable")]
    pub title: String,
    /// JSON-encoded list of language versions; `"[]"` when there are none.
    #[serde(rename = "VersionsJson", default, deserialize_with = "super::nullable")]
    pub versions_json: String,
    #[serde(rename = "HelloWorldVersionsHtml", default, deserialize_with = "super::nullable")]
    pub hello_world_versions_html: String,
    #[serde(rename = "IntroductionMarkdown", default, deserialize_with = "super::nullable")]
    pub introduction_markdown: String,
    #[serde(rename = "IntroductionHtml", default, deserialize_with = "super::nullable")]
    pub introduction_html: String,
    #[serde(rename = "SyntaxMarkdown", default, deserialize_with = "super::nullable")]
    pub syntax_markdown: String,
    #[serde(rename = "SyntaxHtml", default, deserialize_with = "super::nullable")]
    pub syntax_html: String,
    #[serde(rename = "ParametersMarkdown", default, deserialize_with = "super::nullable")]
    pub parameters_markdown: String,
    #[serde(rename = "ParametersHtml", default, deserialize_with = "super::nullable")]
    pub parameters_html: String,
    #[serde(rename = "RemarksMarkdown", default, deserialize_with = "super::nullable")]
    pub remarks_markdown: String,
    #[serde(rename = "RemarksHtml", default, deserialize_with = "super::nullable")]
    pub remarks_html: String,
}
