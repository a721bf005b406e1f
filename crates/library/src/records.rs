//! Chapter and section records in the key/value format.

use sobook_dump::models::{Example, Topic};
use sobook_kv::Record;
use sobook_kv::error::Result;

/// The dump's way of saying "no versions".
const NO_VERSIONS: &str = "[]";

/// Renders a topic's metadata for a chapter's index file.
pub fn chapter_record(topic: &Topic) -> Result<Record> {
    let versions = match topic.versions_json.as_str() {
        NO_VERSIONS => "",
        versions => versions,
    };
    Record::new()
        .field("Title", &topic.title)?
        .field_or_html("Versions", versions, &topic.hello_world_versions_html)?
        .field_or_html("Introduction", &topic.introduction_markdown, &topic.introduction_html)?
        .field_or_html("Syntax", &topic.syntax_markdown, &topic.syntax_html)?
        .field_or_html("Parameters", &topic.parameters_markdown, &topic.parameters_html)?
        .field_or_html("Remarks", &topic.remarks_markdown, &topic.remarks_html)
}

/// Renders an example as a section file.
pub fn section_record(example: &Example) -> Result<Record> {
    Record::new()
        .field("Title", &example.title)?
        .field("Score", &example.score.to_string())?
        .field_or_html("Body", &example.body_markdown, &example.body_html)
}
