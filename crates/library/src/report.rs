//! Run summaries.

use crate::link::TagStats;
use std::fmt::{Display, Formatter, Result as FmtResult, Write};
use std::time::Duration;

/// Outcome of importing one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub name: String,
    /// Directory of the book, relative to the books directory.
    pub dir: String,
    pub chapters: usize,
    /// Sections written; empty examples are not counted.
    pub sections: usize,
    /// Distinct examples reachable from the book's chapters.
    pub examples: usize,
    /// History rows pointing at examples missing from the dump.
    pub unresolved: usize,
    pub elapsed: Duration,
}
impl Display for BookReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Imported {} into {}/ ({} chapters, {} sections) in {:?}",
            self.name, self.dir, self.chapters, self.sections, self.elapsed
        )
    }
}

/// An example left out of the output because both of its bodies are blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyExample {
    pub id: u64,
    pub title: String,
    /// Byte length of the (blank) HTML body.
    pub body_html_len: usize,
}
impl Display for EmptyExample {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "empty example: {}, len(BodyHtml): {}", self.title, self.body_html_len)
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub books: Vec<BookReport>,
    pub empty_examples: Vec<EmptyExample>,
    pub elapsed: Duration,
}
impl Display for RunReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for book in &self.books {
            writeln!(f, "{book}")?;
        }
        writeln!(f, "Took {:?}", self.elapsed)?;
        for empty in &self.empty_examples {
            writeln!(f, "{empty}")?;
        }
        Ok(())
    }
}

/// Renders a tag as a `[[books]]` configuration entry, disabled by default.
impl Display for TagStats<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "[[books]] # {} examples, {} topics", self.example_count, self.tag.topic_count)?;
        f.write_str("title = ")?;
        write_toml_string(f, &self.tag.title)?;
        f.write_str("\nimport = false\n")
    }
}

/// Writes `s` as a TOML basic string.
fn write_toml_string(f: &mut impl Write, s: &str) -> FmtResult {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\u{8}' => f.write_str("\\b")?,
            '\t' => f.write_str("\\t")?,
            '\n' => f.write_str("\\n")?,
            '\u{c}' => f.write_str("\\f")?,
            '\r' => f.write_str("\\r")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
