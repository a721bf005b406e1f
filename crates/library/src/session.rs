//! Book generation.
//!
//! An [`ImportSession`] owns the loaded dump for the duration of a run and
//! turns configured books into a directory tree:
//!
//! ```text
//! books/
//! └── go/
//!     ├── 0010-getting-started-with-go/
//!     │   ├── index.txt
//!     │   ├── 010-hello-world.md
//!     │   └── 020-installing-go.md
//!     └── 0020-slices/
//!         └── index.txt
//! ```
//!
//! Chapters and sections are numbered in steps of ten to leave room for manual
//! insertions downstream.

use crate::error::{ErrorKind, Result};
use crate::link::{Linker, Resolution};
use crate::order::sort_examples;
use crate::records::{chapter_record, section_record};
use crate::report::{BookReport, EmptyExample, RunReport};
use crate::{path, slug};
use exn::{OptionExt, ResultExt};
use sobook_config::BookConfig;
use sobook_dump::Dump;
use sobook_dump::models::Tag;
use sobook_kv::Record;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::instrument;

/// File holding a chapter's metadata.
pub const INDEX_FILE: &str = "index.txt";
/// Distance between consecutive chapter and section numbers.
pub const NUMBER_STEP: u32 = 10;

fn numbers() -> impl Iterator<Item = u32> {
    (1..).map(|n| n * NUMBER_STEP)
}

/// A book whose tag and output directory have been resolved.
struct BookPlan<'a> {
    name: String,
    dir: String,
    tag: &'a Tag,
}

/// A book rendered in memory, ready to be written.
struct RenderedBook {
    report: BookReport,
    /// Validated paths relative to the books directory, with their contents.
    files: Vec<(PathBuf, Record)>,
}

pub struct ImportSession {
    linker: Linker,
    books_dir: PathBuf,
}
impl ImportSession {
    pub fn new(dump: Dump, books_dir: impl Into<PathBuf>) -> Self {
        Self { linker: Linker::new(dump), books_dir: books_dir.into() }
    }

    /// Generates the given books, in order.
    ///
    /// Every book is resolved and rendered in memory before the first file is
    /// written, so a configuration mismatch or an unserializable record aborts
    /// without touching the output. Only filesystem errors can leave a partial
    /// tree behind.
    #[instrument(skip_all, fields(books_dir = %self.books_dir.display()))]
    pub fn run<'b>(&self, books: impl IntoIterator<Item = &'b BookConfig>) -> Result<RunReport> {
        let start = Instant::now();
        let plans = self.plan(books)?;
        let mut report = RunReport::default();
        let rendered = plans
            .iter()
            .map(|plan| self.render_book(plan, &mut report.empty_examples))
            .collect::<Result<Vec<_>>>()?;
        for RenderedBook { report: mut book, files } in rendered {
            let write_start = Instant::now();
            for (relative, record) in &files {
                self.write(relative, record.as_str())?;
            }
            book.elapsed += write_start.elapsed();
            tracing::info!(
                book = %book.name,
                chapters = book.chapters,
                sections = book.sections,
                examples = book.examples,
                unresolved = book.unresolved,
                elapsed = ?book.elapsed,
                "imported book"
            );
            report.books.push(book);
        }
        report.elapsed = start.elapsed();
        Ok(report)
    }

    fn plan<'b>(&self, books: impl IntoIterator<Item = &'b BookConfig>) -> Result<Vec<BookPlan<'_>>> {
        let mut dirs = HashSet::new();
        let mut plans = Vec::new();
        for book in books {
            let tag = self
                .linker
                .tag_by_title(&book.title)
                .ok_or_raise(|| ErrorKind::TagNotFound(book.title.clone()))?;
            let dir = slug::slug(book.display_name());
            if !dirs.insert(dir.clone()) {
                exn::bail!(ErrorKind::DuplicateBook(dir));
            }
            plans.push(BookPlan { name: book.display_name().to_string(), dir, tag });
        }
        Ok(plans)
    }

    #[instrument(skip_all, fields(book = %plan.name, tag_id = plan.tag.id))]
    fn render_book(&self, plan: &BookPlan<'_>, empty_examples: &mut Vec<EmptyExample>) -> Result<RenderedBook> {
        let start = Instant::now();
        let topics = self.linker.topics_for_tag(plan.tag.id);
        let mut files = Vec::new();
        let mut sections = 0;
        let mut unresolved = 0;
        for (topic, chapter) in topics.iter().zip(numbers()) {
            let chapter_dir = Path::new(&plan.dir).join(slug::chapter_dir(chapter, &topic.title));
            let index = path::validate(&chapter_dir.join(INDEX_FILE))?;
            let record = chapter_record(topic).or_raise(|| ErrorKind::Serialize(index.clone()))?;
            files.push((index, record));

            let Resolution { examples: mut resolved, unresolved: missing } =
                self.linker.resolve_topic(plan.tag.id, topic.id);
            unresolved += missing.len();
            sort_examples(&mut resolved);

            let (empty, examples): (Vec<_>, Vec<_>) = resolved.into_iter().partition(|example| example.is_empty());
            empty_examples.extend(empty.into_iter().map(|example| EmptyExample {
                id: example.id,
                title: example.title.clone(),
                body_html_len: example.body_html.len(),
            }));
            for (example, section) in examples.iter().zip(numbers()) {
                let file = path::validate(&chapter_dir.join(slug::section_file(section, &example.title)))?;
                let record = section_record(example).or_raise(|| ErrorKind::Serialize(file.clone()))?;
                files.push((file, record));
                sections += 1;
            }
        }
        tracing::debug!(files = files.len(), "rendered book");
        let report = BookReport {
            name: plan.name.clone(),
            dir: plan.dir.clone(),
            chapters: topics.len(),
            sections,
            examples: self.linker.example_count(plan.tag.id),
            unresolved,
            elapsed: start.elapsed(),
        };
        Ok(RenderedBook { report, files })
    }

    /// Writes `contents` to a validated path relative to the books directory,
    /// creating parent directories as needed. Existing files are overwritten.
    fn write(&self, relative: &Path, contents: &str) -> Result<()> {
        let path = self.books_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).or_raise(|| ErrorKind::Write(parent.to_path_buf()))?;
        }
        std::fs::write(&path, contents).or_raise(|| ErrorKind::Write(path.clone()))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::tests::{example, history, tag, topic};
    use sobook_kv::parse;

    fn dump() -> Dump {
        Dump {
            tags: vec![tag(1, "Foo"), tag(2, "Bar")],
            topics: vec![topic(5, 1, "Intro"), topic(6, 1, "Second Steps")],
            histories: vec![history(1, 5, 100), history(1, 5, 101), history(1, 5, 102), history(1, 6, 100)],
            examples: vec![
                example(100, "Alpha", 5, false, "A"),
                example(101, "Beta", 9, true, "B"),
                example(102, "Blank", 50, false, " "),
            ],
        }
    }

    fn read(root: &Path, relative: &str) -> Vec<(String, String)> {
        parse(&std::fs::read_to_string(root.join(relative)).unwrap()).unwrap()
    }

    #[test]
    fn test_writes_numbered_tree() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = ImportSession::new(dump(), temp_dir.path());
        let report = session.run(&[BookConfig::new("Foo", "Foo Book", true)]).unwrap();

        let root = temp_dir.path();
        assert!(root.join("foo-book/0010-intro/index.txt").is_file());
        assert!(root.join("foo-book/0020-second-steps/index.txt").is_file());
        assert_eq!(read(root, "foo-book/0010-intro/010-beta.md")[0].1, "Beta");
        assert_eq!(read(root, "foo-book/0010-intro/020-alpha.md")[0].1, "Alpha");
        // The empty example takes no number.
        assert!(!root.join("foo-book/0010-intro/030-blank.md").exists());
        assert_eq!(read(root, "foo-book/0020-second-steps/010-alpha.md")[0].1, "Alpha");

        assert_eq!(report.books.len(), 1);
        let book = &report.books[0];
        assert_eq!((book.chapters, book.sections, book.examples), (2, 3, 3));
        assert_eq!(book.name, "Foo Book");
        assert_eq!(report.empty_examples, vec![EmptyExample { id: 102, title: "Blank".to_string(), body_html_len: 0 }]);
    }

    #[test]
    fn test_missing_tag_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = ImportSession::new(dump(), temp_dir.path().join("books"));
        let books = [BookConfig::new("Foo", "", true), BookConfig::new("Nope", "", true)];

        let err = session.run(&books).unwrap_err();
        assert_eq!(*err, ErrorKind::TagNotFound("Nope".to_string()));
        assert!(!temp_dir.path().join("books").exists());
    }

    #[test]
    fn test_separator_collision_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dump = Dump {
            tags: vec![tag(1, "Foo")],
            topics: vec![topic(5, 1, "Intro"), topic(6, 1, "Bad")],
            histories: vec![history(1, 5, 100), history(1, 6, 200)],
            examples: vec![
                example(100, "Ok", 1, false, "fine"),
                example(200, "Broken", 1, false, &format!("a\n{}\nb", sobook_kv::SEPARATOR)),
            ],
        };
        let session = ImportSession::new(dump, temp_dir.path().join("books"));

        let err = session.run(&[BookConfig::new("Foo", "", true)]).unwrap_err();
        assert!(matches!(*err, ErrorKind::Serialize(_)));
        assert!(!temp_dir.path().join("books").exists());
    }

    #[test]
    fn test_duplicate_book_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = ImportSession::new(dump(), temp_dir.path());
        let books = [BookConfig::new("Foo", "Same Name", true), BookConfig::new("Bar", "same-name", true)];

        let err = session.run(&books).unwrap_err();
        assert_eq!(*err, ErrorKind::DuplicateBook("same-name".to_string()));
    }

    #[test]
    fn test_tag_without_topics() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = ImportSession::new(dump(), temp_dir.path());
        let report = session.run(&[BookConfig::new("Bar", "", true)]).unwrap();
        assert_eq!((report.books[0].chapters, report.books[0].sections), (0, 0));
    }

    #[test]
    fn test_rerun_overwrites() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = ImportSession::new(dump(), temp_dir.path());
        let books = [BookConfig::new("Foo", "", true)];
        session.run(&books).unwrap();
        let first = std::fs::read_to_string(temp_dir.path().join("foo/0010-intro/010-beta.md")).unwrap();
        session.run(&books).unwrap();
        let second = std::fs::read_to_string(temp_dir.path().join("foo/0010-intro/010-beta.md")).unwrap();
        assert_eq!(first, second);
    }
}
