//! URL-safe names for generated directories and files.

use rslug::slugify;

/// Used when a title has no characters that survive slugging.
pub const UNTITLED: &str = "untitled";

/// Converts a title into a URL-safe slug.
///
/// Quotation marks are stripped first so that titles like `"hello"` don't
/// produce stray hyphens.
pub fn slug(title: &str) -> String {
    // Various quotation marks: '"''""„"`«»
    let marks = [
        '\u{0027}', '\u{0022}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{201B}', '\u{0060}',
        '\u{00AB}', '\u{00BB}', '\u{2039}', '\u{203A}',
    ];
    let stripped: String = title.chars().filter(|c| !marks.contains(c)).collect();
    match slugify!(&stripped) {
        s if s.is_empty() => UNTITLED.to_string(),
        s => s,
    }
}

/// Directory name of a chapter, e.g. `0010-getting-started`.
pub fn chapter_dir(number: u32, title: &str) -> String {
    format!("{number:04}-{}", slug(title))
}

/// File name of a section, e.g. `020-hello-world.md`.
pub fn section_file(number: u32, title: &str) -> String {
    format!("{number:03}-{}.md", slug(title))
}
