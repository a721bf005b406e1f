use crate::error::{ErrorKind, Result};
use crate::{HTML_SUFFIX, MAX_LINE_WIDTH, SEPARATOR};

/// Returns `true` for empty or whitespace-only values, which are never written.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Whether `value` can be written as `key: value` on a single line.
///
/// Colons are excluded so that a reader never confuses a value with a block
/// header.
pub fn fits_one_line(value: &str) -> bool {
    !value.contains('\n') && !value.contains(':') && value.len() <= MAX_LINE_WIDTH
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains(':') || key.chars().any(char::is_whitespace) {
        exn::bail!(ErrorKind::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Serializes one field, returning an empty string for blank values.
///
/// # Errors
/// [`ErrorKind::SeparatorCollision`] when a block-form value contains
/// [`SEPARATOR`], and [`ErrorKind::InvalidKey`] for keys a reader could not
/// split back out.
pub fn serialize_field(key: &str, value: &str) -> Result<String> {
    validate_key(key)?;
    if is_blank(value) {
        return Ok(String::new());
    }
    if fits_one_line(value) {
        return Ok(format!("{key}: {value}\n"));
    }
    if value.contains(SEPARATOR) {
        exn::bail!(ErrorKind::SeparatorCollision { key: key.to_string() });
    }
    Ok(format!("{key}:\n{value}\n{SEPARATOR}\n"))
}

/// An in-progress serialized record.
///
/// Fields are appended in call order, which is the order a reader will see
/// them in.
///
/// ```
/// use sobook_kv::Record;
///
/// let record = Record::new()
///     .field("Title", "Hello")?
///     .field("Score", "  ")?
///     .field_or_html("Body", "", "<p>Hi</p>")?;
/// assert_eq!(record.as_str(), "Title: Hello\nBodyHtml: <p>Hi</p>\n");
/// # Ok::<(), sobook_kv::error::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    buf: String,
}
impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key` with `value`, skipping blank values.
    pub fn field(mut self, key: &str, value: &str) -> Result<Self> {
        self.buf.push_str(&serialize_field(key, value)?);
        Ok(self)
    }

    /// Appends the Markdown rendering under `key`, or the HTML rendering under
    /// `key` + `Html` when the Markdown one is blank.
    pub fn field_or_html(self, key: &str, markdown: &str, html: &str) -> Result<Self> {
        if is_blank(markdown) {
            tracing::trace!(key, "markdown is blank, falling back to html");
            self.field(&format!("{key}{HTML_SUFFIX}"), html)
        } else {
            self.field(key, markdown)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }
}
