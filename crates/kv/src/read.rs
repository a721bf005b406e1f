use crate::SEPARATOR;
use crate::error::{ErrorKind, Result};

/// Reads a serialized record back into its fields, in order.
///
/// Blank lines between fields are tolerated so that hand-edited files still
/// load.
///
/// ```
/// let fields = sobook_kv::parse("Title: Hi\nBody:\nline one\nline: two\n|======|\n")?;
/// assert_eq!(fields, vec![
///     ("Title".to_string(), "Hi".to_string()),
///     ("Body".to_string(), "line one\nline: two".to_string()),
/// ]);
/// # Ok::<(), sobook_kv::error::Error>(())
/// ```
pub fn parse(text: &str) -> Result<Vec<(String, String)>> {
    let mut lines = text.strip_suffix('\n').unwrap_or(text).split('\n').enumerate();
    let mut fields = Vec::new();
    while let Some((index, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, rest)) = line.split_once(':') else {
            exn::bail!(ErrorKind::Malformed { line: index + 1 });
        };
        if key.is_empty() {
            exn::bail!(ErrorKind::Malformed { line: index + 1 });
        }
        if rest.is_empty() {
            let mut block = Vec::new();
            let mut terminated = false;
            for (_, line) in lines.by_ref() {
                if line == SEPARATOR {
                    terminated = true;
                    break;
                }
                block.push(line);
            }
            if !terminated {
                exn::bail!(ErrorKind::Malformed { line: index + 1 });
            }
            fields.push((key.to_string(), block.join("\n")));
        } else {
            let value = rest.strip_prefix(' ').unwrap_or(rest);
            fields.push((key.to_string(), value.to_string()));
        }
    }
    Ok(fields)
}
