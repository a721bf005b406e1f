//! Presentation order of sections within a chapter.

use sobook_dump::models::Example;
use std::cmp::Reverse;

/// Sort key: pinned examples first, then highest score first.
pub fn sort_key(example: &Example) -> (bool, Reverse<i64>) {
    (!example.is_pinned, Reverse(example.score))
}

/// Orders examples for output.
///
/// The sort is stable, so examples with the same pinned state and score keep
/// their history order.
pub fn sort_examples(examples: &mut [&Example]) {
    examples.sort_by_key(|example| sort_key(example));
}
