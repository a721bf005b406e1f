mod example;
mod history;
mod tag;
mod topic;

pub use self::example::Example;
pub use self::history::TopicHistory;
pub use self::tag::Tag;
pub use self::topic::Topic;

use serde::{Deserialize, Deserializer};

/// The dump writes `null` for absent text and counts; treat those the same as
/// a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
