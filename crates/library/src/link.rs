//! Foreign-key resolution across the dump's record sets.
//!
//! All lookups are answered from indexes built once in [`Linker::new`]; the
//! underlying [`Dump`] is never modified.

use sobook_dump::Dump;
use sobook_dump::models::{Example, Tag, Topic};
use std::collections::{HashMap, HashSet};
use tracing::instrument;

/// Examples resolved for one topic, before ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Distinct examples, in order of their first history row.
    pub examples: Vec<&'a Example>,
    /// Distinct example ids referenced by history rows but absent from the dump.
    pub unresolved: Vec<u64>,
}

/// Per-tag statistics used to decide which books are worth importing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStats<'a> {
    pub tag: &'a Tag,
    /// Distinct examples reachable from any of the tag's topics.
    pub example_count: usize,
}

pub struct Linker {
    dump: Dump,
    /// Topic positions per tag id, in load order.
    topics_by_tag: HashMap<u64, Vec<usize>>,
    /// Position of the first example with each id.
    examples_by_id: HashMap<u64, usize>,
    /// Example ids per `(tag id, topic id)`, in history order, duplicates kept.
    history: HashMap<(u64, u64), Vec<u64>>,
}
impl Linker {
    #[instrument(skip_all, fields(topics = dump.topics.len(), histories = dump.histories.len()))]
    pub fn new(dump: Dump) -> Self {
        let mut topics_by_tag: HashMap<u64, Vec<usize>> = HashMap::new();
        for (position, topic) in dump.topics.iter().enumerate() {
            topics_by_tag.entry(topic.tag_id).or_default().push(position);
        }
        let mut examples_by_id = HashMap::with_capacity(dump.examples.len());
        for (position, example) in dump.examples.iter().enumerate() {
            examples_by_id.entry(example.id).or_insert(position);
        }
        let mut history: HashMap<(u64, u64), Vec<u64>> = HashMap::new();
        for row in &dump.histories {
            let Some(example_id) = row.example_id else {
                tracing::debug!(tag_id = row.tag_id, topic_id = row.topic_id, "history row without an example");
                continue;
            };
            history.entry((row.tag_id, row.topic_id)).or_default().push(example_id);
        }
        Self { dump, topics_by_tag, examples_by_id, history }
    }

    /// First tag whose title matches exactly.
    pub fn tag_by_title(&self, title: &str) -> Option<&Tag> {
        self.dump.tags.iter().find(|tag| tag.title == title)
    }

    /// Topics of a tag, in the order they were loaded.
    pub fn topics_for_tag(&self, tag_id: u64) -> Vec<&Topic> {
        self.topics_by_tag
            .get(&tag_id)
            .map(|positions| positions.iter().map(|&p| &self.dump.topics[p]).collect())
            .unwrap_or_default()
    }

    pub fn example_by_id(&self, id: u64) -> Option<&Example> {
        self.examples_by_id.get(&id).map(|&p| &self.dump.examples[p])
    }

    /// Walks the history rows of one topic, keeping the first occurrence of
    /// each example id and setting aside ids that do not resolve.
    pub fn resolve_topic(&self, tag_id: u64, topic_id: u64) -> Resolution<'_> {
        let mut resolution = Resolution::default();
        let Some(ids) = self.history.get(&(tag_id, topic_id)) else {
            return resolution;
        };
        let mut seen = HashSet::with_capacity(ids.len());
        for &id in ids {
            if !seen.insert(id) {
                continue;
            }
            match self.example_by_id(id) {
                Some(example) => resolution.examples.push(example),
                None => {
                    tracing::debug!(tag_id, topic_id, example_id = id, "history references a missing example");
                    resolution.unresolved.push(id);
                },
            }
        }
        resolution
    }

    /// Number of distinct examples reachable from any topic of the tag.
    pub fn example_count(&self, tag_id: u64) -> usize {
        self.topics_for_tag(tag_id)
            .into_iter()
            .flat_map(|topic| self.resolve_topic(tag_id, topic.id).examples)
            .map(|example| example.id)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Statistics for every tag, smallest books first.
    pub fn tag_stats(&self) -> Vec<TagStats<'_>> {
        let mut stats: Vec<_> = self
            .dump
            .tags
            .iter()
            .map(|tag| TagStats { tag, example_count: self.example_count(tag.id) })
            .collect();
        stats.sort_by_key(|s| s.example_count);
        stats
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sobook_dump::models::TopicHistory;

    pub(crate) fn tag(id: u64, title: &str) -> Tag {
        Tag { id, title: title.to_string(), topic_count: 0 }
    }

    pub(crate) fn topic(id: u64, tag_id: u64, title: &str) -> Topic {
        Topic { id, tag_id, title: title.to_string(), versions_json: "[]".to_string(), ..Default::default() }
    }

    pub(crate) fn history(tag_id: u64, topic_id: u64, example_id: u64) -> TopicHistory {
        TopicHistory { tag_id, topic_id, example_id: Some(example_id) }
    }

    pub(crate) fn example(id: u64, title: &str, score: i64, is_pinned: bool, body: &str) -> Example {
        Example { id, title: title.to_string(), score, is_pinned, body_markdown: body.to_string(), ..Default::default() }
    }

    fn ids(examples: &[&Example]) -> Vec<u64> {
        examples.iter().map(|e| e.id).collect()
    }

    fn fixture() -> Linker {
        Linker::new(Dump {
            tags: vec![tag(1, "Foo"), tag(2, "Bar"), tag(3, "Empty")],
            topics: vec![topic(5, 1, "Intro"), topic(9, 2, "Other"), topic(6, 1, "Advanced")],
            histories: vec![
                history(1, 5, 100),
                history(1, 5, 101),
                history(1, 5, 100),
                history(1, 5, 404),
                history(1, 6, 101),
                history(1, 6, 102),
                history(2, 9, 103),
                // Right topic, wrong tag.
                history(2, 5, 103),
            ],
            examples: vec![
                example(100, "A", 5, false, "A"),
                example(101, "B", 9, true, "B"),
                example(102, "C", 1, false, "C"),
                example(103, "D", 1, false, "D"),
            ],
        })
    }

    #[test]
    fn test_topics_for_tag_keep_load_order() {
        let linker = fixture();
        let topics: Vec<u64> = linker.topics_for_tag(1).iter().map(|t| t.id).collect();
        assert_eq!(topics, vec![5, 6]);
        assert!(linker.topics_for_tag(3).is_empty());
        assert!(linker.topics_for_tag(42).is_empty());
    }

    #[test]
    fn test_resolve_topic_deduplicates() {
        let linker = fixture();
        assert_eq!(ids(&linker.resolve_topic(1, 5).examples), vec![100, 101]);
        assert_eq!(ids(&linker.resolve_topic(2, 9).examples), vec![103]);
        assert_eq!(linker.resolve_topic(1, 9), Resolution::default());
    }

    #[test]
    fn test_unresolved_references_are_skipped() {
        let linker = fixture();
        let resolution = linker.resolve_topic(1, 5);
        assert_eq!(ids(&resolution.examples), vec![100, 101]);
        assert_eq!(resolution.unresolved, vec![404]);
        assert!(linker.example_by_id(404).is_none());
    }

    #[test]
    fn test_history_without_example_is_dropped() {
        let linker = Linker::new(Dump {
            histories: vec![TopicHistory { tag_id: 1, topic_id: 5, example_id: None }, history(1, 5, 0)],
            examples: vec![example(0, "zero", 0, false, "x")],
            ..Default::default()
        });
        let resolution = linker.resolve_topic(1, 5);
        assert_eq!(ids(&resolution.examples), vec![0]);
        assert!(resolution.unresolved.is_empty());

        let linker = Linker::new(Dump {
            histories: vec![TopicHistory { tag_id: 1, topic_id: 5, example_id: None }],
            examples: vec![example(0, "zero", 0, false, "x")],
            ..Default::default()
        });
        assert_eq!(linker.resolve_topic(1, 5), Resolution::default());
    }

    #[test]
    fn test_example_by_id_prefers_first_record() {
        let linker = Linker::new(Dump {
            examples: vec![example(1, "first", 0, false, "x"), example(1, "second", 0, false, "y")],
            ..Default::default()
        });
        assert_eq!(linker.example_by_id(1).unwrap().title, "first");
    }

    #[test]
    fn test_example_count_is_distinct_across_topics() {
        let linker = fixture();
        // 100, 101 (shared by both topics), 102; 404 does not resolve.
        assert_eq!(linker.example_count(1), 3);
        assert_eq!(linker.example_count(2), 1);
        assert_eq!(linker.example_count(3), 0);
    }

    #[test]
    fn test_tag_stats_sorted_ascending() {
        let linker = fixture();
        let stats: Vec<(&str, usize)> =
            linker.tag_stats().iter().map(|s| (s.tag.title.as_str(), s.example_count)).collect();
        assert_eq!(stats, vec![("Empty", 0), ("Bar", 1), ("Foo", 3)]);
    }

    #[test]
    fn test_tag_by_title_is_exact() {
        let linker = fixture();
        assert_eq!(linker.tag_by_title("Foo").map(|t| t.id), Some(1));
        assert!(linker.tag_by_title("foo").is_none());
        assert!(linker.tag_by_title("Foo ").is_none());
    }
}
