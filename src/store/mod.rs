//! In-memory aggregation of channel records for a single run.
//!
//! The store owns both the group→channels mapping and the seen-URL guard:
//! every insertion goes through the guard so a stream URL is admitted at
//! most once per run regardless of how many sources list it.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::models::ChannelRecord;

/// Run-scoped channel aggregation keyed by group label.
///
/// Insertion order is preserved within a group; iterating groups yields
/// lexicographic label order, which is the order exporters emit.
#[derive(Debug, Default)]
pub struct AggregationStore {
    groups: BTreeMap<String, Vec<ChannelRecord>>,
    seen_urls: HashSet<String>,
}

impl AggregationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its URL was already admitted this run.
    /// Returns whether the record was kept.
    pub fn insert(&mut self, record: ChannelRecord) -> bool {
        if record.url.is_empty() {
            return false;
        }
        if !self.seen_urls.insert(record.url.clone()) {
            debug!("Dropping duplicate stream URL: {}", record.url);
            return false;
        }
        self.groups
            .entry(record.group.clone())
            .or_default()
            .push(record);
        true
    }

    pub fn channel_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group labels in lexicographic order.
    pub fn group_labels(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Iterate groups lexicographically, channels in insertion order.
    pub fn iter_groups(&self) -> impl Iterator<Item = (&str, &[ChannelRecord])> {
        self.groups.iter().map(|(g, chs)| (g.as_str(), chs.as_slice()))
    }

    /// All records flattened in export order.
    pub fn iter_channels(&self) -> impl Iterator<Item = &ChannelRecord> {
        self.groups.values().flatten()
    }

    /// Replace the contents with a filtered set of records, keeping the
    /// dedup guard consistent with what remains.
    pub fn replace_with(&mut self, records: Vec<ChannelRecord>) {
        self.groups.clear();
        self.seen_urls.clear();
        for record in records {
            self.insert(record);
        }
    }

    /// Drain all records out of the store in export order.
    pub fn take_channels(&mut self) -> Vec<ChannelRecord> {
        let groups = std::mem::take(&mut self.groups);
        self.seen_urls.clear();
        groups.into_values().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelRecord;

    fn record(name: &str, group: &str, url: &str) -> ChannelRecord {
        ChannelRecord::new(
            name.to_string(),
            "logo".to_string(),
            group.to_string(),
            String::new(),
            "https://example.com/source.m3u",
            url.to_string(),
        )
    }

    #[test]
    fn test_duplicate_urls_are_dropped() {
        let mut store = AggregationStore::new();
        assert!(store.insert(record("A", "News", "http://x/1.m3u8")));
        assert!(!store.insert(record("B", "Sports", "http://x/1.m3u8")));
        assert_eq!(store.channel_count(), 1);
        // The first inserter wins, including its group placement.
        assert_eq!(store.group_labels(), vec!["News"]);
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let mut store = AggregationStore::new();
        assert!(!store.insert(record("A", "News", "")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_groups_iterate_lexicographically() {
        let mut store = AggregationStore::new();
        store.insert(record("A", "Sports", "http://x/1.m3u8"));
        store.insert(record("B", "Movies", "http://x/2.m3u8"));
        store.insert(record("C", "News", "http://x/3.m3u8"));
        assert_eq!(store.group_labels(), vec!["Movies", "News", "Sports"]);
    }

    #[test]
    fn test_insertion_order_within_group() {
        let mut store = AggregationStore::new();
        store.insert(record("Zeta", "News", "http://x/1.m3u8"));
        store.insert(record("Alpha", "News", "http://x/2.m3u8"));
        let names: Vec<_> = store.iter_channels().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_replace_with_rebuilds_guard() {
        let mut store = AggregationStore::new();
        store.insert(record("A", "News", "http://x/1.m3u8"));
        store.insert(record("B", "News", "http://x/2.m3u8"));

        let kept: Vec<_> = store
            .iter_channels()
            .filter(|c| c.url.ends_with("2.m3u8"))
            .cloned()
            .collect();
        store.replace_with(kept);

        assert_eq!(store.channel_count(), 1);
        // Dropped URL is admissible again after the rebuild.
        assert!(store.insert(record("A", "News", "http://x/1.m3u8")));
    }
}
