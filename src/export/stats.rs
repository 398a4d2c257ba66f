//! Statistics summary export.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::info;

use super::{kolkata_now, write_artifact};
use crate::errors::ExportError;
use crate::models::{ChannelStatus, AUTHOR_INFO};
use crate::store::AggregationStore;

pub const STATS_EXPORT_FILENAME: &str = "stats.json";

/// Sentinel emitted for `active_channels` when validation was skipped.
pub const NOT_CHECKED: &str = "not_checked";

pub struct StatsExporter;

impl StatsExporter {
    pub fn export(
        store: &AggregationStore,
        validation_ran: bool,
        output_dir: &Path,
    ) -> Result<PathBuf, ExportError> {
        let rendered = serde_json::to_string_pretty(&Self::render(store, validation_ran))?;
        let path = write_artifact(output_dir, STATS_EXPORT_FILENAME, &rendered)?;
        info!("[export] wrote stats to {}", path.display());
        Ok(path)
    }

    pub fn render(store: &AggregationStore, validation_ran: bool) -> Value {
        let breakdown: serde_json::Map<String, Value> = store
            .iter_groups()
            .map(|(group, records)| (group.to_string(), json!(records.len())))
            .collect();

        let active_channels = if validation_ran {
            json!(store
                .iter_channels()
                .filter(|ch| ch.status == ChannelStatus::Active)
                .count())
        } else {
            json!(NOT_CHECKED)
        };

        json!({
            "generated_at": kolkata_now().to_rfc3339(),
            "total_channels": store.channel_count(),
            "total_groups": store.group_count(),
            "groups_breakdown": breakdown,
            "author": AUTHOR_INFO,
            "active_channels": active_channels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelRecord;

    fn store_with_statuses(statuses: &[ChannelStatus]) -> AggregationStore {
        let mut store = AggregationStore::new();
        let records = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut r = ChannelRecord::new(
                    format!("Channel {}", i),
                    "logo".to_string(),
                    if i % 2 == 0 { "News" } else { "Sports" }.to_string(),
                    String::new(),
                    "https://example.com/list.m3u",
                    format!("http://x/{}.m3u8", i),
                );
                r.status = *status;
                r
            })
            .collect();
        store.replace_with(records);
        store
    }

    #[test]
    fn test_counts_and_breakdown() {
        let store = store_with_statuses(&[
            ChannelStatus::Active,
            ChannelStatus::Active,
            ChannelStatus::Active,
        ]);
        let stats = StatsExporter::render(&store, true);

        assert_eq!(stats["total_channels"], 3);
        assert_eq!(stats["total_groups"], 2);
        assert_eq!(stats["groups_breakdown"]["News"], 2);
        assert_eq!(stats["groups_breakdown"]["Sports"], 1);
        assert_eq!(stats["active_channels"], 3);
        assert_eq!(stats["author"]["name"], AUTHOR_INFO.name);
    }

    #[test]
    fn test_sentinel_when_validation_skipped() {
        let store = store_with_statuses(&[ChannelStatus::Unknown, ChannelStatus::Unknown]);
        let stats = StatsExporter::render(&store, false);
        assert_eq!(stats["active_channels"], NOT_CHECKED);
    }
}
