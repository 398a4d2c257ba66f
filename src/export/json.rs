//! Structured JSON export: run metadata plus the full channel listing
//! grouped by label.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use tracing::info;

use super::{kolkata_now, to_kolkata, write_artifact, TIMEZONE_LABEL};
use crate::errors::ExportError;
use crate::models::AUTHOR_INFO;
use crate::store::AggregationStore;

pub const JSON_EXPORT_FILENAME: &str = "channels.json";

pub struct JsonExporter;

impl JsonExporter {
    pub fn export(store: &AggregationStore, output_dir: &Path) -> Result<PathBuf, ExportError> {
        let rendered = serde_json::to_string_pretty(&Self::render(store))?;
        let path = write_artifact(output_dir, JSON_EXPORT_FILENAME, &rendered)?;
        info!("[export] wrote JSON export to {}", path.display());
        Ok(path)
    }

    pub fn render(store: &AggregationStore) -> Value {
        let now = kolkata_now();

        let mut channels = serde_json::Map::new();
        for (group, records) in store.iter_groups() {
            let entries: Vec<Value> = records
                .iter()
                .map(|ch| {
                    json!({
                        "id": ch.id,
                        "name": ch.name,
                        "url": ch.url,
                        "logo": ch.logo,
                        "tvg_id": ch.tvg_id,
                        "source": ch.source,
                        "added_date": to_kolkata(&ch.added_at).to_rfc3339(),
                        "status": ch.status,
                    })
                })
                .collect();
            channels.insert(group.to_string(), Value::Array(entries));
        }

        json!({
            "meta": {
                "title": "Live TV Channels",
                "description": "Curated collection of live TV channels from multiple sources",
                "author": AUTHOR_INFO.name,
                "github": AUTHOR_INFO.github,
                "version": AUTHOR_INFO.version,
                "generated_at": now.to_rfc3339(),
                "generated_at_readable": now.format("%Y-%m-%d %H:%M:%S IST").to_string(),
                "timezone": TIMEZONE_LABEL,
                "total_channels": store.channel_count(),
                "total_groups": store.group_count(),
                "groups": store.group_labels(),
            },
            "channels": channels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelRecord, ChannelStatus};

    fn store_with(records: Vec<(&str, &str, &str)>) -> AggregationStore {
        let mut store = AggregationStore::new();
        for (name, group, url) in records {
            store.insert(ChannelRecord::new(
                name.to_string(),
                "http://x/logo.png".to_string(),
                group.to_string(),
                "id1".to_string(),
                "https://example.com/list.m3u",
                url.to_string(),
            ));
        }
        store
    }

    #[test]
    fn test_meta_counts_and_groups() {
        let store = store_with(vec![
            ("A", "Sports", "http://x/1.m3u8"),
            ("B", "News", "http://x/2.m3u8"),
            ("C", "News", "http://x/3.m3u8"),
        ]);
        let doc = JsonExporter::render(&store);

        assert_eq!(doc["meta"]["total_channels"], 3);
        assert_eq!(doc["meta"]["total_groups"], 2);
        assert_eq!(doc["meta"]["groups"], serde_json::json!(["News", "Sports"]));
        assert_eq!(doc["meta"]["timezone"], "Asia/Kolkata");
    }

    #[test]
    fn test_channel_field_projection() {
        let store = store_with(vec![("A", "News", "http://x/1.m3u8")]);
        let doc = JsonExporter::render(&store);

        let ch = &doc["channels"]["News"][0];
        assert_eq!(ch["name"], "A");
        assert_eq!(ch["url"], "http://x/1.m3u8");
        assert_eq!(ch["logo"], "http://x/logo.png");
        assert_eq!(ch["tvg_id"], "id1");
        assert_eq!(ch["source"], "https://example.com/list.m3u");
        assert_eq!(ch["status"], "unknown");
        assert_eq!(ch["id"].as_str().unwrap().len(), 8);
        assert!(ch["added_date"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_status_survives_projection() {
        let mut store = store_with(vec![("A", "News", "http://x/1.m3u8")]);
        let mut records = store.take_channels();
        records[0].status = ChannelStatus::Active;
        store.replace_with(records);

        let doc = JsonExporter::render(&store);
        assert_eq!(doc["channels"]["News"][0]["status"], "active");
    }
}
