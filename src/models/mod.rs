use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default logo applied when a source carries no usable logo attribute.
pub const DEFAULT_LOGO: &str = "https://via.placeholder.com/100x100.png?text=TV";

/// Default group label for channels without a group attribute.
pub const DEFAULT_GROUP: &str = "General";

/// Default display name for channels without a name.
pub const DEFAULT_NAME: &str = "Unknown Channel";

/// Validation outcome for a channel's stream URL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChannelStatus {
    Unknown,
    Active,
    Inactive,
}

/// One playable stream entry with its display metadata.
///
/// The `id` is deterministic: two runs over the same source yield the same
/// id for the same channel, so downstream consumers can diff exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelRecord {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub group: String,
    pub tvg_id: String,
    pub source: String,
    pub added_at: DateTime<Utc>,
    pub url: String,
    pub status: ChannelStatus,
}

impl ChannelRecord {
    pub fn new(
        name: String,
        logo: String,
        group: String,
        tvg_id: String,
        source: &str,
        url: String,
    ) -> Self {
        Self {
            id: channel_id(&name, source),
            name,
            logo,
            group,
            tvg_id,
            source: source.to_string(),
            added_at: Utc::now(),
            url,
            status: ChannelStatus::Unknown,
        }
    }
}

/// Derive the deterministic channel id from display name and source URL.
///
/// First 8 hex characters of md5("{name}_{source_url}").
pub fn channel_id(name: &str, source_url: &str) -> String {
    let digest = md5::compute(format!("{}_{}", name, source_url).as_bytes());
    format!("{:x}", digest)[..8].to_string()
}

/// Static generator identity embedded in the exported artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorInfo {
    pub name: &'static str,
    pub github: &'static str,
    pub version: &'static str,
}

pub const AUTHOR_INFO: AuthorInfo = AuthorInfo {
    name: "m3u-aggregator",
    github: "https://github.com/m3u-aggregator/m3u-aggregator",
    version: env!("CARGO_PKG_VERSION"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_is_deterministic() {
        let a = channel_id("Channel One", "https://example.com/list.m3u");
        let b = channel_id("Channel One", "https://example.com/list.m3u");
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn test_channel_id_varies_with_inputs() {
        let a = channel_id("Channel One", "https://example.com/list.m3u");
        let b = channel_id("Channel Two", "https://example.com/list.m3u");
        let c = channel_id("Channel One", "https://example.org/list.m3u");
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChannelStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&ChannelStatus::Unknown).unwrap(),
            "\"unknown\""
        );
    }
}
