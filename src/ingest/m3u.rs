//! M3U playlist parser.
//!
//! A two-state line machine: an `#EXTINF:` directive opens a pending
//! channel, the next line carrying a stream scheme completes it. A fresh
//! `#EXTINF:` discards any pending channel that never saw its URL line.

use regex::Regex;
use tracing::info;

use super::has_stream_scheme;
use crate::models::{ChannelRecord, DEFAULT_GROUP, DEFAULT_LOGO, DEFAULT_NAME};
use crate::store::AggregationStore;

pub struct M3uParser {
    logo_re: Regex,
    group_re: Regex,
    tvg_id_re: Regex,
    whitespace_re: Regex,
}

struct PendingChannel {
    name: String,
    logo: String,
    group: String,
    tvg_id: String,
}

impl M3uParser {
    pub fn new() -> Self {
        Self {
            logo_re: Regex::new(r#"tvg-logo="([^"]*)""#).expect("valid regex"),
            group_re: Regex::new(r#"group-title="([^"]*)""#).expect("valid regex"),
            tvg_id_re: Regex::new(r#"tvg-id="([^"]*)""#).expect("valid regex"),
            whitespace_re: Regex::new(r"\s+").expect("valid regex"),
        }
    }

    /// Parse playlist lines, inserting completed channels into the store.
    /// Returns the number of channels admitted past the dedup guard.
    pub fn parse(
        &self,
        lines: &[String],
        source_url: &str,
        store: &mut AggregationStore,
    ) -> usize {
        let mut pending: Option<PendingChannel> = None;
        let mut inserted = 0;

        for line in lines {
            let line = line.trim();

            if line.starts_with("#EXTINF:") {
                pending = Some(self.parse_extinf_line(line));
            } else if has_stream_scheme(line) {
                if let Some(channel) = pending.take() {
                    let record = ChannelRecord::new(
                        channel.name,
                        channel.logo,
                        channel.group,
                        channel.tvg_id,
                        source_url,
                        line.to_string(),
                    );
                    if store.insert(record) {
                        inserted += 1;
                    }
                }
            }
        }

        info!("[m3u] parsed {} channels from {}", inserted, source_url);
        inserted
    }

    fn parse_extinf_line(&self, line: &str) -> PendingChannel {
        let logo = self
            .logo_re
            .captures(line)
            .map(|c| c[1].to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOGO.to_string());

        let group = self
            .group_re
            .captures(line)
            .map(|c| c[1].to_string())
            .unwrap_or_else(|| DEFAULT_GROUP.to_string());

        let tvg_id = self
            .tvg_id_re
            .captures(line)
            .map(|c| c[1].to_string())
            .unwrap_or_default();

        // The display name is the free text after the final comma;
        // attribute values may themselves contain commas.
        let name = line
            .rfind(',')
            .map(|pos| line[pos + 1..].trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());
        let name = self.whitespace_re.replace_all(&name, " ").trim().to_string();

        PendingChannel {
            name,
            logo,
            group,
            tvg_id,
        }
    }
}

impl Default for M3uParser {
    fn default() -> Self {
        Self::new()
    }
}
