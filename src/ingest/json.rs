//! JSON catalog parser.
//!
//! Expects a top-level array of channel objects. Objects without a `url`
//! field are not channels and are skipped; display fields fall back
//! through alternate key names before hitting the shared defaults.

use serde_json::Value;
use tracing::{error, info};

use crate::errors::SourceError;
use crate::models::{ChannelRecord, DEFAULT_GROUP, DEFAULT_LOGO, DEFAULT_NAME};
use crate::store::AggregationStore;

pub struct JsonCatalogParser;

impl JsonCatalogParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON catalog body, inserting channels into the store.
    /// Returns the number admitted past the dedup guard; malformed JSON
    /// is an error the driver logs and skips.
    pub fn parse(
        &self,
        content: &str,
        source_url: &str,
        store: &mut AggregationStore,
    ) -> Result<usize, SourceError> {
        let data: Value = serde_json::from_str(content).map_err(|e| {
            error!("[json] failed to parse catalog from {}: {}", source_url, e);
            SourceError::parse_error("json", e.to_string())
        })?;

        let mut inserted = 0;

        if let Value::Array(items) = data {
            for item in items {
                let Value::Object(obj) = item else { continue };
                let Some(url) = non_empty_str(obj.get("url")) else {
                    continue;
                };

                let name = non_empty_str(obj.get("name"))
                    .unwrap_or(DEFAULT_NAME)
                    .to_string();
                let logo = non_empty_str(obj.get("img"))
                    .or_else(|| non_empty_str(obj.get("logo")))
                    .unwrap_or(DEFAULT_LOGO)
                    .to_string();
                let group = non_empty_str(obj.get("type"))
                    .or_else(|| non_empty_str(obj.get("category")))
                    .unwrap_or(DEFAULT_GROUP)
                    .to_string();

                let record = ChannelRecord::new(
                    name,
                    logo,
                    group,
                    String::new(),
                    source_url,
                    url.to_string(),
                );
                if store.insert(record) {
                    inserted += 1;
                }
            }
        }

        info!("[json] parsed {} channels from {}", inserted, source_url);
        Ok(inserted)
    }
}

impl Default for JsonCatalogParser {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}
