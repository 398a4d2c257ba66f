//! M3U playlist export.

use std::path::{Path, PathBuf};

use tracing::info;

use super::write_artifact;
use crate::errors::ExportError;
use crate::models::AUTHOR_INFO;
use crate::store::AggregationStore;

pub const M3U_EXPORT_FILENAME: &str = "playlist.m3u";

pub struct M3uExporter;

impl M3uExporter {
    pub fn export(store: &AggregationStore, output_dir: &Path) -> Result<PathBuf, ExportError> {
        let rendered = Self::render(store);
        let path = write_artifact(output_dir, M3U_EXPORT_FILENAME, &rendered)?;
        info!("[export] wrote M3U playlist to {}", path.display());
        Ok(path)
    }

    pub fn render(store: &AggregationStore) -> String {
        let mut m3u = String::from("#EXTM3U\n");
        m3u.push_str(&format!(
            "#EXTINF:-1,Live TV - Generated by {}\n",
            AUTHOR_INFO.name
        ));
        m3u.push_str(&format!(
            "#EXTVLCOPT:http-user-agent={}/{}\n\n",
            AUTHOR_INFO.name, AUTHOR_INFO.version
        ));

        for (group, records) in store.iter_groups() {
            for ch in records {
                m3u.push_str(&format!(
                    "#EXTINF:-1 tvg-id=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}\n",
                    ch.tvg_id, ch.logo, group, ch.name
                ));
                m3u.push_str(&format!("{}\n", ch.url));
            }
        }

        m3u
    }
}
