//! Artifact exporters.
//!
//! Three independent read-only passes over the final store: a structured
//! JSON export, an M3U playlist, and a statistics summary. Rendering is
//! kept separate from writing so the output formats are testable without
//! touching the filesystem.

pub mod json;
pub mod m3u;
pub mod stats;

pub use json::JsonExporter;
pub use m3u::M3uExporter;
pub use stats::StatsExporter;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;
use chrono_tz::Tz;

use crate::errors::ExportError;

/// All generation timestamps are rendered in this fixed timezone.
pub const TIMEZONE_LABEL: &str = "Asia/Kolkata";

pub(crate) fn kolkata_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Kolkata)
}

pub(crate) fn to_kolkata(dt: &DateTime<Utc>) -> DateTime<Tz> {
    dt.with_timezone(&Kolkata)
}

pub(crate) fn write_artifact(dir: &Path, filename: &str, contents: &str) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::io(dir.display().to_string(), e))?;
    let path = dir.join(filename);
    std::fs::write(&path, contents).map_err(|e| ExportError::io(path.display().to_string(), e))?;
    Ok(path)
}
