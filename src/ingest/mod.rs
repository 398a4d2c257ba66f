//! Content classification and the three source parsers.
//!
//! Classification is purely syntactic and deliberately heuristic: the URL
//! is inspected first, then the first 100 characters of the body. A JSON
//! catalog served from an extensionless URL without "json" near the top
//! will route to the M3U parser; that misrouting is accepted behavior.

pub mod html;
pub mod json;
pub mod m3u;

pub use html::HtmlScraper;
pub use json::JsonCatalogParser;
pub use m3u::M3uParser;

/// How a fetched source should be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
    M3u,
}

/// Classify a source by URL shape, falling back to a peek at the body.
pub fn classify(url: &str, content: &str) -> ContentKind {
    let url_lower = url.to_lowercase();
    if url_lower.ends_with(".html") || url_lower.contains("html") {
        return ContentKind::Html;
    }

    let head: String = content.chars().take(100).collect::<String>().to_lowercase();
    if url_lower.ends_with(".json") || head.contains("json") {
        return ContentKind::Json;
    }

    ContentKind::M3u
}

/// URL schemes recognized as playable stream locations.
pub const STREAM_SCHEMES: &[&str] = &["http://", "https://", "rtmp://", "rtsp://"];

pub fn has_stream_scheme(line: &str) -> bool {
    STREAM_SCHEMES.iter().any(|s| line.starts_with(s))
}
