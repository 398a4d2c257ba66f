//! HTML link scraper.
//!
//! Does not emit channel records itself: it harvests candidate playlist
//! URLs from anchor and script elements, resolves them against the page's
//! origin, and hands the survivors back to the driver for a second fetch
//! pass through the M3U parser.

use std::collections::BTreeSet;

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::info;

use crate::utils::url::{is_valid_stream_url, resolve_href};

/// Element selectors whose URL attribute hints at a playlist or stream.
const LINK_SELECTORS: &[(&str, &str)] = &[
    (r#"a[href*=".m3u"]"#, "href"),
    (r#"a[href*=".m3u8"]"#, "href"),
    (r#"a[href*="playlist"]"#, "href"),
    (r#"a[href*="stream"]"#, "href"),
    (r#"script[src*=".m3u"]"#, "src"),
    (r#"script[src*=".m3u8"]"#, "src"),
];

pub struct HtmlScraper {
    selectors: Vec<(Selector, &'static str)>,
}

impl HtmlScraper {
    pub fn new() -> Self {
        let selectors = LINK_SELECTORS
            .iter()
            .map(|(sel, attr)| (Selector::parse(sel).expect("valid selector"), *attr))
            .collect();
        Self { selectors }
    }

    /// Extract secondary playlist URLs from an HTML page.
    pub fn extract_stream_urls(&self, html: &str, base_url: &str) -> BTreeSet<String> {
        let mut urls = BTreeSet::new();
        if html.is_empty() {
            return urls;
        }

        let document = Html::parse_document(html);
        for (selector, attr) in &self.selectors {
            for element in document.select(selector) {
                let Some(href) = element.value().attr(attr) else {
                    continue;
                };
                let Some(absolute) = resolve_href(href, base_url) else {
                    continue;
                };
                if is_valid_stream_url(&absolute) {
                    urls.insert(absolute);
                }
            }
        }

        // Some "HTML" sources actually serve a bare JSON array of
        // {url: ...} objects; try that as a fallback extraction path.
        if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(html) {
            for item in items {
                if let Some(url) = item.get("url").and_then(Value::as_str) {
                    if is_valid_stream_url(url) {
                        urls.insert(url.to_string());
                    }
                }
            }
        }

        info!("[html] extracted {} stream URLs from {}", urls.len(), base_url);
        urls
    }
}

impl Default for HtmlScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://example.com/page.html";

    fn extract(html: &str) -> BTreeSet<String> {
        HtmlScraper::new().extract_stream_urls(html, PAGE_URL)
    }

    #[test]
    fn test_relative_href_resolves_against_origin() {
        let urls = extract(r#"<html><body><a href="video.m3u8">tv</a></body></html>"#);
        assert!(urls.contains("https://example.com/video.m3u8"));
    }

    #[test]
    fn test_excluded_domains_are_rejected() {
        let urls = extract(
            r#"<a href="https://facebook.com/x.m3u8">fb</a>
               <a href="https://cdn.example.com/ok.m3u8">ok</a>"#,
        );
        assert_eq!(urls.len(), 1);
        assert!(urls.contains("https://cdn.example.com/ok.m3u8"));
    }

    #[test]
    fn test_script_src_and_playlist_hints() {
        let urls = extract(
            r#"<script src="/assets/feed.m3u8"></script>
               <a href="https://example.org/playlist?id=3">list</a>"#,
        );
        assert!(urls.contains("https://example.com/assets/feed.m3u8"));
        assert!(urls.contains("https://example.org/playlist?id=3"));
    }

    #[test]
    fn test_json_array_fallback_extraction() {
        let urls = extract(r#"[{"url": "http://cdn.example.com/a.m3u8"}, {"name": "x"}]"#);
        assert_eq!(urls.len(), 1);
        assert!(urls.contains("http://cdn.example.com/a.m3u8"));
    }

    #[test]
    fn test_empty_page_yields_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("<html><body><p>no links</p></body></html>").is_empty());
    }
}
