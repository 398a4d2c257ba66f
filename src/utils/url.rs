//! Stream-URL helpers: validity filtering, scheme flipping, and
//! resolution of relative links against their origin page.

use regex::RegexSet;
use std::sync::OnceLock;
use url::Url;

/// Substrings that disqualify a URL as a stream candidate: social media,
/// tracking/ad hints, markup pages, auth pages.
const EXCLUDE_PATTERNS: &[&str] = &[
    "telegram",
    ".html",
    ".php",
    "github.com",
    "login",
    "signup",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "youtube.com",
    "ads",
    "advertising",
    "tracker",
    "analytics",
];

fn valid_patterns() -> &'static RegexSet {
    static SET: OnceLock<RegexSet> = OnceLock::new();
    SET.get_or_init(|| {
        RegexSet::new([
            r"\.m3u8?$",
            r"\.ts$",
            r"\.mp4$",
            r"playlist",
            r"stream",
            r"live",
            r"rtmp://",
            r"rtsp://",
        ])
        .expect("stream URL patterns are valid regexes")
    })
}

/// Decide whether a scraped URL plausibly points at a playable stream or
/// playlist. Both checks are case-insensitive: any excluded substring
/// rejects, then at least one accept pattern must match.
pub fn is_valid_stream_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let url_lower = url.to_lowercase();
    if EXCLUDE_PATTERNS.iter().any(|p| url_lower.contains(p)) {
        return false;
    }

    valid_patterns().is_match(&url_lower)
}

/// Swap http and https on a URL. Returns `None` when the URL uses neither
/// scheme (nothing to flip for rtmp/rtsp streams).
pub fn flip_scheme(url: &str) -> Option<String> {
    if let Some(rest) = url.strip_prefix("https://") {
        Some(format!("http://{}", rest))
    } else {
        url.strip_prefix("http://")
            .map(|rest| format!("https://{}", rest))
    }
}

/// Resolve an href found on `base_url` to an absolute URL.
///
/// Already-absolute links pass through. Relative links resolve against the
/// page's scheme and host only: both `/path` and `path` are taken from the
/// host root, matching how index pages in the wild link their playlists.
pub fn resolve_href(href: &str, base_url: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }

    let base = Url::parse(base_url).ok()?;
    let host = base.host_str()?;
    let origin = match base.port() {
        Some(port) => format!("{}://{}:{}", base.scheme(), host, port),
        None => format!("{}://{}", base.scheme(), host),
    };

    if let Some(path) = href.strip_prefix('/') {
        Some(format!("{}/{}", origin, path))
    } else {
        Some(format!("{}/{}", origin, href))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_stream_urls() {
        assert!(is_valid_stream_url("https://example.com/video.m3u8"));
        assert!(is_valid_stream_url("https://example.com/list.m3u"));
        assert!(is_valid_stream_url("https://example.com/chunk.ts"));
        assert!(is_valid_stream_url("https://example.com/clip.mp4"));
        assert!(is_valid_stream_url("https://example.com/playlist?id=7"));
        assert!(is_valid_stream_url("rtmp://example.com/app"));
        assert!(is_valid_stream_url("https://cdn.example.com/live/feed"));
    }

    #[test]
    fn test_rejects_excluded_domains_and_pages() {
        assert!(!is_valid_stream_url("https://facebook.com/x.m3u8"));
        assert!(!is_valid_stream_url("https://youtube.com/watch?v=1"));
        assert!(!is_valid_stream_url("https://example.com/page.html"));
        assert!(!is_valid_stream_url("https://example.com/login/stream"));
        assert!(!is_valid_stream_url("https://tracker.example.com/live.m3u8"));
        assert!(!is_valid_stream_url(""));
    }

    #[test]
    fn test_rejects_urls_without_stream_hint() {
        assert!(!is_valid_stream_url("https://example.com/about"));
        assert!(!is_valid_stream_url("https://example.com/image.png"));
    }

    #[test]
    fn test_flip_scheme() {
        assert_eq!(
            flip_scheme("https://example.com/a.m3u8").as_deref(),
            Some("http://example.com/a.m3u8")
        );
        assert_eq!(
            flip_scheme("http://example.com/a.m3u8").as_deref(),
            Some("https://example.com/a.m3u8")
        );
        assert_eq!(flip_scheme("rtmp://example.com/app"), None);
    }

    #[test]
    fn test_resolve_href_variants() {
        let base = "https://example.com/page.html";
        assert_eq!(
            resolve_href("video.m3u8", base).as_deref(),
            Some("https://example.com/video.m3u8")
        );
        assert_eq!(
            resolve_href("/files/video.m3u8", base).as_deref(),
            Some("https://example.com/files/video.m3u8")
        );
        assert_eq!(
            resolve_href("https://cdn.example.com/v.m3u8", base).as_deref(),
            Some("https://cdn.example.com/v.m3u8")
        );
    }

    #[test]
    fn test_resolve_href_keeps_port() {
        assert_eq!(
            resolve_href("tv.m3u8", "http://example.com:8080/index.html").as_deref(),
            Some("http://example.com:8080/tv.m3u8")
        );
    }
}
