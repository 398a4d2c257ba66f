//! Source fetching with bounded retries.

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::errors::{AppResult, SourceError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Raw content retrieved from a source URL.
///
/// `lines` is the line-split view text parsers consume; when the response
/// declared a JSON content type the body is kept as a single unit instead.
#[derive(Debug, Clone)]
pub struct FetchedContent {
    pub content: String,
    pub lines: Vec<String>,
}

pub struct Fetcher {
    client: Client,
    max_retries: u32,
}

impl Fetcher {
    pub fn new(max_retries: u32, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            max_retries,
        }
    }

    /// Fetch a source URL, retrying immediately on failure up to the
    /// configured attempt budget. No backoff between attempts.
    pub async fn fetch(&self, url: &str) -> AppResult<FetchedContent> {
        for attempt in 1..=self.max_retries {
            match self.fetch_once(url).await {
                Ok(Some(fetched)) => {
                    info!("[fetch] {} lines from {}", fetched.lines.len(), url);
                    return Ok(fetched);
                }
                Ok(None) => {
                    warn!("[fetch] no content from {}", url);
                }
                Err(e) => {
                    warn!(
                        "[fetch] attempt {}/{} failed for {}: {}",
                        attempt, self.max_retries, url, e
                    );
                }
            }
        }

        Err(SourceError::retries_exhausted(url, self.max_retries).into())
    }

    async fn fetch_once(&self, url: &str) -> Result<Option<FetchedContent>, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.to_lowercase().contains("json"))
            .unwrap_or(false);

        let body = response.text().await?;

        Ok(split_content(body, is_json))
    }
}

fn split_content(body: String, is_json: bool) -> Option<FetchedContent> {
    if is_json {
        if body.is_empty() {
            return None;
        }
        return Some(FetchedContent {
            lines: vec![body.clone()],
            content: body,
        });
    }

    let lines: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return None;
    }

    let content = lines.join("\n");
    Some(FetchedContent { content, lines })
}
