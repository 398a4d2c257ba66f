//! Concurrent link validation.
//!
//! Every unique stream URL in the store is probed through a bounded pool
//! of in-flight checks; outcomes flow back to a single collector that owns
//! the status cache, so no lock is shared between probes. The store is
//! then rebuilt with only the channels whose URL answered.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use futures::{stream, StreamExt};
use reqwest::Client;
use tracing::{debug, info};

use crate::models::ChannelStatus;
use crate::store::AggregationStore;
use crate::utils::url::flip_scheme;

/// Result of probing one URL: whether anything answered, and the URL that
/// did (the original, or its scheme-flipped variant).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub alive: bool,
    pub resolved_url: String,
}

impl ProbeOutcome {
    fn alive(url: impl Into<String>) -> Self {
        Self {
            alive: true,
            resolved_url: url.into(),
        }
    }

    fn dead(url: impl Into<String>) -> Self {
        Self {
            alive: false,
            resolved_url: url.into(),
        }
    }
}

/// Liveness probe for a single stream URL.
#[async_trait]
pub trait LinkProber: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// HTTP prober implementing the fallback chain, short-circuiting on the
/// first success:
/// 1. header-only request, success below status 400;
/// 2. streamed GET (body never downloaded) with the same threshold;
/// 3. one header-only retry with the http/https scheme flipped.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    async fn head_ok(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().as_u16() < 400,
            Err(_) => false,
        }
    }

    async fn get_ok(&self, url: &str) -> bool {
        // The response body is left unread; only the status matters.
        match self.client.get(url).send().await {
            Ok(response) => response.status().as_u16() < 400,
            Err(_) => false,
        }
    }
}

#[async_trait]
impl LinkProber for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        if self.head_ok(url).await {
            return ProbeOutcome::alive(url);
        }
        if self.get_ok(url).await {
            return ProbeOutcome::alive(url);
        }
        if let Some(alt) = flip_scheme(url) {
            if self.head_ok(&alt).await {
                return ProbeOutcome::alive(alt);
            }
        }
        ProbeOutcome::dead(url)
    }
}

pub struct LinkValidator<P> {
    prober: P,
    max_workers: usize,
}

impl<P: LinkProber> LinkValidator<P> {
    pub fn new(prober: P, max_workers: usize) -> Self {
        Self {
            prober,
            max_workers,
        }
    }

    /// Probe every channel URL and shrink the store to active channels.
    ///
    /// Repeated URLs are probed once; each surviving record's URL is
    /// rewritten to the resolved variant. All launched probes run to
    /// completion before the store is touched.
    pub async fn filter_active(&self, store: &mut AggregationStore) {
        let unique_urls: Vec<String> = store
            .iter_channels()
            .map(|ch| ch.url.clone())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let total_channels = store.channel_count();
        info!(
            "[validate] probing {} unique URLs across {} channels",
            unique_urls.len(),
            total_channels
        );

        let prober = &self.prober;
        let mut probes = stream::iter(unique_urls.into_iter().map(|url| async move {
            let outcome = prober.probe(&url).await;
            (url, outcome)
        }))
        .buffer_unordered(self.max_workers);

        // Single collector owns the status cache; probe tasks only hand
        // their results over the stream.
        let mut cache: HashMap<String, ProbeOutcome> = HashMap::new();
        let mut completed = 0usize;
        while let Some((url, outcome)) = probes.next().await {
            completed += 1;
            if completed % 50 == 0 {
                info!("[validate] probed {} URLs", completed);
            }
            cache.insert(url, outcome);
        }

        let mut active = Vec::new();
        for mut record in store.take_channels() {
            match cache.get(&record.url) {
                Some(outcome) if outcome.alive => {
                    record.url = outcome.resolved_url.clone();
                    record.status = ChannelStatus::Active;
                    active.push(record);
                }
                _ => {
                    record.status = ChannelStatus::Inactive;
                    debug!("[validate] dropping inactive channel: {}", record.name);
                }
            }
        }

        info!(
            "[validate] complete: {}/{} channels active",
            active.len(),
            total_channels
        );
        store.replace_with(active);
    }
}
