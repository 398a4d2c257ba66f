//! Pipeline driver.
//!
//! Owns every piece of run-scoped state (store, parsers, fetcher) and
//! walks the stages in order: sequential fetch-and-parse over the source
//! list, a second fetch pass over playlist URLs discovered by the HTML
//! scraper, concurrent link validation, then the three exports.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{JsonExporter, M3uExporter, StatsExporter};
use crate::fetch::Fetcher;
use crate::ingest::{classify, ContentKind, HtmlScraper, JsonCatalogParser, M3uParser};
use crate::store::AggregationStore;
use crate::validator::{HttpProber, LinkValidator};

/// Totals and artifact paths for a completed run.
#[derive(Debug)]
pub struct RunSummary {
    pub total_channels: usize,
    pub total_groups: usize,
    pub validation_ran: bool,
    pub output_dir: PathBuf,
    pub artifacts: Vec<PathBuf>,
}

pub struct Collector {
    config: Config,
    fetcher: Fetcher,
    m3u_parser: M3uParser,
    json_parser: JsonCatalogParser,
    html_scraper: HtmlScraper,
    store: AggregationStore,
}

impl Collector {
    pub fn new(config: Config) -> Self {
        let fetcher = Fetcher::new(config.fetch.max_retries, config.fetch.timeout_secs);
        Self {
            config,
            fetcher,
            m3u_parser: M3uParser::new(),
            json_parser: JsonCatalogParser::new(),
            html_scraper: HtmlScraper::new(),
            store: AggregationStore::new(),
        }
    }

    pub fn store(&self) -> &AggregationStore {
        &self.store
    }

    /// Run the full pipeline over the given source list.
    pub async fn run(&mut self, source_urls: &[&str]) -> AppResult<RunSummary> {
        self.ingest_sources(source_urls).await;

        let validation_ran = self.config.validation.enabled && !self.store.is_empty();
        if self.store.is_empty() {
            warn!("[run] no channels found from any source");
        } else if validation_ran {
            let prober = HttpProber::new(self.config.validation.probe_timeout_secs);
            let validator = LinkValidator::new(prober, self.config.validation.max_workers);
            validator.filter_active(&mut self.store).await;
        } else {
            info!("[run] link validation skipped");
        }

        let output_dir = self.config.output_dir();
        let artifacts = vec![
            JsonExporter::export(&self.store, &output_dir)?,
            M3uExporter::export(&self.store, &output_dir)?,
            StatsExporter::export(&self.store, validation_ran, &output_dir)?,
        ];

        Ok(RunSummary {
            total_channels: self.store.channel_count(),
            total_groups: self.store.group_count(),
            validation_ran,
            output_dir,
            artifacts,
        })
    }

    /// First pass: fetch and parse every source in order. HTML sources
    /// contribute discovered playlist URLs, fetched and parsed as M3U in a
    /// second pass. Failed sources are skipped, never fatal.
    async fn ingest_sources(&mut self, source_urls: &[&str]) {
        info!("[run] processing {} sources", source_urls.len());
        let mut discovered: BTreeSet<String> = BTreeSet::new();

        for (i, url) in source_urls.iter().enumerate() {
            info!("[source] {}/{}: {}", i + 1, source_urls.len(), url);

            let fetched = match self.fetcher.fetch(url).await {
                Ok(fetched) => fetched,
                Err(e) => {
                    warn!("[source] skipping {}: {}", url, e);
                    continue;
                }
            };

            match classify(url, &fetched.content) {
                ContentKind::Html => {
                    let urls = self.html_scraper.extract_stream_urls(&fetched.content, url);
                    discovered.extend(urls);
                }
                ContentKind::Json => {
                    if let Err(e) = self.json_parser.parse(&fetched.content, url, &mut self.store)
                    {
                        warn!("[source] skipping {}: {}", url, e);
                    }
                }
                ContentKind::M3u => {
                    self.m3u_parser.parse(&fetched.lines, url, &mut self.store);
                }
            }
        }

        for url in discovered {
            info!("[source] discovered playlist: {}", url);
            match self.fetcher.fetch(&url).await {
                Ok(fetched) => {
                    self.m3u_parser.parse(&fetched.lines, &url, &mut self.store);
                }
                Err(e) => warn!("[source] skipping discovered {}: {}", url, e),
            }
        }
    }
}
