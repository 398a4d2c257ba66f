use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_aggregator::{
    config::{validation_skipped_by_env, Config},
    pipeline::Collector,
    sources::SOURCE_URLS,
};

#[derive(Parser)]
#[command(name = "m3u-aggregator")]
#[command(version)]
#[command(about = "A multi-source M3U playlist aggregator with link validation and export")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Skip the link-validation stage (same effect as SKIP_LINK_CHECK=true)
    #[arg(long)]
    skip_validation: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("m3u_aggregator={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting M3U Aggregator v{}", env!("CARGO_PKG_VERSION"));

    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    if cli.skip_validation || validation_skipped_by_env() {
        config.validation.enabled = false;
        info!("Link validation disabled for this run");
    }

    let mut collector = Collector::new(config);
    let summary = collector.run(SOURCE_URLS).await?;

    info!("Collection complete");
    info!("Total channels: {}", summary.total_channels);
    info!("Total groups: {}", summary.total_groups);
    info!("Output directory: {}", summary.output_dir.display());
    for artifact in &summary.artifacts {
        info!("Wrote {}", artifact.display());
    }

    if summary.total_channels == 0 {
        warn!("No channels collected; check connectivity and source URLs");
        anyhow::bail!("no channels collected from any source");
    }

    Ok(())
}
