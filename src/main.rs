mod cli;
mod config;
mod downloader;
mod error;
mod extractor;
mod filter;
mod model;
mod utils;

#[cfg(test)]
mod test_server;

use anyhow::{Context, Result};
use downloader::Fetcher;
use error::MirrorError;
use model::{Configuration, RunSummary};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = cli::parse_args();

    let default_filter = if args.verbose {
        "segments_mirror=debug"
    } else {
        "segments_mirror=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let fetcher = Fetcher::new(args.timeout.map(Duration::from_secs), args.strict_status)
        .context("building HTTP client")?
        .with_progress(!args.quiet);

    run_with_config(&args.config, &fetcher)?;
    Ok(())
}

/// Load the config, then mirror. Nothing touches the network if loading fails.
fn run_with_config(config_path: &Path, fetcher: &Fetcher) -> Result<RunSummary> {
    let config = config::load_config(config_path).context("loading configuration")?;
    let summary = mirror(fetcher, &config).context("fetching listing")?;
    Ok(summary)
}

/// Fetch the listing and download every file row, one at a time.
///
/// Only the listing fetch can fail the run; per-file errors are logged.
fn mirror(fetcher: &Fetcher, config: &Configuration) -> Result<RunSummary, MirrorError> {
    info!(
        "Start requesting segments4 data from {}",
        config.segments4_url
    );
    let body = fetcher.get_text(&config.segments4_url)?;
    let targets = extractor::parse_listing(&body);

    let mut summary = RunSummary::default();
    for target in &targets {
        summary.discovered += 1;
        info!(
            "Downloading {} (latest update {})...",
            target.href,
            target.timestamp_or_zero()
        );
        match downloader::download(fetcher, target, config) {
            Ok(report) => {
                summary.downloaded += 1;
                info!(
                    "Saved {} ({} bytes, {})",
                    report.path.display(),
                    report.bytes,
                    report.status
                );
            }
            Err(e) => {
                summary.failed += 1;
                warn!("{}: {:#}", target.href, anyhow::Error::new(e));
            }
        }
    }

    info!(
        discovered = summary.discovered,
        downloaded = summary.downloaded,
        failed = summary.failed,
        "Mirror finished"
    );
    Ok(summary)
}
