//! `urlsift` batch run: config → input → dedupe → worker pool.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};
use std::sync::Arc;
use urlsift_core::config::{self, UrlsiftConfig};
use urlsift_core::dedupe::dedupe;
use urlsift_core::fetch::{CurlFetcher, FetchOptions};
use urlsift_core::input;
use urlsift_core::pool::{self, Output, PoolSettings, PoolSummary};

use super::Cli;

/// Config file (explicit or XDG default) with CLI flags applied on top.
pub fn effective_config(cli: &Cli) -> Result<UrlsiftConfig> {
    let mut cfg = match &cli.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load_or_default()?,
    };
    cli.apply(&mut cfg);
    cfg.validate()?;
    tracing::debug!("effective config: {:?}", cfg);
    Ok(cfg)
}

/// Load URLs, run the pool to completion and return its summary.
///
/// Fails only before dispatch (bad config, unreadable input, no URLs) or if
/// the pool itself breaks; per-URL failures are reported through `output`.
pub async fn run_batch<R, O, E>(cli: &Cli, stdin: R, output: Output<O, E>) -> Result<PoolSummary>
where
    R: BufRead,
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    let cfg = effective_config(cli)?;

    let urls = input::load_urls(cli.urls.as_deref(), stdin)?;
    if urls.is_empty() {
        bail!("no URLs provided");
    }
    let urls = dedupe(urls);

    let fetcher = Arc::new(CurlFetcher::new(FetchOptions::from(&cfg.fetch)));
    let settings = PoolSettings::from(&cfg);
    let (summary, _) = pool::run_async(urls, fetcher, settings, output)
        .await
        .context("worker pool")?;

    tracing::info!(
        "run finished: {} url(s), {} endpoint(s), {} failed, {} unresolved",
        summary.processed,
        summary.endpoints,
        summary.failed,
        summary.unresolved
    );
    Ok(summary)
}
