//! CLI for urlsift.

mod args;
mod run;

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use urlsift_core::config::UrlsiftConfig;
use urlsift_core::pool::Output;

pub use args::normalize_args;
pub use run::run_batch;

/// Fetch URLs and print the endpoints found in their bodies.
#[derive(Debug, Parser)]
#[command(name = "urlsift", version)]
#[command(about = "Extract URLs and endpoint paths from fetched pages", long_about = None)]
#[command(after_help = "Usage: cat urls.txt | urlsift -c 10")]
pub struct Cli {
    /// File containing URLs, one per line. Without it, URLs are read from stdin.
    #[arg(long, value_name = "PATH")]
    pub urls: Option<PathBuf>,

    /// Concurrency level (number of workers). Defaults to the config file value, else 1.
    #[arg(short = 'c', long, value_name = "N", value_parser = positive_usize)]
    pub concurrency: Option<usize>,

    /// Ignore and suppress error messages.
    #[arg(long = "nd", visible_alias = "no-errors")]
    pub no_errors: bool,

    /// Per-request timeout in seconds (0 = no timeout).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Connect timeout in seconds (0 = libcurl default).
    #[arg(long, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Verify TLS certificates (off by default).
    #[arg(long)]
    pub verify_tls: bool,

    /// User-Agent header to send.
    #[arg(long, value_name = "UA")]
    pub user_agent: Option<String>,

    /// Config file to use instead of ~/.config/urlsift/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Apply flags on top of file/default configuration.
    pub fn apply(&self, cfg: &mut UrlsiftConfig) {
        if let Some(n) = self.concurrency {
            cfg.concurrency = n;
        }
        if self.no_errors {
            cfg.suppress_errors = true;
        }
        if let Some(t) = self.timeout {
            cfg.fetch.timeout_secs = t;
        }
        if let Some(t) = self.connect_timeout {
            cfg.fetch.connect_timeout_secs = t;
        }
        if self.verify_tls {
            cfg.fetch.verify_tls = true;
        }
        if let Some(ua) = &self.user_agent {
            cfg.fetch.user_agent = Some(ua.clone());
        }
    }
}

fn positive_usize(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

pub async fn run_from_args() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let output = Output::new(BufWriter::new(io::stdout()), io::stderr());
    run_batch(&cli, io::stdin().lock(), output).await?;
    Ok(())
}

#[cfg(test)]
mod tests;
