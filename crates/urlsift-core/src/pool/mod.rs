//! Bounded worker pool over the input URL queue.
//!
//! The queue is filled with every input URL before any worker starts. Up to
//! `concurrency` threads pop URLs until the queue is empty and send each
//! outcome to the calling thread, which prints groups in completion order.
//! One URL failing never stops the batch.

mod output;
mod worker;

pub use output::Output;
pub use worker::endpoints_from_body;

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::config::UrlsiftConfig;
use crate::fetch::Fetcher;
use worker::{process_url, Outcome};

/// Pool knobs taken from config and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    /// Worker count; values below 1 are treated as 1.
    pub concurrency: usize,
    /// Skip per-URL error lines.
    pub suppress_errors: bool,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            concurrency: 1,
            suppress_errors: false,
        }
    }
}

impl From<&UrlsiftConfig> for PoolSettings {
    fn from(cfg: &UrlsiftConfig) -> Self {
        Self {
            concurrency: cfg.concurrency,
            suppress_errors: cfg.suppress_errors,
        }
    }
}

/// Counters for the closing log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSummary {
    /// URLs taken off the queue and finished.
    pub processed: usize,
    /// Fetches that failed (printed unless suppressed).
    pub failed: usize,
    /// Hosts that did not resolve (never printed).
    pub unresolved: usize,
    /// Endpoint lines written.
    pub endpoints: usize,
}

/// Process every URL in `urls` and print results to `output`.
///
/// Blocks until all workers have drained the queue. Returns an error only
/// when writing to `output` fails or a worker panics. A closed pipe on
/// either stream ends the batch early and is not an error.
pub fn run<O: Write, E: Write>(
    urls: Vec<String>,
    fetcher: Arc<dyn Fetcher>,
    settings: &PoolSettings,
    output: &mut Output<O, E>,
) -> Result<PoolSummary> {
    let count = urls.len();
    let mut summary = PoolSummary::default();
    if count == 0 {
        return Ok(summary);
    }

    let work: Arc<Mutex<VecDeque<String>>> = Arc::new(Mutex::new(urls.into_iter().collect()));
    let (tx, rx) = mpsc::channel::<(String, Outcome)>();
    let num_workers = settings.concurrency.max(1).min(count);
    tracing::info!(urls = count, workers = num_workers, "starting batch");

    let mut handles = Vec::with_capacity(num_workers);
    for _ in 0..num_workers {
        let work = Arc::clone(&work);
        let tx = tx.clone();
        let fetcher = Arc::clone(&fetcher);
        handles.push(std::thread::spawn(move || loop {
            let url = match work.lock().unwrap().pop_front() {
                Some(u) => u,
                None => break,
            };
            let outcome = process_url(fetcher.as_ref(), &url);
            if tx.send((url, outcome)).is_err() {
                // Collector gave up (output failed); stop taking work.
                break;
            }
        }));
    }
    drop(tx);

    let mut first_error: Option<anyhow::Error> = None;
    let mut closed = false;
    for (url, outcome) in rx.iter() {
        summary.processed += 1;
        let written = match outcome {
            Outcome::Endpoints(endpoints) => {
                summary.endpoints += endpoints.len();
                tracing::debug!(url = %url, endpoints = endpoints.len(), "extracted");
                output.endpoints(&endpoints).map_err(|e| (e, "write endpoints"))
            }
            Outcome::Unresolved(e) => {
                summary.unresolved += 1;
                tracing::debug!(url = %url, "skipping unresolved host: {}", e);
                Ok(())
            }
            Outcome::Failed(e) => {
                summary.failed += 1;
                tracing::warn!(url = %url, "fetch failed: {}", e);
                if settings.suppress_errors {
                    Ok(())
                } else {
                    output.failure(&url, &e).map_err(|e| (e, "write error line"))
                }
            }
        };
        match written {
            Ok(()) => {}
            Err((e, _)) if e.kind() == io::ErrorKind::BrokenPipe => {
                // Reader went away (e.g. `| head`); stop early without failing.
                tracing::info!("output closed, stopping batch");
                closed = true;
                break;
            }
            Err((e, what)) => {
                first_error = Some(anyhow::Error::new(e).context(what));
                break;
            }
        }
    }
    drop(rx);

    for h in handles {
        if let Err(e) = h.join() {
            if first_error.is_none() {
                first_error = Some(anyhow::anyhow!("worker panicked: {:?}", e));
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    tracing::info!(
        closed,
        processed = summary.processed,
        failed = summary.failed,
        unresolved = summary.unresolved,
        endpoints = summary.endpoints,
        "batch complete"
    );
    Ok(summary)
}

/// Runs [`run`] on the tokio blocking pool and hands `output` back with the summary.
pub async fn run_async<O, E>(
    urls: Vec<String>,
    fetcher: Arc<dyn Fetcher>,
    settings: PoolSettings,
    mut output: Output<O, E>,
) -> Result<(PoolSummary, Output<O, E>)>
where
    O: Write + Send + 'static,
    E: Write + Send + 'static,
{
    tokio::task::spawn_blocking(move || -> Result<(PoolSummary, Output<O, E>)> {
        let summary = run(urls, fetcher, &settings, &mut output)?;
        Ok((summary, output))
    })
    .await
    .context("pool task join")?
}
