//! Per-URL pipeline: fetch → extract → sort → dedupe.

use crate::dedupe::dedupe;
use crate::extract::extract;
use crate::fetch::{FetchError, Fetcher};

/// What one input URL produced.
#[derive(Debug)]
pub(super) enum Outcome {
    Endpoints(Vec<String>),
    /// Host did not resolve; reported as nothing at all.
    Unresolved(FetchError),
    Failed(FetchError),
}

pub(super) fn process_url(fetcher: &dyn Fetcher, url: &str) -> Outcome {
    match fetcher.fetch(url) {
        Ok(body) => Outcome::Endpoints(endpoints_from_body(&body)),
        Err(e) if e.is_host_not_found() => Outcome::Unresolved(e),
        Err(e) => Outcome::Failed(e),
    }
}

/// Extracted endpoints, sorted byte-wise and deduplicated.
pub fn endpoints_from_body(body: &[u8]) -> Vec<String> {
    let mut endpoints = extract(body);
    endpoints.sort();
    dedupe(endpoints)
}
