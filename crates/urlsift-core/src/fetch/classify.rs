//! Map curl errors onto `FetchError` variants.

use super::error::FetchError;

/// Classify a failed transfer.
///
/// `response_started` is true once a final (non-1xx, non-3xx) status line was
/// received; failures after that point are body read failures.
pub(crate) fn classify_curl_error(e: curl::Error, response_started: bool) -> FetchError {
    if e.is_couldnt_resolve_host() {
        return FetchError::HostNotFound(e);
    }
    if response_started {
        FetchError::BodyRead(e)
    } else {
        FetchError::Request(e)
    }
}

/// Parse the status code out of an `HTTP/x.y NNN reason` header line.
pub(crate) fn status_code(line: &str) -> Option<u32> {
    let rest = line.strip_prefix("HTTP/")?;
    rest.split_whitespace().nth(1)?.parse().ok()
}

/// True for a status that ends the redirect/continue chain.
pub(crate) fn is_final_status(code: u32) -> bool {
    !(100..200).contains(&code) && !(300..400).contains(&code)
}
