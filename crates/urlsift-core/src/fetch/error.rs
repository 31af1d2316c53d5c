//! Fetch failure type.

/// Why a single fetch produced no body.
///
/// Carries the underlying curl error so callers can print the cause.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// DNS lookup for the host failed. The pool treats this as an empty result.
    #[error("could not resolve host: {0}")]
    HostNotFound(#[source] curl::Error),
    /// Connect, TLS, protocol or setup failure before a response arrived.
    #[error("failed to make HTTP request: {0}")]
    Request(#[source] curl::Error),
    /// The response started but the body could not be read to the end.
    #[error("failed to read response body: {0}")]
    BodyRead(#[source] curl::Error),
}

impl FetchError {
    pub fn is_host_not_found(&self) -> bool {
        matches!(self, FetchError::HostNotFound(_))
    }
}
