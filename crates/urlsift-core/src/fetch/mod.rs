//! HTTP(S) GET of a single input URL.
//!
//! Uses the curl crate (libcurl). TLS verification is off unless
//! `FetchOptions::verify_tls` is set; the body is read completely before
//! returning. `Fetcher` is the seam the worker pool depends on.

mod classify;
mod error;

pub use error::FetchError;

use crate::config::FetchConfig;
use classify::{classify_curl_error, is_final_status, status_code};
use std::str;
use std::time::Duration;

/// Anything that can turn a URL into a response body.
///
/// Implementations are blocking; the pool calls them from worker threads.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Transfer settings for `CurlFetcher`.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-transfer timeout; `None` lets a fetch block indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Verify peer certificate and host name.
    pub verify_tls: bool,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&FetchConfig::default())
    }
}

impl From<&FetchConfig> for FetchOptions {
    fn from(cfg: &FetchConfig) -> Self {
        let secs = |s: u64| (s > 0).then(|| Duration::from_secs(s));
        Self {
            timeout: secs(cfg.timeout_secs),
            connect_timeout: secs(cfg.connect_timeout_secs),
            verify_tls: cfg.verify_tls,
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// libcurl-backed fetcher. One Easy handle per call, dropped on every path.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.opts
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.opts.max_redirections)?;
        // Empty string: advertise every encoding libcurl can decode.
        easy.accept_encoding("")?;
        easy.ssl_verify_peer(self.opts.verify_tls)?;
        easy.ssl_verify_host(self.opts.verify_tls)?;
        if let Some(t) = self.opts.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.opts.timeout {
            easy.timeout(t)?;
        }
        if let Some(ua) = &self.opts.user_agent {
            easy.useragent(ua)?;
        }
        Ok(())
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut response_started = false;

        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, url).map_err(FetchError::Request)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    if let Some(code) = str::from_utf8(data).ok().and_then(status_code) {
                        response_started = is_final_status(code);
                    }
                    true
                })
                .map_err(FetchError::Request)?;
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchError::Request)?;
            transfer.perform()
        };
        if let Err(e) = performed {
            return Err(classify_curl_error(e, response_started));
        }

        let code = easy.response_code().unwrap_or(0);
        tracing::debug!(url, status = code, bytes = body.len(), "fetched");
        Ok(body)
    }
}
