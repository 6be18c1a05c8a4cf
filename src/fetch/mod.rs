//! Page retrieval.
//!
//! The fetcher resolves a URL to status, headers, and body. It never fails: every
//! network problem is recorded in the returned [`PageFetchResult`].
//!
//! Policy:
//! - one verified GET with redirect following and the configured timeout
//! - on a TLS verification failure, one retry without certificate verification;
//!   the original error is kept and `insecure_fallback` is set
//! - any other failure (DNS, refused connection, timeout) is recorded, no retry
//! - responses are cached by URL in an optional [`FetchCache`]

mod cache;
mod transport;
mod types;

pub use cache::FetchCache;
pub use transport::{ReqwestTransport, TlsMode, Transport};
pub use types::{PageFetchResult, RawResponse};

use std::sync::Arc;

use log::{debug, info, warn};

use crate::error_handling::FetchError;

/// Fetches pages through a [`Transport`], with the TLS fallback and optional caching.
#[derive(Debug)]
pub struct Fetcher<T = ReqwestTransport> {
    transport: T,
    cache: Option<Arc<FetchCache>>,
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher. Pass `None` to disable caching.
    pub fn new(transport: T, cache: Option<Arc<FetchCache>>) -> Self {
        Self { transport, cache }
    }

    /// Retrieves `url`, never returning an error.
    pub async fn fetch(&self, url: &str) -> PageFetchResult {
        if let Some(hit) = self.cache.as_ref().and_then(|cache| cache.get(url)) {
            debug!("Fetch cache hit for {url}");
            return hit;
        }

        let result = match self.transport.get(url, TlsMode::Verified).await {
            Ok(response) => {
                info!("Fetched {url}: HTTP {}", response.status);
                PageFetchResult::from(response)
            }
            Err(error) if error.is_tls() => self.fetch_insecure(url, error).await,
            Err(error) => {
                warn!("Fetch error for {url}: {error}");
                PageFetchResult::failed(error.to_string())
            }
        };

        if result.has_response() {
            if let Some(cache) = &self.cache {
                cache.insert(url, result.clone());
            }
        }
        result
    }

    /// Retries `url` once without certificate verification after `original` failed.
    ///
    /// On success the result carries both the status code and the original error,
    /// with `insecure_fallback` set. If the retry fails too, no status is recorded and
    /// the error names both failures.
    pub async fn fetch_insecure(&self, url: &str, original: FetchError) -> PageFetchResult {
        warn!("{original} for {url}; retrying without certificate verification");
        match self.transport.get(url, TlsMode::Insecure).await {
            Ok(response) => {
                info!(
                    "Fetched {url} without certificate verification: HTTP {}",
                    response.status
                );
                PageFetchResult {
                    fetch_error: Some(original.to_string()),
                    insecure_fallback: true,
                    ..PageFetchResult::from(response)
                }
            }
            Err(retry) => {
                warn!("Insecure retry for {url} failed: {retry}");
                PageFetchResult::failed(format!("{original}; insecure retry failed: {retry}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
