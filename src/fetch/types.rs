//! Fetch result data structures.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

/// Response as returned by a transport, before fallback bookkeeping.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    /// Header names lowercased; repeated headers joined with `", "`.
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub content_length_bytes: usize,
    pub elapsed: Duration,
}

/// Outcome of retrieving one page.
///
/// Produced once per URL by the fetcher and never modified afterward. A status code
/// and a fetch error are both present only when the unverified retry succeeded after
/// a TLS verification failure (`insecure_fallback == true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageFetchResult {
    pub status_code: Option<u16>,
    #[serde(skip)]
    pub body: String,
    pub headers: BTreeMap<String, String>,
    pub elapsed_seconds: f64,
    pub content_length_bytes: usize,
    pub fetch_error: Option<String>,
    pub insecure_fallback: bool,
}

impl PageFetchResult {
    /// A result for a page that could not be retrieved at all.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            fetch_error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Whether any response (verified or not) was obtained.
    pub fn has_response(&self) -> bool {
        self.status_code.is_some()
    }
}

impl From<RawResponse> for PageFetchResult {
    fn from(raw: RawResponse) -> Self {
        Self {
            status_code: Some(raw.status),
            body: raw.body,
            headers: raw
                .headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect(),
            elapsed_seconds: raw.elapsed.as_secs_f64(),
            content_length_bytes: raw.content_length_bytes,
            fetch_error: None,
            insecure_fallback: false,
        }
    }
}
