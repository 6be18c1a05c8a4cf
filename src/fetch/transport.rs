//! HTTP transport used by the page fetcher.
//!
//! The fetcher talks to the network only through the [`Transport`] trait so that the
//! TLS fallback branch can be exercised without a misconfigured server.

use std::collections::BTreeMap;
use std::future::Future;
use std::time::Instant;

use encoding_rs::{Encoding, UTF_8};
use log::debug;

use super::types::RawResponse;
use crate::error_handling::{categorize_reqwest_error, FetchError};

/// Whether certificates are verified for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Normal, verified TLS.
    Verified,
    /// Certificate verification disabled (insecure fallback only).
    Insecure,
}

/// Performs a single GET with redirect following.
pub trait Transport: Send + Sync {
    fn get(
        &self,
        url: &str,
        tls: TlsMode,
    ) -> impl Future<Output = Result<RawResponse, FetchError>> + Send;
}

/// Browser-like request headers applied to the page fetch.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}

/// `reqwest`-backed transport holding one verifying and one non-verifying client.
///
/// Both clients are built by `initialization::init_page_transport`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    verified: reqwest::Client,
    insecure: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(verified: reqwest::Client, insecure: reqwest::Client) -> Self {
        Self { verified, insecure }
    }

    fn client(&self, tls: TlsMode) -> &reqwest::Client {
        match tls {
            TlsMode::Verified => &self.verified,
            TlsMode::Insecure => &self.insecure,
        }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, tls: TlsMode) -> Result<RawResponse, FetchError> {
        debug!("GET {url} ({tls:?})");
        let started = Instant::now();
        let request = RequestHeaders::apply_to_request_builder(self.client(tls).get(url));
        let response = request
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        let elapsed = started.elapsed();

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let content_type = headers.get("content-type").cloned();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        Ok(RawResponse {
            status,
            headers,
            content_length_bytes: bytes.len(),
            body: decode_body(&bytes, content_type.as_deref()),
            elapsed,
        })
    }
}

/// The `charset` parameter of a `Content-Type` value, unquoted.
fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decodes a body with the charset declared in `Content-Type`, defaulting to UTF-8.
///
/// A byte-order mark overrides the declared charset; malformed sequences become U+FFFD.
pub(crate) fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("Body had invalid {} sequences", used.name());
    }
    text.into_owned()
}

/// Flattens a header map into lowercase names, joining repeated values with `", "`.
pub(crate) fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        out.entry(name.as_str().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    out
}
