//! Error categorization.
//!
//! Maps `reqwest::Error` values onto the `FetchError` taxonomy.

use std::error::Error as StdError;
use std::io;

use super::types::FetchError;
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Wording that marks a TLS verification failure when the typed error is not reachable.
///
/// Only matched against the sources of the top-level error, never the top level
/// itself, whose message carries the request URL.
const TLS_MARKERS: &[&str] = &[
    "invalid peer certificate",
    "invalidcertificate",
    "unknownissuer",
    "tls handshake",
];

/// Categorizes a `reqwest::Error` into a `FetchError`.
///
/// The source chain below the top-level error is inspected. A `rustls::Error`
/// (directly or inside an `io::Error`) or TLS wording there wins over the
/// timeout/connect flags, since a rejected certificate also surfaces as a connect error.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The `FetchError` variant carrying a sanitized description of the full chain.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchError {
    let message = sanitize_and_truncate_error_message(&error_chain_message(error));

    if is_tls_failure(error) {
        FetchError::Tls(message)
    } else if error.is_timeout() {
        FetchError::Timeout(message)
    } else if error.is_connect() {
        FetchError::Connect(message)
    } else {
        FetchError::Request(message)
    }
}

fn is_rustls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.downcast_ref::<rustls::Error>().is_some() {
        return true;
    }
    err.downcast_ref::<io::Error>()
        .and_then(io::Error::get_ref)
        .is_some_and(|inner| inner.downcast_ref::<rustls::Error>().is_some())
}

/// Returns `true` if a source of `error` is a TLS verification failure.
pub(crate) fn is_tls_failure(error: &(dyn StdError + 'static)) -> bool {
    let mut current = error.source();
    while let Some(err) = current {
        if is_rustls_error(err) {
            return true;
        }
        let text = err.to_string().to_lowercase();
        if TLS_MARKERS.iter().any(|marker| text.contains(marker)) {
            return true;
        }
        current = err.source();
    }
    false
}

/// Joins the messages of an error and all of its sources with `": "`.
pub(crate) fn error_chain_message(error: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![error.to_string()];
    let mut current = error.source();
    while let Some(err) = current {
        let text = err.to_string();
        if !parts.iter().any(|p| p == &text) {
            parts.push(text);
        }
        current = err.source();
    }
    parts.join(": ")
}
