//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to retrieve the audited page.
///
/// Always recorded into `PageFetchResult::fetch_error`, never raised past the fetcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Certificate or handshake verification failed.
    #[error("TLS verification failed: {0}")]
    Tls(String),

    /// The request did not complete within the timeout.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// DNS resolution or TCP connection failed.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other request or body error.
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Whether this failure should trigger the unverified retry.
    pub fn is_tls(&self) -> bool {
        matches!(self, FetchError::Tls(_))
    }
}

/// Failure of a live probe (certificate check, link check, robots/sitemap, stylesheet).
///
/// Each deriver turns these into a conservative negative result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Invalid host name: {0}")]
    InvalidHost(String),

    #[error("Failed to connect to {host}:{port}: {reason}")]
    Connect {
        host: String,
        port: u16,
        reason: String,
    },

    #[error("TLS handshake failed for {host}: {reason}")]
    Handshake { host: String, reason: String },

    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        operation: &'static str,
        seconds: u64,
    },

    #[error("No peer certificate presented by {0}")]
    NoCertificate(String),

    #[error("Certificate parse error: {0}")]
    Certificate(String),

    #[error("HTTP probe failed: {0}")]
    Http(String),
}

/// Rejected input URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL exceeds maximum length ({length} > {max})")]
    TooLong { length: usize, max: usize },

    #[error("Invalid URL '{url}': {reason}")]
    Parse { url: String, reason: String },

    #[error("Unsupported scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("URL has no host: {0}")]
    MissingHost(String),
}
