//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, fetch, probe, input URL)
//! - Categorization of `reqwest` errors into the fetch error taxonomy
//!
//! Fetch and probe errors are data, not control flow: they are recorded in the
//! measurement record and the pipeline always produces a report.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub(crate) use categorization::error_chain_message;
pub use types::{FetchError, InitializationError, ProbeError, UrlError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Tls("invalid peer certificate: Expired".to_string());
        assert_eq!(
            err.to_string(),
            "TLS verification failed: invalid peer certificate: Expired"
        );
        assert!(err.is_tls());
        assert!(!FetchError::Timeout("operation timed out".into()).is_tls());
    }

    #[test]
    fn test_probe_error_display() {
        let err = ProbeError::Connect {
            host: "example.com".into(),
            port: 443,
            reason: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to connect to example.com:443: connection refused"
        );
        let timeout = ProbeError::Timeout {
            operation: "TLS handshake",
            seconds: 5,
        };
        assert_eq!(timeout.to_string(), "TLS handshake timed out after 5s");
    }

    #[test]
    fn test_url_error_display() {
        let err = UrlError::UnsupportedScheme("ftp".into());
        assert_eq!(
            err.to_string(),
            "Unsupported scheme 'ftp' (expected http or https)"
        );
    }
}
