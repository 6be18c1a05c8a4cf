//! TLS certificate probe.
//!
//! Opens a raw TLS connection to the page's host, reads the leaf certificate and
//! judges it by expiry. The handshake verifies the chain against the webpki roots,
//! so an untrusted or mismatched certificate fails the probe as well.
//!
//! Uses `tokio-rustls` for the async handshake and `x509-parser` for the certificate.

mod certificate;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rustls::pki_types::ServerName;
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;
use url::Url;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS, TLS_PORT};
use crate::error_handling::ProbeError;
use crate::models::CertificateCheck;

pub use certificate::{assess_expiry, parse_certificate, PeerCertificate};

/// Recorded in `ssl_info.error` when the page is not served over https.
pub const NOT_HTTPS: &str = "not an https URL";

fn client_config(host: &str) -> Result<ClientConfig, ProbeError> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ClientConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| ProbeError::Handshake {
            host: host.to_string(),
            reason: e.to_string(),
        })?
        .with_root_certificates(root_store)
        .with_no_client_auth();
    Ok(config)
}

/// Connects to `host:port`, completes a verified handshake and parses the leaf certificate.
///
/// # Errors
///
/// Returns an error if:
/// - The host name is invalid
/// - TCP connection fails or times out
/// - TLS handshake fails (including chain verification) or times out
/// - No certificate is presented, or it cannot be parsed
pub async fn fetch_peer_certificate(host: &str, port: u16) -> Result<PeerCertificate, ProbeError> {
    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| ProbeError::InvalidHost(format!("{host}: {e}")))?;
    let config = client_config(host)?;

    debug!("Connecting to {host}:{port} for certificate check");
    let sock = match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, port)),
    )
    .await
    {
        Ok(Ok(sock)) => sock,
        Ok(Err(e)) => {
            return Err(ProbeError::Connect {
                host: host.to_string(),
                port,
                reason: e.to_string(),
            })
        }
        Err(_) => {
            return Err(ProbeError::Timeout {
                operation: "TCP connect",
                seconds: TCP_CONNECT_TIMEOUT_SECS,
            })
        }
    };

    let connector = TlsConnector::from(Arc::new(config));
    let tls_stream = match tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => stream,
        Ok(Err(e)) => {
            return Err(ProbeError::Handshake {
                host: host.to_string(),
                reason: e.to_string(),
            })
        }
        Err(_) => {
            return Err(ProbeError::Timeout {
                operation: "TLS handshake",
                seconds: TLS_HANDSHAKE_TIMEOUT_SECS,
            })
        }
    };

    let leaf = tls_stream
        .get_ref()
        .1
        .peer_certificates()
        .and_then(|certs| certs.first())
        .ok_or_else(|| ProbeError::NoCertificate(host.to_string()))?;
    parse_certificate(leaf.as_ref())
}

/// Checks the certificate served at `host:port` as of `now`.
///
/// Never fails: any error yields `valid = false` with the reason recorded.
pub async fn check_certificate(host: &str, port: u16, now: DateTime<Utc>) -> CertificateCheck {
    match fetch_peer_certificate(host, port).await {
        Ok(cert) => {
            let check = assess_expiry(&cert, now);
            info!(
                "Certificate for {host} expires {} ({} days left)",
                cert.not_after.to_rfc3339(),
                check.days_left.unwrap_or_default()
            );
            check
        }
        Err(e) => {
            warn!("Certificate check failed for {host}: {e}");
            CertificateCheck::failed(e.to_string())
        }
    }
}

/// Checks the certificate of the host serving `page_url`.
///
/// Non-https pages are not probed. The URL's explicit port is used when present.
pub async fn check_page_certificate(page_url: &Url, now: DateTime<Utc>) -> CertificateCheck {
    if page_url.scheme() != "https" {
        return CertificateCheck::failed(NOT_HTTPS);
    }
    let Some(host) = page_url.host_str() else {
        let err = ProbeError::InvalidHost(page_url.to_string());
        return CertificateCheck::failed(err.to_string());
    };
    // IPv6 literals come back bracketed
    let host = host.trim_start_matches('[').trim_end_matches(']');
    check_certificate(host, page_url.port().unwrap_or(TLS_PORT), now).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_port() -> u16 {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn test_invalid_host_name() {
        let err = fetch_peer_certificate("not a host!", 443).await.unwrap_err();
        assert!(matches!(err, ProbeError::InvalidHost(_)));
    }

    #[tokio::test]
    async fn test_refused_connection_is_recorded() {
        let check = check_certificate("127.0.0.1", closed_port(), Utc::now()).await;
        assert!(!check.valid);
        assert!(check.expires.is_none());
        assert!(check
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to connect to 127.0.0.1")));
    }

    #[tokio::test]
    async fn test_handshake_failure_is_recorded() {
        // A server that accepts and immediately closes the connection
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((stream, _)) = listener.accept().await {
                drop(stream);
            }
        });

        let err = fetch_peer_certificate("127.0.0.1", port).await.unwrap_err();
        assert!(matches!(err, ProbeError::Handshake { .. }));
    }

    #[tokio::test]
    async fn test_plain_http_page_is_not_probed() {
        let url = Url::parse("http://example.com/").unwrap();
        let check = check_page_certificate(&url, Utc::now()).await;
        assert!(!check.valid);
        assert_eq!(check.error.as_deref(), Some(NOT_HTTPS));
    }
}
