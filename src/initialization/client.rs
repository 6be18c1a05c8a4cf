//! HTTP client initialization.
//!
//! Two kinds of client are built from the configuration:
//! - The page transport: a verifying client plus a non-verifying client used only
//!   for the insecure fallback, both with the page timeout
//! - The probe client: a verifying client with the shorter probe timeout, shared by
//!   the broken-link, robots/sitemap and stylesheet probes

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use crate::error_handling::InitializationError;
use crate::fetch::ReqwestTransport;

fn base_builder(timeout_seconds: u64, user_agent: &str) -> ClientBuilder {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent.to_string())
        .redirect(Policy::limited(MAX_REDIRECT_HOPS))
        .use_rustls_tls()
}

/// Builds the transport used for the page fetch.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if either client cannot be built.
pub fn init_page_transport(config: &Config) -> Result<ReqwestTransport, InitializationError> {
    let verified = base_builder(config.timeout_seconds, &config.user_agent).build()?;
    let insecure = base_builder(config.timeout_seconds, &config.user_agent)
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(ReqwestTransport::new(verified, insecure))
}

/// Builds the client shared by the live probes.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be built.
pub fn init_probe_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    Ok(base_builder(config.probe_timeout_seconds, &config.user_agent).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_build_from_default_config() {
        let config = Config::default();
        assert!(init_page_transport(&config).is_ok());
        assert!(init_probe_client(&config).is_ok());
    }
}
