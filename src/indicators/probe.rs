//! HTTP requests issued by live probes.
//!
//! Every probe uses the shared probe client, whose timeout bounds each call.
//! Failures come back as [`ProbeError::Http`] and the calling deriver decides the
//! conservative default.

use log::trace;

use crate::error_handling::{error_chain_message, ProbeError};
use crate::utils::sanitize::sanitize_and_truncate_error_message;

/// Status code and body text of a probe GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body: String,
}

fn probe_error(url: &str, error: &reqwest::Error) -> ProbeError {
    let message = format!("{url}: {}", error_chain_message(error));
    ProbeError::Http(sanitize_and_truncate_error_message(&message))
}

/// GETs `url` and reads the body as text.
pub async fn probe_get(client: &reqwest::Client, url: &str) -> Result<ProbeResponse, ProbeError> {
    trace!("Probe GET {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| probe_error(url, &e))?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| probe_error(url, &e))?;
    Ok(ProbeResponse { status, body })
}

/// HEADs `url` (following redirects) and returns the final status code.
pub async fn probe_head(client: &reqwest::Client, url: &str) -> Result<u16, ProbeError> {
    trace!("Probe HEAD {url}");
    client
        .head(url)
        .send()
        .await
        .map(|response| response.status().as_u16())
        .map_err(|e| probe_error(url, &e))
}
