//! Input URL validation.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::UrlError;

/// Validates the URL of the page to audit.
///
/// The URL must be absolute, use the http or https scheme, name a host, and be at
/// most `MAX_URL_LENGTH` characters. Surrounding whitespace is ignored. Unlike a
/// crawler, no scheme is guessed: a bare domain is rejected.
///
/// # Errors
///
/// Returns a [`UrlError`] describing the first rule the URL breaks.
pub fn validate_url(url: &str) -> Result<Url, UrlError> {
    let url = url.trim();
    let length = url.chars().count();
    if length > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            length,
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return Err(UrlError::TooLong {
            length,
            max: MAX_URL_LENGTH,
        });
    }

    let parsed = Url::parse(url).map_err(|e| UrlError::Parse {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(UrlError::UnsupportedScheme(other.to_string())),
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(UrlError::MissingHost(url.to_string()));
    }
    Ok(parsed)
}
