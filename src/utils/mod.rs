//! Shared helpers.
//!
//! This module provides:
//! - String sanitization utilities
//! - CSS selector and regex compilation utilities
//! - Numeric helpers shared by the indicator derivers and the scorer
//! - URL network-location helpers

mod pattern;
pub mod sanitize;
mod selector;

pub use pattern::compile_regex_unsafe;
pub use selector::parse_selector_unsafe;

use url::Url;

/// Rounds `value` to `decimals` decimal places (half away from zero).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Rounds a ratio to the precision used in the report.
pub fn round_ratio(value: f64) -> f64 {
    round_to(value, crate::config::RATIO_DECIMALS)
}

/// Clamps `value` into `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Returns the network location (`host[:port]`) of a URL, empty when it has no host.
///
/// The port is included only when it is explicit and not the scheme default.
pub fn netloc(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Returns `scheme://netloc` for a URL.
pub fn origin(url: &Url) -> String {
    format!("{}://{}", url.scheme(), netloc(url))
}
