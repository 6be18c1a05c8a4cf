//! Social media link detection.
//!
//! A link counts as a social profile link when its `href` contains one of the
//! domains in `SOCIAL_DOMAINS`. Matching is a plain substring check, so
//! `https://www.facebook.com/acme` and `//facebook.com/acme` both match.

use std::collections::BTreeSet;

use super::types::Link;
use crate::config::SOCIAL_DOMAINS;

/// Returns the platform domain an `href` points at, if any.
pub fn social_domain(href: &str) -> Option<&'static str> {
    let lowered = href.to_lowercase();
    SOCIAL_DOMAINS
        .iter()
        .copied()
        .find(|domain| lowered.contains(domain))
}

/// Collects the distinct resolved URLs of links pointing at social platforms.
pub fn extract_social_links(links: &[Link]) -> BTreeSet<String> {
    links
        .iter()
        .filter(|link| social_domain(&link.href).is_some())
        .map(|link| link.resolved_url.clone())
        .collect()
}
