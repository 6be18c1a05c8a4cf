//! Head-level extraction: title, meta tags, headings, canonical and favicon links.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::resolve;
use super::types::Heading;
use crate::utils::parse_selector_unsafe;

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("title", "TITLE_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("meta", "META_SELECTOR"));
static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel][href]", "LINK_REL_SELECTOR"));

/// Joins the trimmed, non-empty text nodes of an element with single spaces.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the text of the first `<title>`, trimmed. Empty when missing.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element_text(&element))
        .unwrap_or_default()
}

/// Collects meta tags keyed by lowercase `name` (or `property` when `name` is absent).
///
/// Duplicates keep the last value seen; a missing `content` is stored as empty.
pub fn extract_meta_tags(document: &Html) -> BTreeMap<String, String> {
    let mut tags = BTreeMap::new();
    for element in document.select(&META_SELECTOR) {
        let attrs = element.value();
        let key = attrs
            .attr("name")
            .filter(|n| !n.is_empty())
            .or_else(|| attrs.attr("property").filter(|p| !p.is_empty()));
        if let Some(key) = key {
            tags.insert(
                key.to_lowercase(),
                attrs.attr("content").unwrap_or_default().to_string(),
            );
        }
    }
    tags
}

/// Extracts `<h1>`..`<h6>` in document order.
pub fn extract_headings(document: &Html) -> Vec<Heading> {
    document
        .select(&HEADING_SELECTOR)
        .filter_map(|element| {
            let level = heading_level(element.value().name())?;
            Some(Heading {
                level,
                text: element_text(&element),
            })
        })
        .collect()
}

fn heading_level(tag: &str) -> Option<u8> {
    let digit = tag.strip_prefix('h').or_else(|| tag.strip_prefix('H'))?;
    match digit.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Whether any meta tag key mentions the viewport.
pub fn has_viewport(meta_tags: &BTreeMap<String, String>) -> bool {
    meta_tags.keys().any(|k| k.contains("viewport"))
}

/// Returns `true` if the whitespace-separated `rel` value has a token containing `needle`.
pub(crate) fn rel_contains(rel: &str, needle: &str) -> bool {
    rel.split_whitespace()
        .any(|token| token.to_lowercase().contains(needle))
}

/// Resolved `href` of the first `<link>` whose `rel` matches `predicate`.
fn first_link_with_rel(
    document: &Html,
    base: &Url,
    predicate: impl Fn(&str) -> bool,
) -> Option<String> {
    document
        .select(&LINK_REL_SELECTOR)
        .filter(|element| element.value().attr("rel").is_some_and(&predicate))
        .find_map(|element| resolve(base, element.value().attr("href")?.trim()))
}

/// The canonical URL declared by `<link rel="canonical">`.
pub fn extract_canonical(document: &Html, base: &Url) -> Option<String> {
    first_link_with_rel(document, base, |rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("canonical"))
    })
}

/// The favicon declared by the first `<link>` whose `rel` mentions `icon`.
pub fn extract_favicon(document: &Html, base: &Url) -> Option<String> {
    first_link_with_rel(document, base, |rel| rel_contains(rel, "icon"))
}
