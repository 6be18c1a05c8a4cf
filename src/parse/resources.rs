//! Linked resources: anchors, images, stylesheets, scripts and inline styles.

use std::sync::LazyLock;

use log::trace;
use scraper::{Html, Selector};
use url::Url;

use super::html::{element_text, rel_contains};
use super::resolve;
use super::types::{Image, Link, Script};
use crate::utils::parse_selector_unsafe;

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("img", "IMAGE_SELECTOR"));
static STYLESHEET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("link[rel][href]", "STYLESHEET_SELECTOR"));
static SCRIPT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("script", "SCRIPT_SELECTOR"));
static STYLE_ATTR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("[style]", "STYLE_ATTR_SELECTOR"));

/// Extracts every `<a href>` with its resolved URL and anchor text.
pub fn extract_links(document: &Html, base: &Url) -> Vec<Link> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| {
            let href = element.value().attr("href")?.trim();
            let Some(resolved_url) = resolve(base, href) else {
                trace!("Skipping unresolvable link href: {href}");
                return None;
            };
            Some(Link {
                href: href.to_string(),
                resolved_url,
                anchor_text: element_text(&element),
            })
        })
        .collect()
}

/// Extracts every `<img>`. A missing `src` resolves to the page URL itself.
pub fn extract_images(document: &Html, base: &Url) -> Vec<Image> {
    document
        .select(&IMAGE_SELECTOR)
        .filter_map(|element| {
            let attrs = element.value();
            let src = attrs.attr("src").unwrap_or_default().trim();
            Some(Image {
                resolved_src: resolve(base, src)?,
                alt: attrs.attr("alt").unwrap_or_default().to_string(),
                title: attrs.attr("title").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Extracts `<link>` hrefs whose `rel` has a token containing "stylesheet".
pub fn extract_css_links(document: &Html, base: &Url) -> Vec<String> {
    document
        .select(&STYLESHEET_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| rel_contains(rel, "stylesheet"))
        })
        .filter_map(|element| resolve(base, element.value().attr("href")?.trim()))
        .collect()
}

/// Extracts `<script>` elements. Inline scripts carry their text length.
pub fn extract_scripts(document: &Html, base: &Url) -> Vec<Script> {
    document
        .select(&SCRIPT_SELECTOR)
        .filter_map(|element| {
            let src = element
                .value()
                .attr("src")
                .map(str::trim)
                .filter(|s| !s.is_empty());
            let inline_length = element.text().map(|t| t.chars().count()).sum();
            match src {
                Some(src) => Some(Script {
                    resolved_src: resolve(base, src)?,
                    is_inline: false,
                    inline_length,
                }),
                None => Some(Script {
                    resolved_src: String::new(),
                    is_inline: true,
                    inline_length,
                }),
            }
        })
        .collect()
}

/// Counts elements carrying a non-empty `style` attribute.
pub fn count_inline_styles(document: &Html) -> usize {
    document
        .select(&STYLE_ATTR_SELECTOR)
        .filter(|element| {
            element
                .value()
                .attr("style")
                .is_some_and(|style| !style.trim().is_empty())
        })
        .count()
}
