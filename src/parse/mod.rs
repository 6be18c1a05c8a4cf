//! HTML parsing and structural extraction.
//!
//! This module turns raw markup into a [`StructuralDocument`]:
//! - Title, meta tags, headings, canonical and favicon links
//! - Body text and paragraphs
//! - Links, images, stylesheets, scripts and inline styles
//! - Social media links and viewport detection
//!
//! Extraction never fails. Malformed markup is repaired by the HTML5 parser and
//! degrades to empty fields; elements whose URL cannot be resolved are skipped.
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;
mod resources;
mod social;
mod text;
mod types;

use log::debug;
use scraper::Html;
use url::Url;

pub use html::{
    extract_canonical, extract_favicon, extract_headings, extract_meta_tags, extract_title,
    has_viewport,
};
pub use resources::{
    count_inline_styles, extract_css_links, extract_images, extract_links, extract_scripts,
};
pub use social::{extract_social_links, social_domain};
pub use text::{extract_body_text, extract_paragraphs};
pub use types::{Heading, Image, Link, Script, StructuralDocument};

/// Resolves `reference` against `base`, returning `None` when it cannot be resolved.
pub(crate) fn resolve(base: &Url, reference: &str) -> Option<String> {
    base.join(reference).ok().map(String::from)
}

/// Parses `markup` fetched from `base_url` into a [`StructuralDocument`].
pub fn extract(base_url: &Url, markup: &str) -> StructuralDocument {
    let document = Html::parse_document(markup);

    let meta_tags = extract_meta_tags(&document);
    let links = extract_links(&document, base_url);
    let (paragraphs, paragraph_word_counts) = extract_paragraphs(&document);

    let extracted = StructuralDocument {
        title: extract_title(&document),
        has_viewport_meta: has_viewport(&meta_tags),
        meta_tags,
        headings: extract_headings(&document),
        body_text: extract_body_text(&document),
        social_links: extract_social_links(&links),
        links,
        images: extract_images(&document, base_url),
        css_links: extract_css_links(&document, base_url),
        inline_style_count: count_inline_styles(&document),
        scripts: extract_scripts(&document, base_url),
        favicon: extract_favicon(&document, base_url),
        paragraphs,
        paragraph_word_counts,
        canonical_url: extract_canonical(&document, base_url),
        raw_markup_length: markup.chars().count(),
    };

    debug!(
        "Extracted {}: {} headings, {} links, {} images, {} scripts, {} stylesheets",
        base_url,
        extracted.headings.len(),
        extracted.links.len(),
        extracted.images.len(),
        extracted.scripts.len(),
        extracted.css_links.len()
    );
    extracted
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
