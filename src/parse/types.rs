//! Structural document model.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// A heading element (`<h1>`..`<h6>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// 1 through 6
    pub level: u8,
    pub text: String,
}

/// An anchor with an `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Attribute value as written, trimmed
    pub href: String,
    /// `href` resolved against the page URL
    pub resolved_url: String,
    pub anchor_text: String,
}

/// An `<img>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub resolved_src: String,
    pub alt: String,
    pub title: String,
}

/// A `<script>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    /// Resolved `src`, empty for inline scripts
    pub resolved_src: String,
    pub is_inline: bool,
    /// Length of the inline script text in characters
    pub inline_length: usize,
}

/// Everything the indicator derivers need from a page's markup.
///
/// All URLs are resolved against the page URL; elements whose URL cannot be
/// resolved are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StructuralDocument {
    pub title: String,
    /// Keyed by lowercase `name`, or `property` when there is no `name`; last one wins
    pub meta_tags: BTreeMap<String, String>,
    pub headings: Vec<Heading>,
    pub body_text: String,
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    pub css_links: Vec<String>,
    pub inline_style_count: usize,
    pub scripts: Vec<Script>,
    pub favicon: Option<String>,
    pub paragraphs: Vec<String>,
    pub paragraph_word_counts: Vec<usize>,
    pub social_links: BTreeSet<String>,
    pub has_viewport_meta: bool,
    pub canonical_url: Option<String>,
    pub raw_markup_length: usize,
}

impl StructuralDocument {
    /// The `description` meta tag, if present and non-empty.
    pub fn meta_description(&self) -> Option<&str> {
        self.meta_tags
            .get("description")
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
    }
}
