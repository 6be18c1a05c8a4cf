//! Document structure statistics: headings, paragraphs, image alt text and
//! third-party resource share.

use std::collections::BTreeMap;

use url::Url;

use crate::models::{H1Stats, HeadingStats, ParagraphStats};
use crate::parse::{Heading, Image, StructuralDocument};
use crate::utils::{netloc, round_ratio};

/// Counts headings per level, the total, and the deepest level present.
pub fn heading_stats(headings: &[Heading]) -> HeadingStats {
    let mut counts: BTreeMap<String, usize> =
        (1..=6).map(|level| (format!("h{level}"), 0)).collect();
    let mut max_depth = 0;
    for heading in headings {
        *counts.entry(format!("h{}", heading.level)).or_default() += 1;
        max_depth = max_depth.max(heading.level);
    }
    HeadingStats {
        total: counts.values().sum(),
        counts,
        max_depth,
    }
}

pub fn h1_stats(headings: &[Heading]) -> H1Stats {
    H1Stats {
        h1_count: headings.iter().filter(|h| h.level == 1).count(),
    }
}

/// Paragraph count with mean and median word counts (all 0 without paragraphs).
pub fn paragraph_stats(word_counts: &[usize]) -> ParagraphStats {
    if word_counts.is_empty() {
        return ParagraphStats::default();
    }
    let count = word_counts.len();
    let avg_words = word_counts.iter().sum::<usize>() as f64 / count as f64;

    let mut sorted = word_counts.to_vec();
    sorted.sort_unstable();
    let mid = count / 2;
    let median_words = if count % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    ParagraphStats {
        count,
        avg_words,
        median_words,
    }
}

/// Share of images with a non-empty `alt` attribute; 1.0 when there are no images.
pub fn images_with_alt_ratio(images: &[Image]) -> f64 {
    if images.is_empty() {
        return 1.0;
    }
    let with_alt = images.iter().filter(|image| !image.alt.is_empty()).count();
    round_ratio(with_alt as f64 / images.len() as f64)
}

fn is_external(resource: &str, base_netloc: &str) -> bool {
    Url::parse(resource)
        .map(|url| {
            let location = netloc(&url);
            !location.is_empty() && location != base_netloc
        })
        .unwrap_or(false)
}

/// Fraction of images, external scripts and stylesheets served from another
/// network location than `base_netloc`. 0 when the page has none of them.
pub fn external_resource_ratio(document: &StructuralDocument, base_netloc: &str) -> f64 {
    let resources: Vec<&str> = document
        .images
        .iter()
        .map(|image| image.resolved_src.as_str())
        .chain(
            document
                .scripts
                .iter()
                .filter(|script| !script.is_inline)
                .map(|script| script.resolved_src.as_str()),
        )
        .chain(document.css_links.iter().map(String::as_str))
        .collect();

    if resources.is_empty() {
        return 0.0;
    }
    let external = resources
        .iter()
        .filter(|resource| is_external(resource, base_netloc))
        .count();
    round_ratio((external as f64 / resources.len() as f64).min(1.0))
}
