//! Text and markup heuristics: text density, keyword overlap, contact details,
//! structured data and copyright freshness.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::models::ContactInfo;
use crate::utils::{compile_regex_unsafe, round_ratio};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"[\w.-]+@[\w.-]+\.[a-zA-Z]{2,6}", "EMAIL_PATTERN")
});
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\+?\d[\d \-()]{7,}\d", "PHONE_PATTERN"));
static COPYRIGHT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)(?:©|&copy;|&#169;|\bcopyright\b)(?:\s|©|&copy;|&#169;|\(c\))*(\d{4})\b",
        "COPYRIGHT_PATTERN",
    )
});

/// Markers whose presence in the markup indicates structured data.
const STRUCTURED_DATA_MARKERS: &[&str] = &["application/ld+json", "schema.org"];

/// Words hinting that a postal address is published on the page.
const ADDRESS_HINTS: &[&str] = &["address", "street"];

/// Visible text length relative to markup length, capped at 1 and rounded.
///
/// Both lengths are in characters. Returns 0 for empty markup.
pub fn text_to_html_ratio(markup_len: usize, text_len: usize) -> f64 {
    if markup_len == 0 {
        return 0.0;
    }
    round_ratio((text_len as f64 / markup_len.max(1) as f64).min(1.0))
}

fn significant_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .filter(|word| word.chars().count() > 1)
        .map(str::to_lowercase)
}

/// Fraction of distinct title words that occur at least once in the body.
///
/// Words are whitespace-separated, lowercased, and must be longer than one
/// character. Returns 0 when either side has no such words.
pub fn keyword_relevance(title: &str, body: &str) -> f64 {
    let title_words: BTreeSet<String> = significant_words(title).collect();
    if title_words.is_empty() {
        return 0.0;
    }
    let body_words: HashSet<String> = significant_words(body).collect();
    if body_words.is_empty() {
        return 0.0;
    }
    let matched = title_words
        .iter()
        .filter(|word| body_words.contains(*word))
        .count();
    (matched as f64 / title_words.len() as f64).min(1.0)
}

/// Whether the markup carries JSON-LD or schema.org structured data.
pub fn has_structured_data(markup: &str) -> bool {
    STRUCTURED_DATA_MARKERS
        .iter()
        .any(|marker| markup.contains(marker))
}

/// Scans text for email addresses, phone numbers and address hints.
///
/// Results are deduplicated and sorted. A single `"found"` entry in `addresses`
/// marks an address hint; addresses themselves are not parsed.
pub fn find_contact_info(text: &str) -> ContactInfo {
    let collect = |pattern: &Regex| -> Vec<String> {
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };

    let lowered = text.to_lowercase();
    let addresses = if ADDRESS_HINTS.iter().any(|hint| lowered.contains(hint)) {
        vec!["found".to_string()]
    } else {
        Vec::new()
    };

    ContactInfo {
        emails: collect(&EMAIL_PATTERN),
        phones: collect(&PHONE_PATTERN),
        addresses,
    }
}

/// First four-digit year following a copyright symbol or word.
pub fn find_copyright_year(markup: &str) -> Option<i32> {
    COPYRIGHT_PATTERN
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .and_then(|year| year.as_str().parse().ok())
}

/// A copyright notice is fresh when it names this year or the previous one.
pub fn is_copyright_fresh(year: Option<i32>, current_year: i32) -> bool {
    year.is_some_and(|year| year >= current_year - 1)
}
