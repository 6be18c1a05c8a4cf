//! Category sub-score formulas.
//!
//! Each function returns a raw sub-score in `[0, 1]` before percentage mapping.
//! The coefficients are fixed so scores stay comparable across runs and releases.

use crate::models::{LighthouseScores, MeasurementRecord};
use crate::utils::clamp_unit;

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// 1.0 at or under one second, falling linearly to 0 at ten seconds.
/// A missing (zero) or invalid response time scores 0.
pub fn response_time_score(response_time_s: f64) -> f64 {
    if response_time_s > 0.0 {
        clamp_unit((10.0 - response_time_s) / 9.0)
    } else {
        0.0
    }
}

/// Each broken link costs 0.15, floored at 0.
pub fn broken_link_score(broken_links: usize) -> f64 {
    (1.0 - 0.15 * broken_links as f64).max(0.0)
}

/// Exactly one H1 is ideal; several are tolerated; none is penalized.
pub fn h1_score(h1_count: usize) -> f64 {
    match h1_count {
        1 => 1.0,
        0 => 0.2,
        _ => 0.5,
    }
}

pub fn paragraph_score(avg_words: f64) -> f64 {
    if (20.0..=80.0).contains(&avg_words) {
        1.0
    } else {
        (1.0 - (avg_words - 40.0).abs() / 100.0).max(0.0)
    }
}

pub fn title_length_score(title_len: usize) -> f64 {
    if (30..=70).contains(&title_len) {
        1.0
    } else {
        (1.0 - (title_len as f64 - 50.0).abs() / 100.0).max(0.0)
    }
}

pub fn lighthouse_subscore(scores: &LighthouseScores) -> f64 {
    let value = |score: Option<f64>| clamp_unit(score.unwrap_or(0.0));
    0.5 * value(scores.performance)
        + 0.25 * value(scores.accessibility)
        + 0.15 * value(scores.seo)
        + 0.10 * value(scores.best_practices)
}

/// Lighthouse-based when a report with at least one category is present,
/// otherwise the fallback formula over SSL, viewport, speed, headers and links.
pub fn technical(record: &MeasurementRecord) -> f64 {
    if let Some(lighthouse) = record.lighthouse.as_ref().filter(|lh| !lh.is_empty()) {
        return lighthouse_subscore(lighthouse);
    }
    0.35 * flag(record.has_ssl)
        + 0.25 * flag(record.mobile_friendly)
        + 0.20 * response_time_score(record.response_time_s)
        + 0.10 * record.security_headers.fraction()
        + 0.10 * broken_link_score(record.broken_links)
}

pub fn ux_design(record: &MeasurementRecord) -> f64 {
    let text_ratio_score = (2.0 * clamp_unit(record.text_html_ratio)).min(1.0);
    let headings_score = (record.heading_stats.total as f64 / 12.0).min(1.0);
    0.4 * text_ratio_score
        + 0.3 * headings_score
        + 0.15 * h1_score(record.h1_stats.h1_count)
        + 0.15 * paragraph_score(record.paragraph_stats.avg_words)
}

pub fn seo(record: &MeasurementRecord) -> f64 {
    let title_len = record.title.chars().count();
    0.25 * flag(title_len > 0)
        + 0.2 * title_length_score(title_len)
        + 0.2 * flag(record.meta_description_present)
        + 0.15 * clamp_unit(record.images_with_alt_ratio)
        + 0.1 * flag(record.canonical.is_some())
        + 0.1 * flag(record.robots_sitemap.sitemap)
}

pub fn credibility(record: &MeasurementRecord) -> f64 {
    0.3 * flag(record.contact_info_found)
        + 0.25 * flag(record.has_ssl)
        + 0.15 * flag(record.has_schema)
        + 0.1 * flag(record.copyright_fresh)
        + 0.2 * (record.social_link_count as f64 / 3.0).min(1.0)
}

pub fn content(record: &MeasurementRecord) -> f64 {
    0.6 * clamp_unit(record.keyword_relevance)
        + 0.4 * (1.0 - clamp_unit(record.external_resource_ratio))
}
