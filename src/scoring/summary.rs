//! One-line textual verdict from the category scores.

use super::types::CategoryScores;

/// Returned when no rule fires.
pub const NEUTRAL_SUMMARY: &str = "Mixed signals.";

/// Joins the verdicts that apply, in a fixed order, with `"; "`.
///
/// Technical contributes at most one of "strong technical" (>= 80) or
/// "poor technical" (< 40).
pub fn summarize(scores: &CategoryScores) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if scores.technical >= 80 {
        parts.push("strong technical");
    } else if scores.technical < 40 {
        parts.push("poor technical");
    }
    if scores.seo >= 70 {
        parts.push("good SEO");
    }
    if scores.credibility >= 70 {
        parts.push("credible");
    }
    if scores.content < 50 {
        parts.push("content needs improvement");
    }

    if parts.is_empty() {
        NEUTRAL_SUMMARY.to_string()
    } else {
        parts.join("; ")
    }
}
