//! Scoring model.
//!
//! Combines the measurement record into five category sub-scores, maps each to an
//! integer percentage, and forms a weighted total plus a short summary.
//!
//! Scoring is pure and never fails: out-of-range or non-finite indicators are
//! clamped into `[0, 1]` before they are combined.

pub mod categories;
mod summary;
mod types;

use strum::IntoEnumIterator;

use crate::models::MeasurementRecord;
use crate::utils::clamp_unit;

pub use summary::{summarize, NEUTRAL_SUMMARY};
pub use types::{Category, CategoryScores, ScoreReport};

/// Maps a `[0, 1]` sub-score to an integer percentage.
///
/// Out-of-range input is clamped first; halves round to even (0.125 maps to 12).
pub fn to_percent(subscore: f64) -> u8 {
    (clamp_unit(subscore) * 100.0).round_ties_even() as u8
}

/// Raw `[0, 1]` sub-score of one category.
pub fn subscore(category: Category, record: &MeasurementRecord) -> f64 {
    match category {
        Category::Technical => categories::technical(record),
        Category::UxDesign => categories::ux_design(record),
        Category::Seo => categories::seo(record),
        Category::Credibility => categories::credibility(record),
        Category::Content => categories::content(record),
    }
}

/// Weighted sum of the category percentages, rounded half to even.
pub fn weighted_total(scores: &CategoryScores) -> u8 {
    let total: f64 = Category::iter()
        .map(|category| f64::from(scores.get(category)) * category.weight())
        .sum();
    total.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Scores a measurement record.
pub fn score(record: &MeasurementRecord) -> ScoreReport {
    let percent = |category| to_percent(subscore(category, record));
    let category_scores = CategoryScores {
        technical: percent(Category::Technical),
        ux_design: percent(Category::UxDesign),
        seo: percent(Category::Seo),
        credibility: percent(Category::Credibility),
        content: percent(Category::Content),
    };
    let total = weighted_total(&category_scores);
    let summary = summarize(&category_scores);
    log::debug!("Scores: {category_scores:?}, total {total}: {summary}");
    ScoreReport {
        category_scores,
        total,
        summary,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
