//! Score report data structures.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    WEIGHT_CONTENT, WEIGHT_CREDIBILITY, WEIGHT_SEO, WEIGHT_TECHNICAL, WEIGHT_UX_DESIGN,
};

/// Quality dimension scored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Category {
    Technical,
    UxDesign,
    Seo,
    Credibility,
    Content,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Category {
    /// Key used in the report.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::UxDesign => "ux_design",
            Category::Seo => "seo",
            Category::Credibility => "credibility",
            Category::Content => "content",
        }
    }

    /// Contribution to the weighted total.
    pub fn weight(&self) -> f64 {
        match self {
            Category::Technical => WEIGHT_TECHNICAL,
            Category::UxDesign => WEIGHT_UX_DESIGN,
            Category::Seo => WEIGHT_SEO,
            Category::Credibility => WEIGHT_CREDIBILITY,
            Category::Content => WEIGHT_CONTENT,
        }
    }
}

/// Per-category scores, each an integer percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    pub technical: u8,
    pub ux_design: u8,
    pub seo: u8,
    pub credibility: u8,
    pub content: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Technical => self.technical,
            Category::UxDesign => self.ux_design,
            Category::Seo => self.seo,
            Category::Credibility => self.credibility,
            Category::Content => self.content,
        }
    }
}

/// Output of the scorer.
///
/// Serializes flat: the five category keys, then `total` and `summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    #[serde(flatten)]
    pub category_scores: CategoryScores,
    pub total: u8,
    pub summary: String,
}
