//! Category scores from a previously produced Lighthouse JSON report.

use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::models::LighthouseScores;
use crate::utils::clamp_unit;

fn category_score(categories: &Value, name: &str) -> Option<f64> {
    let score = categories.get(name)?.get("score")?.as_f64()?;
    if score.is_finite() {
        Some(clamp_unit(score))
    } else {
        None
    }
}

/// Reads `categories.<name>.score` for the four scored categories.
///
/// Values are clamped to `[0, 1]`; missing or non-numeric scores are left out.
/// Returns `None` when no category could be read.
pub fn parse_lighthouse_json(report: &Value) -> Option<LighthouseScores> {
    let categories = report.get("categories")?;
    let scores = LighthouseScores {
        performance: category_score(categories, "performance"),
        accessibility: category_score(categories, "accessibility"),
        seo: category_score(categories, "seo"),
        best_practices: category_score(categories, "best-practices"),
    };
    (!scores.is_empty()).then_some(scores)
}

/// Loads a Lighthouse report from disk.
///
/// An unreadable or malformed file is logged and treated as absent.
pub fn load_lighthouse_report(path: &Path) -> Option<LighthouseScores> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Cannot read Lighthouse report {}: {e}", path.display());
            return None;
        }
    };
    let report: Value = match serde_json::from_str(&raw) {
        Ok(report) => report,
        Err(e) => {
            warn!("Malformed Lighthouse report {}: {e}", path.display());
            return None;
        }
    };
    let scores = parse_lighthouse_json(&report);
    match &scores {
        Some(scores) => info!("Using Lighthouse scores from {}: {scores:?}", path.display()),
        None => warn!("Lighthouse report {} has no category scores", path.display()),
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_parse_all_categories() {
        let report = json!({
            "categories": {
                "performance": {"score": 0.92},
                "accessibility": {"score": 1},
                "seo": {"score": 0.8},
                "best-practices": {"score": 0.75},
                "pwa": {"score": 0.1}
            }
        });
        let scores = parse_lighthouse_json(&report).unwrap();
        assert_eq!(scores.performance, Some(0.92));
        assert_eq!(scores.accessibility, Some(1.0));
        assert_eq!(scores.seo, Some(0.8));
        assert_eq!(scores.best_practices, Some(0.75));
    }

    #[test]
    fn test_parse_clamps_and_skips_invalid() {
        let report = json!({
            "categories": {
                "performance": {"score": 1.7},
                "accessibility": {"score": -0.2},
                "seo": {"score": null},
                "best-practices": {"score": "high"}
            }
        });
        let scores = parse_lighthouse_json(&report).unwrap();
        assert_eq!(scores.performance, Some(1.0));
        assert_eq!(scores.accessibility, Some(0.0));
        assert_eq!(scores.seo, None);
        assert_eq!(scores.best_practices, None);
    }

    #[test]
    fn test_parse_without_categories_is_absent() {
        assert_eq!(parse_lighthouse_json(&json!({})), None);
        assert_eq!(parse_lighthouse_json(&json!({"categories": {}})), None);
    }

    #[test]
    fn test_load_report_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"categories": {{"performance": {{"score": 0.5}}}}}}"#
        )
        .unwrap();
        let scores = load_lighthouse_report(file.path()).unwrap();
        assert_eq!(scores.performance, Some(0.5));
    }

    #[test]
    fn test_load_malformed_or_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(load_lighthouse_report(file.path()), None);

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_lighthouse_report(&dir.path().join("missing.json")), None);
    }
}
