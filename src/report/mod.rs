//! Report assembly and output.
//!
//! The report is a pure projection of the measurement record and its scores:
//! a handful of headline indicators, the score breakdown, and the full record.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::MeasurementRecord;
use crate::scoring::ScoreReport;

/// Headline indicators repeated at the top of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Indicators {
    pub has_ssl: bool,
    pub mobile_friendly: bool,
    pub meta_description_present: bool,
    pub contact_info_found: bool,
    pub lighthouse_performance: Option<f64>,
    pub broken_links: usize,
}

impl From<&MeasurementRecord> for Indicators {
    fn from(record: &MeasurementRecord) -> Self {
        Self {
            has_ssl: record.has_ssl,
            mobile_friendly: record.mobile_friendly,
            meta_description_present: record.meta_description_present,
            contact_info_found: record.contact_info_found,
            lighthouse_performance: record.lighthouse.and_then(|lh| lh.performance),
            broken_links: record.broken_links,
        }
    }
}

/// The JSON document written for one audited page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub url: String,
    pub scores: ScoreReport,
    pub indicators: Indicators,
    pub summary: String,
    pub measures: MeasurementRecord,
}

/// Packages the URL, scores and record into a report.
pub fn assemble(url: &str, record: MeasurementRecord, scores: ScoreReport) -> ReportDocument {
    ReportDocument {
        url: url.to_string(),
        indicators: Indicators::from(&record),
        summary: scores.summary.clone(),
        scores,
        measures: record,
    }
}

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &ReportDocument) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

/// Writes the report to `output`, or to stdout when no path is given.
///
/// Writing to a file prints `Wrote <path>` on stdout.
pub fn write_report(report: &ReportDocument, output: Option<&Path>) -> Result<()> {
    let json = to_json(report)?;
    match output {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("Failed to write report to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LighthouseScores;
    use crate::scoring::score;

    fn sample_record() -> MeasurementRecord {
        MeasurementRecord {
            has_ssl: true,
            mobile_friendly: true,
            meta_description_present: true,
            broken_links: 2,
            title: "Acme".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_assemble_projects_indicators() {
        let record = sample_record();
        let scores = score(&record);
        let report = assemble("https://example.com/", record.clone(), scores.clone());

        assert_eq!(report.url, "https://example.com/");
        assert_eq!(report.summary, scores.summary);
        assert_eq!(report.scores, scores);
        assert!(report.indicators.has_ssl);
        assert!(!report.indicators.contact_info_found);
        assert_eq!(report.indicators.broken_links, 2);
        assert_eq!(report.indicators.lighthouse_performance, None);
        assert_eq!(report.measures, record);
    }

    #[test]
    fn test_lighthouse_performance_indicator() {
        let mut record = sample_record();
        record.lighthouse = Some(LighthouseScores {
            performance: Some(0.42),
            ..Default::default()
        });
        let indicators = Indicators::from(&record);
        assert_eq!(indicators.lighthouse_performance, Some(0.42));
    }

    #[test]
    fn test_json_shape() {
        let record = sample_record();
        let scores = score(&record);
        let report = assemble("https://example.com/", record, scores);
        let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        for key in ["url", "scores", "indicators", "summary", "measures"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        for key in ["technical", "ux_design", "seo", "credibility", "content", "total", "summary"] {
            assert!(json["scores"].get(key).is_some(), "missing scores.{key}");
        }
        assert!(json["indicators"]["lighthouse_performance"].is_null());
        assert_eq!(json["measures"]["title"], "Acme");
        assert_eq!(json["summary"], json["scores"]["summary"]);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let record = sample_record();
        let scores = score(&record);
        let report = assemble("https://example.com/", record, scores);

        write_report(&report, Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["url"], "https://example.com/");
        assert_eq!(written["indicators"]["broken_links"], 2);
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/report.json");
        let record = sample_record();
        let scores = score(&record);
        let report = assemble("https://example.com/", record, scores);
        assert!(write_report(&report, Some(&path)).is_err());
    }
}
