// Scoring tests: golden values for every formula row and summary threshold.

use super::categories::*;
use super::*;
use crate::models::{
    H1Stats, HeadingStats, LighthouseScores, ParagraphStats, RobotsSitemap, SecurityHeaderChecks,
};

/// A page that satisfies every fallback indicator.
fn strong_record() -> MeasurementRecord {
    MeasurementRecord {
        has_ssl: true,
        mobile_friendly: true,
        response_time_s: 1.0,
        security_headers: SecurityHeaderChecks::all(),
        broken_links: 0,
        text_html_ratio: 0.5,
        heading_stats: HeadingStats {
            total: 12,
            ..Default::default()
        },
        h1_stats: H1Stats { h1_count: 1 },
        paragraph_stats: ParagraphStats {
            count: 4,
            avg_words: 40.0,
            median_words: 40.0,
        },
        title: "x".repeat(50),
        meta_description_present: true,
        images_with_alt_ratio: 1.0,
        canonical: Some("https://example.com/".into()),
        robots_sitemap: RobotsSitemap {
            robots: true,
            sitemap: true,
        },
        contact_info_found: true,
        has_schema: true,
        copyright_fresh: true,
        social_link_count: 3,
        keyword_relevance: 1.0,
        external_resource_ratio: 0.0,
        ..Default::default()
    }
}

#[test]
fn test_all_signals_present_scores_full_marks() {
    let report = score(&strong_record());
    assert_eq!(
        report.category_scores,
        CategoryScores {
            technical: 100,
            ux_design: 100,
            seo: 100,
            credibility: 100,
            content: 100,
        }
    );
    assert_eq!(report.total, 100);
    assert_eq!(report.summary, "strong technical; good SEO; credible");
}

#[test]
fn test_fallback_technical_full_signals() {
    // title 50 chars, all headers, SSL, viewport, 1s response, no broken links
    let record = strong_record();
    assert!(record.lighthouse.is_none());
    assert_eq!(to_percent(technical(&record)), 100);
}

#[test]
fn test_empty_record_golden_values() {
    let report = score(&MeasurementRecord::default());
    // technical: only the broken-link term (0.10)
    assert_eq!(report.category_scores.technical, 10);
    // ux: 0.15 * 0.2 (no h1) + 0.15 * 0.6 (avg 0 words)
    assert_eq!(report.category_scores.ux_design, 12);
    // seo: 0.2 * title_length_score(0) = 0.2 * 0.5
    assert_eq!(report.category_scores.seo, 10);
    assert_eq!(report.category_scores.credibility, 0);
    // content: 0.4 * (1 - 0)
    assert_eq!(report.category_scores.content, 40);
    // 2.5 + 2.4 + 2.0 + 0 + 6.0 = 12.9
    assert_eq!(report.total, 13);
    assert_eq!(report.summary, "poor technical; content needs improvement");
}

#[test]
fn test_broken_link_term_floors_at_zero() {
    assert_eq!(broken_link_score(0), 1.0);
    assert!((broken_link_score(2) - 0.7).abs() < 1e-12);
    assert_eq!(broken_link_score(7), 0.0);
    assert_eq!(broken_link_score(100), 0.0);

    let mut seven = strong_record();
    seven.broken_links = 7;
    let mut many = strong_record();
    many.broken_links = 500;
    assert_eq!(technical(&seven), technical(&many));
    assert_eq!(score(&seven).category_scores.technical, 90);
}

#[test]
fn test_response_time_score() {
    assert_eq!(response_time_score(1.0), 1.0);
    assert_eq!(response_time_score(0.5), 1.0);
    assert_eq!(response_time_score(5.5), 0.5);
    assert_eq!(response_time_score(10.0), 0.0);
    assert_eq!(response_time_score(30.0), 0.0);
    assert_eq!(response_time_score(0.0), 0.0);
    assert_eq!(response_time_score(-3.0), 0.0);
    assert_eq!(response_time_score(f64::NAN), 0.0);
}

#[test]
fn test_h1_score_table() {
    assert_eq!(h1_score(1), 1.0);
    assert_eq!(h1_score(0), 0.2);
    assert_eq!(h1_score(3), 0.5);
}

#[test]
fn test_paragraph_score_table() {
    assert_eq!(paragraph_score(20.0), 1.0);
    assert_eq!(paragraph_score(80.0), 1.0);
    assert!((paragraph_score(10.0) - 0.7).abs() < 1e-12);
    assert!((paragraph_score(100.0) - 0.4).abs() < 1e-12);
    assert_eq!(paragraph_score(200.0), 0.0);
}

#[test]
fn test_title_length_score_table() {
    assert_eq!(title_length_score(30), 1.0);
    assert_eq!(title_length_score(70), 1.0);
    assert!((title_length_score(29) - 0.79).abs() < 1e-12);
    assert!((title_length_score(71) - 0.79).abs() < 1e-12);
    assert_eq!(title_length_score(0), 0.5);
    assert_eq!(title_length_score(150), 0.0);
}

#[test]
fn test_lighthouse_replaces_fallback() {
    let mut record = MeasurementRecord::default();
    record.lighthouse = Some(LighthouseScores {
        performance: Some(1.0),
        accessibility: Some(1.0),
        seo: None,
        best_practices: None,
    });
    // 0.5 * 1 + 0.25 * 1, missing categories count as 0
    assert_eq!(score(&record).category_scores.technical, 75);
}

#[test]
fn test_empty_lighthouse_uses_fallback() {
    let mut record = strong_record();
    record.lighthouse = Some(LighthouseScores::default());
    assert_eq!(score(&record).category_scores.technical, 100);
}

#[test]
fn test_lighthouse_out_of_range_values_clamped() {
    let scores = LighthouseScores {
        performance: Some(4.0),
        accessibility: Some(f64::NAN),
        seo: Some(-1.0),
        best_practices: Some(1.0),
    };
    assert!((lighthouse_subscore(&scores) - 0.6).abs() < 1e-12);
}

#[test]
fn test_content_with_all_external_resources() {
    let mut record = MeasurementRecord::default();
    record.external_resource_ratio = 1.0;
    record.keyword_relevance = 1.0;
    assert!((content(&record) - 0.6).abs() < 1e-12);
    assert_eq!(score(&record).category_scores.content, 60);
}

#[test]
fn test_seo_monotonic_in_alt_ratio() {
    let mut half = strong_record();
    half.images_with_alt_ratio = 0.5;
    let mut full = strong_record();
    full.images_with_alt_ratio = 1.0;
    assert!(score(&full).category_scores.seo >= score(&half).category_scores.seo);
    assert!(seo(&full) > seo(&half));
}

#[test]
fn test_credibility_social_term_saturates() {
    let mut record = MeasurementRecord::default();
    record.social_link_count = 1;
    assert!((credibility(&record) - 0.2 / 3.0).abs() < 1e-12);
    record.social_link_count = 10;
    assert!((credibility(&record) - 0.2).abs() < 1e-12);
}

#[test]
fn test_out_of_range_indicators_are_clamped() {
    let mut record = strong_record();
    record.text_html_ratio = 7.0;
    record.images_with_alt_ratio = -2.0;
    record.keyword_relevance = f64::NAN;
    record.external_resource_ratio = f64::INFINITY;
    record.response_time_s = f64::NEG_INFINITY;
    let report = score(&record);
    for category in Category::iter() {
        assert!(report.category_scores.get(category) <= 100);
    }
    assert_eq!(report.category_scores.content, 0);
    assert!(report.total <= 100);
}

#[test]
fn test_to_percent_rounds_half_to_even() {
    assert_eq!(to_percent(0.125), 12);
    assert_eq!(to_percent(0.5), 50);
    assert_eq!(to_percent(1.5), 100);
    assert_eq!(to_percent(-0.1), 0);
    assert_eq!(to_percent(f64::NAN), 0);
}

#[test]
fn test_weighted_total() {
    let only_technical = |technical| CategoryScores {
        technical,
        ..Default::default()
    };
    // 50 * 0.25 = 12.5 rounds to even
    assert_eq!(weighted_total(&only_technical(50)), 12);
    // 54 * 0.25 = 13.5
    assert_eq!(weighted_total(&only_technical(54)), 14);
    let all = CategoryScores {
        technical: 100,
        ux_design: 100,
        seo: 100,
        credibility: 100,
        content: 100,
    };
    assert_eq!(weighted_total(&all), 100);
}

#[test]
fn test_category_weights_and_names() {
    let sum: f64 = Category::iter().map(|c| c.weight()).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    let names: Vec<&str> = Category::iter().map(|c| c.as_str()).collect();
    assert_eq!(
        names,
        vec!["technical", "ux_design", "seo", "credibility", "content"]
    );
}

fn scores(technical: u8, seo: u8, credibility: u8, content: u8) -> CategoryScores {
    CategoryScores {
        technical,
        ux_design: 50,
        seo,
        credibility,
        content,
    }
}

#[test]
fn test_summary_technical_thresholds() {
    assert_eq!(summarize(&scores(80, 0, 0, 50)), "strong technical");
    assert_eq!(summarize(&scores(79, 0, 0, 50)), NEUTRAL_SUMMARY);
    assert_eq!(summarize(&scores(40, 0, 0, 50)), NEUTRAL_SUMMARY);
    assert_eq!(summarize(&scores(39, 0, 0, 50)), "poor technical");
}

#[test]
fn test_summary_other_thresholds() {
    assert_eq!(summarize(&scores(60, 70, 0, 50)), "good SEO");
    assert_eq!(summarize(&scores(60, 69, 0, 50)), NEUTRAL_SUMMARY);
    assert_eq!(summarize(&scores(60, 0, 70, 50)), "credible");
    assert_eq!(summarize(&scores(60, 0, 69, 50)), NEUTRAL_SUMMARY);
    assert_eq!(summarize(&scores(60, 0, 0, 49)), "content needs improvement");
}

#[test]
fn test_summary_order_is_fixed() {
    assert_eq!(
        summarize(&scores(10, 90, 90, 10)),
        "poor technical; good SEO; credible; content needs improvement"
    );
}

#[test]
fn test_scoring_is_idempotent() {
    let record = strong_record();
    assert_eq!(score(&record), score(&record));
}

#[test]
fn test_score_report_serializes_flat() {
    let json = serde_json::to_value(score(&MeasurementRecord::default())).unwrap();
    assert_eq!(json["technical"], 10);
    assert_eq!(json["content"], 40);
    assert_eq!(json["total"], 13);
    assert!(json.get("category_scores").is_none());
}
