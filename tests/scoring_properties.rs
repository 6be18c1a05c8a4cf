//! Property tests for the scorer: bounds, idempotence and monotonicity hold for
//! any measurement record, including out-of-range and non-finite indicators.

use proptest::prelude::*;

use site_audit::models::{
    ContactInfo, H1Stats, HeadingStats, LighthouseScores, ParagraphStats, RobotsSitemap,
    SecurityHeaderChecks,
};
use site_audit::{score, MeasurementRecord};

fn any_ratio() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0..=1.0f64,
        -5.0..5.0f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn any_category() -> impl Strategy<Value = Option<f64>> {
    proptest::option::of(any_ratio())
}

fn any_lighthouse() -> impl Strategy<Value = Option<LighthouseScores>> {
    proptest::option::of(
        (any_category(), any_category(), any_category(), any_category()).prop_map(
            |(performance, accessibility, seo, best_practices)| LighthouseScores {
                performance,
                accessibility,
                seo,
                best_practices,
            },
        ),
    )
}

prop_compose! {
    fn any_record()(
        flags in proptest::collection::vec(any::<bool>(), 14),
        response_time_s in prop_oneof![0.0..30.0f64, Just(-1.0), Just(f64::NAN)],
        broken_links in 0usize..50,
        text_html_ratio in any_ratio(),
        (heading_total, h1_count) in (0usize..40, 0usize..5),
        avg_words in prop_oneof![0.0..500.0f64, Just(f64::NAN)],
        title in "[a-z ]{0,120}",
        images_with_alt_ratio in any_ratio(),
        external_resource_ratio in any_ratio(),
        keyword_relevance in any_ratio(),
        social_link_count in 0usize..10,
        lighthouse in any_lighthouse(),
    ) -> MeasurementRecord {
        MeasurementRecord {
            has_ssl: flags[0],
            mobile_friendly: flags[1],
            response_time_s,
            security_headers: SecurityHeaderChecks {
                csp: flags[2],
                hsts: flags[3],
                x_frame_options: flags[4],
                x_content_type_options: flags[5],
                referrer_policy: flags[6],
                permissions_policy: flags[7],
            },
            broken_links,
            text_html_ratio,
            heading_stats: HeadingStats { total: heading_total, ..Default::default() },
            h1_stats: H1Stats { h1_count },
            paragraph_stats: ParagraphStats { count: 1, avg_words, median_words: avg_words },
            title,
            meta_description_present: flags[8],
            images_with_alt_ratio,
            canonical: flags[9].then(|| "https://example.com/".to_string()),
            robots_sitemap: RobotsSitemap { robots: flags[10], sitemap: flags[11] },
            contact_info_found: flags[12],
            contact_info: ContactInfo::default(),
            has_schema: flags[13],
            copyright_fresh: flags[0] && flags[13],
            social_link_count,
            external_resource_ratio,
            keyword_relevance,
            lighthouse,
            ..Default::default()
        }
    }
}

proptest! {
    #[test]
    fn test_scores_stay_in_bounds(record in any_record()) {
        let report = score(&record);
        let c = report.category_scores;
        for value in [c.technical, c.ux_design, c.seo, c.credibility, c.content, report.total] {
            prop_assert!(value <= 100);
        }
        prop_assert!(!report.summary.is_empty());
    }

    #[test]
    fn test_scoring_is_idempotent(record in any_record()) {
        prop_assert_eq!(score(&record), score(&record.clone()));
    }

    #[test]
    fn test_alt_ratio_never_lowers_seo(record in any_record(), low in 0.0..=1.0f64, high in 0.0..=1.0f64) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let worse = MeasurementRecord { images_with_alt_ratio: low, ..record.clone() };
        let better = MeasurementRecord { images_with_alt_ratio: high, ..record };
        prop_assert!(score(&better).category_scores.seo >= score(&worse).category_scores.seo);
    }

    #[test]
    fn test_more_broken_links_never_raise_fallback_technical(record in any_record(), extra in 0usize..20) {
        let record = MeasurementRecord { lighthouse: None, ..record };
        let more = MeasurementRecord { broken_links: record.broken_links + extra, ..record.clone() };
        prop_assert!(
            score(&more).category_scores.technical <= score(&record).category_scores.technical
        );
    }
}
