//! Measurement record: the typed set of indicators fed to the scorer.

use std::collections::BTreeMap;

use serde::Serialize;

/// Presence of the six checked security headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SecurityHeaderChecks {
    pub csp: bool,
    pub hsts: bool,
    pub x_frame_options: bool,
    pub x_content_type_options: bool,
    pub referrer_policy: bool,
    pub permissions_policy: bool,
}

impl SecurityHeaderChecks {
    /// Number of checks in the record.
    pub const TOTAL: usize = 6;

    /// All six headers present.
    pub fn all() -> Self {
        Self {
            csp: true,
            hsts: true,
            x_frame_options: true,
            x_content_type_options: true,
            referrer_policy: true,
            permissions_policy: true,
        }
    }

    fn flags(&self) -> [bool; Self::TOTAL] {
        [
            self.csp,
            self.hsts,
            self.x_frame_options,
            self.x_content_type_options,
            self.referrer_policy,
            self.permissions_policy,
        ]
    }

    /// Number of headers present.
    pub fn present(&self) -> usize {
        self.flags().iter().filter(|&&f| f).count()
    }

    /// Fraction of headers present, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        self.present() as f64 / Self::TOTAL as f64
    }
}

/// Result of the TLS certificate probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CertificateCheck {
    pub valid: bool,
    /// Expiry as RFC 3339
    pub expires: Option<String>,
    pub days_left: Option<i64>,
    pub issuer: Option<String>,
    pub error: Option<String>,
}

impl CertificateCheck {
    /// A failed check carrying the reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeadingStats {
    /// Keys `h1`..`h6`, always all present
    pub counts: BTreeMap<String, usize>,
    pub total: usize,
    /// Deepest heading level present, 0 when there are none
    pub max_depth: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct H1Stats {
    pub h1_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ParagraphStats {
    pub count: usize,
    pub avg_words: f64,
    pub median_words: f64,
}

/// Contact details found by pattern matching. False positives are expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactInfo {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
}

impl ContactInfo {
    pub fn found(&self) -> bool {
        !(self.emails.is_empty() && self.phones.is_empty() && self.addresses.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RobotsSitemap {
    pub robots: bool,
    pub sitemap: bool,
}

/// Category scores taken from a Lighthouse report, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LighthouseScores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<f64>,
    #[serde(rename = "best-practices", skip_serializing_if = "Option::is_none")]
    pub best_practices: Option<f64>,
}

impl LighthouseScores {
    /// No category was supplied.
    pub fn is_empty(&self) -> bool {
        self.performance.is_none()
            && self.accessibility.is_none()
            && self.seo.is_none()
            && self.best_practices.is_none()
    }
}

/// All indicators derived for one page.
///
/// Built once by the analysis pipeline and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeasurementRecord {
    // Retrieval
    pub status_code: Option<u16>,
    pub fetch_error: Option<String>,
    pub insecure_fallback: bool,
    pub response_time_s: f64,
    pub content_length_bytes: usize,

    // Page metadata
    pub title: String,
    pub meta_description: Option<String>,
    pub meta_description_present: bool,
    pub meta_tags: BTreeMap<String, String>,
    pub canonical: Option<String>,
    pub viewport: bool,
    pub favicon: Option<String>,

    // Technical
    pub has_ssl: bool,
    pub ssl_info: CertificateCheck,
    pub mobile_friendly: bool,
    pub security_headers: SecurityHeaderChecks,
    pub broken_links: usize,
    pub robots_sitemap: RobotsSitemap,
    pub lighthouse: Option<LighthouseScores>,

    // Structure
    pub raw_html_len: usize,
    pub body_text_len: usize,
    pub text_html_ratio: f64,
    pub heading_stats: HeadingStats,
    pub h1_stats: H1Stats,
    pub paragraph_stats: ParagraphStats,
    pub images_with_alt_ratio: f64,
    pub external_resource_ratio: f64,
    pub css_font_families: Vec<String>,

    // Credibility
    pub contact_info: ContactInfo,
    pub contact_info_found: bool,
    pub has_schema: bool,
    pub copyright_year: Option<i32>,
    pub copyright_fresh: bool,
    pub social_links: Vec<String>,
    pub social_link_count: usize,

    // Content
    pub keyword_relevance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_fraction() {
        let mut checks = SecurityHeaderChecks::default();
        assert_eq!(checks.fraction(), 0.0);
        checks.csp = true;
        checks.hsts = true;
        checks.referrer_policy = true;
        assert_eq!(checks.present(), 3);
        assert!((checks.fraction() - 0.5).abs() < 1e-12);
        assert_eq!(SecurityHeaderChecks::all().fraction(), 1.0);
    }

    #[test]
    fn test_lighthouse_serializes_best_practices_name() {
        let scores = LighthouseScores {
            performance: Some(0.9),
            best_practices: Some(0.8),
            ..Default::default()
        };
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["best-practices"], 0.8);
        assert!(json.get("seo").is_none());
    }

    #[test]
    fn test_contact_found() {
        let mut info = ContactInfo::default();
        assert!(!info.found());
        info.addresses.push("found".into());
        assert!(info.found());
    }
}
