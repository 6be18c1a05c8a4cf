//! Page analysis pipeline.
//!
//! Runs fetch, extraction, the live probes and the indicator derivers for one URL
//! and produces the [`MeasurementRecord`] handed to the scorer. Nothing here fails:
//! an unreachable page yields a fully degraded record.

use chrono::{DateTime, Datelike, Utc};
use log::{debug, info};
use url::Url;

use crate::config::{MAX_LINK_CHECKS, MAX_STYLESHEET_FETCHES};
use crate::fetch::{Fetcher, PageFetchResult, ReqwestTransport, Transport};
use crate::indicators::{
    check_broken_links, check_robots_and_sitemap, check_security_headers, external_resource_ratio,
    find_contact_info, find_copyright_year, h1_stats, harvest_font_families, has_structured_data,
    heading_stats, images_with_alt_ratio, is_copyright_fresh, keyword_relevance, paragraph_stats,
    sample_internal_links, text_to_html_ratio,
};
use crate::models::{CertificateCheck, LighthouseScores, MeasurementRecord, RobotsSitemap};
use crate::parse::{extract, StructuralDocument};
use crate::tls::{check_page_certificate, NOT_HTTPS};
use crate::utils::{netloc, round_ratio, round_to};

/// Recorded as the certificate error when live probes are turned off.
pub const PROBES_DISABLED: &str = "live probes disabled";

/// Shared resources for analysing pages.
pub struct AnalysisContext<T = ReqwestTransport> {
    pub fetcher: Fetcher<T>,
    /// Client for broken-link, robots/sitemap and stylesheet probes
    pub probe_client: reqwest::Client,
    pub max_link_checks: usize,
    pub lighthouse: Option<LighthouseScores>,
    pub probes_enabled: bool,
}

/// Outcome of the live probes for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeResults {
    pub broken_links: usize,
    pub robots_sitemap: RobotsSitemap,
    pub ssl_info: CertificateCheck,
    pub css_font_families: Vec<String>,
}

impl ProbeResults {
    /// Conservative defaults used when probing is disabled.
    pub fn disabled(page_url: &Url) -> Self {
        let reason = if page_url.scheme() == "https" {
            PROBES_DISABLED
        } else {
            NOT_HTTPS
        };
        Self {
            ssl_info: CertificateCheck::failed(reason),
            ..Default::default()
        }
    }
}

/// Number of links to HEAD-check, never more than `MAX_LINK_CHECKS`.
pub fn link_check_limit(configured: usize) -> usize {
    configured.min(MAX_LINK_CHECKS)
}

/// Runs the independent live probes concurrently.
pub async fn run_probes(
    client: &reqwest::Client,
    page_url: &Url,
    document: &StructuralDocument,
    max_link_checks: usize,
    now: DateTime<Utc>,
) -> ProbeResults {
    let limit = link_check_limit(max_link_checks);
    let sample = sample_internal_links(&document.links, &netloc(page_url), limit);
    debug!("Checking {} internal links on {page_url}", sample.len());

    let (broken_links, robots_sitemap, ssl_info, css_font_families) = tokio::join!(
        check_broken_links(client, &sample),
        check_robots_and_sitemap(client, page_url),
        check_page_certificate(page_url, now),
        harvest_font_families(client, &document.css_links, MAX_STYLESHEET_FETCHES),
    );

    ProbeResults {
        broken_links,
        robots_sitemap,
        ssl_info,
        css_font_families,
    }
}

/// An https page counts as served over SSL only if the verified fetch worked and the
/// certificate probe found the certificate valid.
pub fn derive_has_ssl(page_url: &Url, fetch: &PageFetchResult, ssl_info: &CertificateCheck) -> bool {
    page_url.scheme() == "https" && !fetch.insecure_fallback && ssl_info.valid
}

/// Derives every indicator from the fetch result, the extracted document and the
/// probe results.
pub fn build_record(
    page_url: &Url,
    fetch: &PageFetchResult,
    document: &StructuralDocument,
    probes: ProbeResults,
    lighthouse: Option<LighthouseScores>,
    current_year: i32,
) -> MeasurementRecord {
    let body_text_len = document.body_text.chars().count();
    let meta_description = document.meta_description().map(str::to_string);
    let contact_info = find_contact_info(&format!("{} {}", fetch.body, document.body_text));
    let copyright_year = find_copyright_year(&fetch.body);
    let social_links: Vec<String> = document.social_links.iter().cloned().collect();

    MeasurementRecord {
        status_code: fetch.status_code,
        fetch_error: fetch.fetch_error.clone(),
        insecure_fallback: fetch.insecure_fallback,
        response_time_s: round_to(fetch.elapsed_seconds, 3),
        content_length_bytes: fetch.content_length_bytes,

        title: document.title.clone(),
        meta_description_present: meta_description.is_some(),
        meta_description,
        meta_tags: document.meta_tags.clone(),
        canonical: document.canonical_url.clone(),
        viewport: document.has_viewport_meta,
        favicon: document.favicon.clone(),

        has_ssl: derive_has_ssl(page_url, fetch, &probes.ssl_info),
        ssl_info: probes.ssl_info,
        mobile_friendly: document.has_viewport_meta,
        security_headers: check_security_headers(&fetch.headers),
        broken_links: probes.broken_links,
        robots_sitemap: probes.robots_sitemap,
        lighthouse: lighthouse.filter(|scores| !scores.is_empty()),

        raw_html_len: document.raw_markup_length,
        body_text_len,
        text_html_ratio: text_to_html_ratio(document.raw_markup_length, body_text_len),
        heading_stats: heading_stats(&document.headings),
        h1_stats: h1_stats(&document.headings),
        paragraph_stats: paragraph_stats(&document.paragraph_word_counts),
        images_with_alt_ratio: images_with_alt_ratio(&document.images),
        external_resource_ratio: external_resource_ratio(document, &netloc(page_url)),
        css_font_families: probes.css_font_families,

        contact_info_found: contact_info.found(),
        contact_info,
        has_schema: has_structured_data(&fetch.body),
        copyright_fresh: is_copyright_fresh(copyright_year, current_year),
        copyright_year,
        social_link_count: social_links.len(),
        social_links,

        keyword_relevance: round_ratio(keyword_relevance(&document.title, &document.body_text)),
    }
}

impl<T: Transport> AnalysisContext<T> {
    /// Fetches and analyses `page_url` as of `now`.
    pub async fn analyze(&self, page_url: &Url, now: DateTime<Utc>) -> MeasurementRecord {
        let fetch = self.fetcher.fetch(page_url.as_str()).await;
        let document = extract(page_url, &fetch.body);

        let probes = if self.probes_enabled {
            run_probes(
                &self.probe_client,
                page_url,
                &document,
                self.max_link_checks,
                now,
            )
            .await
        } else {
            debug!("Live probes disabled for {page_url}");
            ProbeResults::disabled(page_url)
        };

        let record = build_record(
            page_url,
            &fetch,
            &document,
            probes,
            self.lighthouse,
            now.year(),
        );
        info!(
            "Analysed {page_url}: status {:?}, {} broken links, ssl {}",
            record.status_code, record.broken_links, record.has_ssl
        );
        record
    }
}
