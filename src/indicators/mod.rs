//! Indicator derivers.
//!
//! Each deriver computes one or more measurement record fields from the structural
//! document, the fetch result, or its own live probe:
//! - Pure heuristics: text density, headings, paragraphs, alt text, external
//!   resources, contact details, structured data, keyword overlap, copyright year
//! - Response headers: security header presence
//! - Live probes: broken links, robots.txt/sitemap.xml, stylesheet font families
//! - Lighthouse report ingestion
//!
//! Live probes never fail. Any network error resolves to the conservative
//! "not present" or "broken" outcome and is logged.

mod content;
mod css;
mod lighthouse;
mod links;
mod probe;
mod robots;
mod security;
mod structure;

pub use content::{
    find_contact_info, find_copyright_year, has_structured_data, is_copyright_fresh,
    keyword_relevance, text_to_html_ratio,
};
pub use css::{extract_font_families, fetch_stylesheets, harvest_font_families};
pub use lighthouse::{load_lighthouse_report, parse_lighthouse_json};
pub use links::{check_broken_links, is_broken_status, sample_internal_links};
pub use probe::{probe_get, probe_head, ProbeResponse};
pub use robots::{check_robots_and_sitemap, robots_present, sitemap_present};
pub use security::check_security_headers;
pub use structure::{
    external_resource_ratio, h1_stats, heading_stats, images_with_alt_ratio, paragraph_stats,
};
