//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the application,
//! including timeouts, size limits, cache bounds and the scoring weights.

use std::time::Duration;

// Network operation timeouts
/// Page fetch timeout in seconds
pub const PAGE_TIMEOUT_SECS: u64 = 10;
/// Timeout in seconds for each live probe (HEAD link checks, robots.txt, sitemap.xml, stylesheets)
pub const PROBE_TIMEOUT_SECS: u64 = 6;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// Port used by the certificate probe
pub const TLS_PORT: u16 = 443;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Fetch cache
/// How long a successful page fetch stays cached (one hour)
pub const CACHE_TTL: Duration = Duration::from_secs(3600);
/// Maximum number of cached page fetches
pub const CACHE_CAPACITY: usize = 256;

// Redirect handling
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;

// Probe bounds
/// Maximum number of same-origin links HEAD-checked per page
pub const MAX_LINK_CHECKS: usize = 10;
/// Maximum number of stylesheets fetched for font-family harvesting
pub const MAX_STYLESHEET_FETCHES: usize = 10;

// Input limits
/// Maximum URL length (2048 characters), matching common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

// Error message limits
/// Maximum error message length in characters kept in the report
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 2000;

/// Number of decimals kept for ratios written into the report
pub const RATIO_DECIMALS: i32 = 3;

/// Domains whose links count as social profile links.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "facebook.com",
    "twitter.com",
    "linkedin.com",
    "instagram.com",
    "youtube.com",
];

// Category weights (sum to 1.0)
pub const WEIGHT_TECHNICAL: f64 = 0.25;
pub const WEIGHT_UX_DESIGN: f64 = 0.20;
pub const WEIGHT_SEO: f64 = 0.20;
pub const WEIGHT_CREDIBILITY: f64 = 0.20;
pub const WEIGHT_CONTENT: f64 = 0.15;
