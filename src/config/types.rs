//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CACHE_CAPACITY, CACHE_TTL, DEFAULT_USER_AGENT, MAX_LINK_CHECKS, PAGE_TIMEOUT_SECS,
    PROBE_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use site_audit::Config;
///
/// let config = Config {
///     url: "https://example.com/".to_string(),
///     max_link_checks: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute URL of the page to audit
    pub url: String,

    /// Where to write the JSON report (stdout when `None`)
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Page fetch timeout in seconds
    pub timeout_seconds: u64,

    /// Per-probe timeout in seconds
    pub probe_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Fetch cache time-to-live
    pub cache_ttl: Duration,

    /// Fetch cache capacity; 0 disables caching
    pub cache_capacity: usize,

    /// Maximum number of same-origin links HEAD-checked (capped at 10)
    pub max_link_checks: usize,

    /// Previously generated Lighthouse JSON report
    pub lighthouse_json: Option<PathBuf>,

    /// Skip every live probe (broken links, robots/sitemap, certificate, stylesheets)
    pub no_probes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: PAGE_TIMEOUT_SECS,
            probe_timeout_seconds: PROBE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl: CACHE_TTL,
            cache_capacity: CACHE_CAPACITY,
            max_link_checks: MAX_LINK_CHECKS,
            lighthouse_json: None,
            no_probes: false,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print the report to stdout
/// site_audit https://example.com/
///
/// # Write the report to a file, reusing a Lighthouse run
/// site_audit https://example.com/ --output analysis.json --lighthouse-json lh.json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_audit",
    about = "Audits a web page and scores its technical, UX, SEO, credibility and content quality."
)]
pub struct Opt {
    /// Absolute URL of the page to audit (scheme required)
    pub url: String,

    /// Output JSON file (stdout when omitted)
    #[arg(short, long, value_parser, env = "SITE_AUDIT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, env = "SITE_AUDIT_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, env = "SITE_AUDIT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = PAGE_TIMEOUT_SECS, env = "SITE_AUDIT_TIMEOUT_SECONDS")]
    pub timeout_seconds: u64,

    /// Timeout in seconds for each live probe
    #[arg(long, default_value_t = PROBE_TIMEOUT_SECS, env = "SITE_AUDIT_PROBE_TIMEOUT_SECONDS")]
    pub probe_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, env = "SITE_AUDIT_USER_AGENT")]
    pub user_agent: String,

    /// Fetch cache time-to-live in seconds
    #[arg(long, default_value_t = CACHE_TTL.as_secs(), env = "SITE_AUDIT_CACHE_TTL_SECS")]
    pub cache_ttl_secs: u64,

    /// Fetch cache capacity (0 disables caching)
    #[arg(long, default_value_t = CACHE_CAPACITY, env = "SITE_AUDIT_CACHE_CAPACITY")]
    pub cache_capacity: usize,

    /// Maximum number of same-origin links HEAD-checked (capped at 10)
    #[arg(long, default_value_t = MAX_LINK_CHECKS, env = "SITE_AUDIT_MAX_LINK_CHECKS")]
    pub max_link_checks: usize,

    /// Lighthouse JSON report to take technical category scores from
    #[arg(long, value_parser, env = "SITE_AUDIT_LIGHTHOUSE_JSON")]
    pub lighthouse_json: Option<PathBuf>,

    /// Skip live probes (broken links, robots/sitemap, certificate, stylesheets)
    #[arg(long, env = "SITE_AUDIT_NO_PROBES")]
    pub no_probes: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            url: opt.url,
            output: opt.output,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            probe_timeout_seconds: opt.probe_timeout_seconds,
            user_agent: opt.user_agent,
            cache_ttl: Duration::from_secs(opt.cache_ttl_secs),
            cache_capacity: opt.cache_capacity,
            max_link_checks: opt.max_link_checks,
            lighthouse_json: opt.lighthouse_json,
            no_probes: opt.no_probes,
        }
    }
}
