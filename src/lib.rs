//! site_audit library: single-page quality auditing
//!
//! This library fetches one web page, extracts its structure, derives heuristic
//! indicators (some through live network probes), and scores the page from 0 to 100
//! across five categories: technical, UX/design, SEO, credibility and content.
//!
//! # Example
//!
//! ```no_run
//! use site_audit::{run_audit, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com/".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config).await?;
//! println!("{}: {} ({})", report.url, report.scores.total, report.summary);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod analysis;
mod app;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod indicators;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod report;
pub mod scoring;
pub mod tls;
mod utils;

// Re-export public API
pub use analysis::AnalysisContext;
pub use app::validate_url;
pub use config::{Config, LogFormat, LogLevel};
pub use models::MeasurementRecord;
pub use report::{write_report, ReportDocument};
pub use run::run_audit;
pub use scoring::{score, ScoreReport};

// Internal run module (wires configuration into the pipeline)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use chrono::Utc;
    use log::info;

    use crate::analysis::AnalysisContext;
    use crate::app::validate_url;
    use crate::config::Config;
    use crate::fetch::{FetchCache, Fetcher};
    use crate::indicators::load_lighthouse_report;
    use crate::initialization::{init_page_transport, init_probe_client};
    use crate::report::{assemble, ReportDocument};
    use crate::scoring::score;

    /// Audits the page named by `config.url`.
    ///
    /// Network problems never make this fail: an unreachable page still produces a
    /// report, with very low scores and `measures.fetch_error` populated.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The URL is not an absolute http(s) URL with a host
    /// - The HTTP clients cannot be built
    pub async fn run_audit(config: &Config) -> Result<ReportDocument> {
        let url = validate_url(&config.url)
            .with_context(|| format!("Invalid URL '{}'", config.url.trim()))?;

        let cache = (config.cache_capacity > 0)
            .then(|| Arc::new(FetchCache::new(config.cache_ttl, config.cache_capacity)));
        let transport =
            init_page_transport(config).context("Failed to initialize page HTTP client")?;
        let probe_client =
            init_probe_client(config).context("Failed to initialize probe HTTP client")?;
        let lighthouse = config
            .lighthouse_json
            .as_deref()
            .and_then(load_lighthouse_report);

        let ctx = AnalysisContext {
            fetcher: Fetcher::new(transport, cache),
            probe_client,
            max_link_checks: config.max_link_checks,
            lighthouse,
            probes_enabled: !config.no_probes,
        };

        info!("Auditing {url}");
        let record = ctx.analyze(&url, Utc::now()).await;
        let scores = score(&record);
        info!("{url}: total {} ({})", scores.total, scores.summary);

        Ok(assemble(url.as_str(), record, scores))
    }
}
