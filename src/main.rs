//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_audit` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Writing the report to stdout or a file
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_audit::config::Opt;
use site_audit::initialization::init_logger_with;
use site_audit::{run_audit, write_report, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load SITE_AUDIT_* variables from .env (if it exists)
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let report = match run_audit(&config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("site_audit error: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_report(&report, config.output.as_deref()) {
        eprintln!("site_audit error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
