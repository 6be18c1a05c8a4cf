//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON, to stderr)
//! - HTTP clients for the page fetch and the live probes
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_page_transport, init_probe_client};
pub use logger::init_logger_with;
