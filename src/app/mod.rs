//! Application-boundary helpers used by the binary and `run_audit`.

pub mod url;

// Re-export public API
pub use url::validate_url;
