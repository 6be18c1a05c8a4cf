//! Utilities for sanitizing error messages.
//!
//! Removes control characters from error messages before they are written into
//! the report, and truncates overly long messages.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when embedded in JSON reports or displayed in logs.
///
/// # Arguments
///
/// * `message` - The error message to sanitize
///
/// # Returns
///
/// A sanitized version of the message with control characters removed.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7f}')
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncated messages end with a note carrying the original length.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let max = crate::config::MAX_ERROR_MESSAGE_LENGTH;
    let length = sanitized.chars().count();

    if length > max {
        // Leave room for the truncation note
        let keep = max.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!("{truncated}... (truncated, original length: {length} chars)")
    } else {
        sanitized
    }
}
