//! Security header presence.

use std::collections::BTreeMap;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_PERMISSIONS_POLICY, HEADER_REFERRER_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
};
use crate::models::SecurityHeaderChecks;

/// Checks which security headers the response carried.
///
/// Header names are matched case-insensitively; values are not inspected.
pub fn check_security_headers(headers: &BTreeMap<String, String>) -> SecurityHeaderChecks {
    let present = |name: &str| headers.keys().any(|key| key.eq_ignore_ascii_case(name));
    SecurityHeaderChecks {
        csp: present(HEADER_CONTENT_SECURITY_POLICY),
        hsts: present(HEADER_STRICT_TRANSPORT_SECURITY),
        x_frame_options: present(HEADER_X_FRAME_OPTIONS),
        x_content_type_options: present(HEADER_X_CONTENT_TYPE_OPTIONS),
        referrer_policy: present(HEADER_REFERRER_POLICY),
        permissions_policy: present(HEADER_PERMISSIONS_POLICY),
    }
}
