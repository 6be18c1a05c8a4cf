//! Peer certificate parsing and expiry assessment.

use chrono::{DateTime, Utc};

use crate::error_handling::ProbeError;
use crate::models::CertificateCheck;

const SECONDS_PER_DAY: i64 = 86_400;

/// The fields of a leaf certificate the probe reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerCertificate {
    pub not_after: DateTime<Utc>,
    pub issuer: String,
}

/// Parses a DER-encoded X.509 certificate.
pub fn parse_certificate(der: &[u8]) -> Result<PeerCertificate, ProbeError> {
    let (_, cert) = x509_parser::parse_x509_certificate(der)
        .map_err(|e| ProbeError::Certificate(e.to_string()))?;
    let timestamp = cert.tbs_certificate.validity.not_after.timestamp();
    let not_after = DateTime::<Utc>::from_timestamp(timestamp, 0).ok_or_else(|| {
        ProbeError::Certificate(format!("not_after out of range: {timestamp}"))
    })?;
    Ok(PeerCertificate {
        not_after,
        issuer: cert.tbs_certificate.issuer.to_string(),
    })
}

/// Judges a certificate valid when it expires after `now`.
///
/// `days_left` is rounded toward negative infinity, so a certificate that expired
/// an hour ago reports -1.
pub fn assess_expiry(cert: &PeerCertificate, now: DateTime<Utc>) -> CertificateCheck {
    let remaining = cert.not_after - now;
    CertificateCheck {
        valid: cert.not_after > now,
        expires: Some(cert.not_after.to_rfc3339()),
        days_left: Some(remaining.num_seconds().div_euclid(SECONDS_PER_DAY)),
        issuer: Some(cert.issuer.clone()),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn cert_expiring_at(not_after: DateTime<Utc>) -> PeerCertificate {
        PeerCertificate {
            not_after,
            issuer: "C=US, O=Let's Encrypt, CN=R11".to_string(),
        }
    }

    #[test]
    fn test_future_expiry_is_valid() {
        let check = assess_expiry(&cert_expiring_at(now() + Duration::days(30)), now());
        assert!(check.valid);
        assert_eq!(check.days_left, Some(30));
        assert_eq!(check.expires.as_deref(), Some("2026-03-31T12:00:00+00:00"));
        assert_eq!(check.issuer.as_deref(), Some("C=US, O=Let's Encrypt, CN=R11"));
        assert_eq!(check.error, None);
    }

    #[test]
    fn test_past_expiry_is_invalid() {
        let check = assess_expiry(&cert_expiring_at(now() - Duration::hours(1)), now());
        assert!(!check.valid);
        assert_eq!(check.days_left, Some(-1));
    }

    #[test]
    fn test_expiry_at_now_is_invalid() {
        let check = assess_expiry(&cert_expiring_at(now()), now());
        assert!(!check.valid);
        assert_eq!(check.days_left, Some(0));
    }

    #[test]
    fn test_garbage_der_is_certificate_error() {
        let err = parse_certificate(b"definitely not a certificate").unwrap_err();
        assert!(matches!(err, ProbeError::Certificate(_)));
    }
}
