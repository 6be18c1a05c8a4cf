// Utils module tests.

use super::*;

#[test]
fn test_round_to_three_decimals() {
    assert_eq!(round_to(0.123_456, 3), 0.123);
    assert_eq!(round_to(0.6666, 3), 0.667);
    assert_eq!(round_to(f64::NAN, 3), 0.0);
}

#[test]
fn test_clamp_unit() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
    assert_eq!(clamp_unit(f64::NAN), 0.0);
    assert_eq!(clamp_unit(f64::INFINITY), 1.0);
}

#[test]
fn test_netloc_omits_default_port() {
    let url = Url::parse("https://example.com:443/a").unwrap();
    assert_eq!(netloc(&url), "example.com");
    let url = Url::parse("http://127.0.0.1:8080/").unwrap();
    assert_eq!(netloc(&url), "127.0.0.1:8080");
}

#[test]
fn test_origin() {
    let url = Url::parse("http://127.0.0.1:8080/deep/page?q=1").unwrap();
    assert_eq!(origin(&url), "http://127.0.0.1:8080");
}
