//! Font families declared in the page's stylesheets.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use futures::future::join_all;
use log::debug;
use regex::Regex;

use super::probe::probe_get;
use crate::utils::compile_regex_unsafe;

static FONT_FAMILY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)font-family\s*:\s*([^;}{]+);", "FONT_FAMILY_PATTERN")
});

/// Collects the distinct families named in `font-family` declarations, sorted.
///
/// Quotes and surrounding whitespace are stripped from each family name.
pub fn extract_font_families(css: &str) -> Vec<String> {
    let families: BTreeSet<String> = FONT_FAMILY_PATTERN
        .captures_iter(css)
        .filter_map(|caps| caps.get(1))
        .flat_map(|list| list.as_str().split(','))
        .map(|family| family.trim().trim_matches(|c: char| c == '"' || c == '\''))
        .filter(|family| !family.is_empty())
        .map(String::from)
        .collect();
    families.into_iter().collect()
}

/// Downloads up to `limit` stylesheets and joins the text of those served with 200.
pub async fn fetch_stylesheets(client: &reqwest::Client, urls: &[String], limit: usize) -> String {
    let fetches = urls.iter().take(limit).map(|url| async move {
        match probe_get(client, url).await {
            Ok(response) if response.status == 200 => Some(response.body),
            Ok(response) => {
                debug!("Stylesheet {url} returned HTTP {}", response.status);
                None
            }
            Err(e) => {
                debug!("{e}");
                None
            }
        }
    });
    join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetches the stylesheets and returns the font families they declare.
pub async fn harvest_font_families(
    client: &reqwest::Client,
    urls: &[String],
    limit: usize,
) -> Vec<String> {
    if urls.is_empty() {
        return Vec::new();
    }
    extract_font_families(&fetch_stylesheets(client, urls, limit).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_font_families() {
        let css = r#"
            body { font-family: "Open Sans", Arial, sans-serif; }
            h1 { FONT-FAMILY : 'Playfair Display' , serif ; }
            code { font-family: monospace }
            p { font-family: Arial; }
        "#;
        assert_eq!(
            extract_font_families(css),
            vec!["Arial", "Open Sans", "Playfair Display", "sans-serif", "serif"]
        );
    }

    #[test]
    fn test_extract_font_families_empty() {
        assert!(extract_font_families("").is_empty());
        assert!(extract_font_families("body { color: red; }").is_empty());
        assert!(extract_font_families("a { font-family: ; }").is_empty());
    }

    #[tokio::test]
    async fn test_no_stylesheets_skips_requests() {
        let client = reqwest::Client::new();
        assert!(harvest_font_families(&client, &[], 10).await.is_empty());
    }
}
