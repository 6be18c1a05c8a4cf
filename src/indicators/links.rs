//! Broken internal link detection.

use futures::future::join_all;
use log::{debug, warn};
use url::Url;

use super::probe::probe_head;
use crate::parse::Link;
use crate::utils::netloc;

/// Picks up to `limit` distinct resolved links on the page's own network location,
/// in document order.
pub fn sample_internal_links(links: &[Link], base_netloc: &str, limit: usize) -> Vec<String> {
    let mut sample: Vec<String> = Vec::new();
    for link in links {
        if sample.len() >= limit {
            break;
        }
        let Ok(url) = Url::parse(&link.resolved_url) else {
            continue;
        };
        if netloc(&url) == base_netloc && !sample.contains(&link.resolved_url) {
            sample.push(link.resolved_url.clone());
        }
    }
    sample
}

/// A link is healthy when its final status (after redirects) is 2xx or 3xx.
pub fn is_broken_status(status: u16) -> bool {
    !(200..400).contains(&status)
}

/// HEADs every URL concurrently and counts the broken ones.
///
/// Request failures count as broken. The result does not depend on completion order.
pub async fn check_broken_links(client: &reqwest::Client, urls: &[String]) -> usize {
    let checks = urls.iter().map(|url| async move {
        match probe_head(client, url).await {
            Ok(status) if is_broken_status(status) => {
                debug!("Broken link {url}: HTTP {status}");
                true
            }
            Ok(_) => false,
            Err(e) => {
                warn!("Link check failed: {e}");
                true
            }
        }
    });
    join_all(checks).await.into_iter().filter(|&broken| broken).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(resolved_url: &str) -> Link {
        Link {
            href: resolved_url.to_string(),
            resolved_url: resolved_url.to_string(),
            anchor_text: String::new(),
        }
    }

    #[test]
    fn test_sample_keeps_same_netloc_unique_in_order() {
        let links = [
            link("https://example.com/a"),
            link("https://other.org/x"),
            link("https://example.com/b"),
            link("https://example.com/a"),
            link("mailto:team@example.com"),
            link("https://sub.example.com/c"),
        ];
        assert_eq!(
            sample_internal_links(&links, "example.com", 10),
            vec![
                "https://example.com/a".to_string(),
                "https://example.com/b".to_string()
            ]
        );
    }

    #[test]
    fn test_sample_is_bounded() {
        let links: Vec<Link> = (0..25)
            .map(|i| link(&format!("https://example.com/page/{i}")))
            .collect();
        let sample = sample_internal_links(&links, "example.com", 10);
        assert_eq!(sample.len(), 10);
        assert_eq!(sample[9], "https://example.com/page/9");
    }

    #[test]
    fn test_broken_status_ranges() {
        assert!(!is_broken_status(200));
        assert!(!is_broken_status(204));
        assert!(!is_broken_status(301));
        assert!(!is_broken_status(399));
        assert!(is_broken_status(404));
        assert!(is_broken_status(500));
        assert!(is_broken_status(101));
    }

    #[tokio::test]
    async fn test_no_links_means_no_broken_links() {
        let client = reqwest::Client::new();
        assert_eq!(check_broken_links(&client, &[]).await, 0);
    }

    #[tokio::test]
    async fn test_unreachable_link_counts_as_broken() {
        // Bind then drop a listener so the port is closed
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = reqwest::Client::new();
        let urls = vec![format!("http://127.0.0.1:{port}/gone")];
        assert_eq!(check_broken_links(&client, &urls).await, 1);
    }
}
