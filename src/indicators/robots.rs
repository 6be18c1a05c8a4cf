//! robots.txt and sitemap.xml presence at the site origin.

use log::debug;
use url::Url;

use super::probe::{probe_get, ProbeResponse};
use crate::models::RobotsSitemap;
use crate::utils::origin;

const ROBOTS_PATH: &str = "/robots.txt";
const SITEMAP_PATH: &str = "/sitemap.xml";

/// A robots.txt counts only when it is served with 200 and has a user-agent line.
pub fn robots_present(response: &ProbeResponse) -> bool {
    response.status == 200 && response.body.to_lowercase().contains("user-agent")
}

/// A sitemap counts only when it is served with 200 and has a sitemap root element.
pub fn sitemap_present(response: &ProbeResponse) -> bool {
    response.status == 200
        && (response.body.contains("<urlset") || response.body.contains("<sitemapindex"))
}

async fn check(client: &reqwest::Client, url: &str, accept: fn(&ProbeResponse) -> bool) -> bool {
    match probe_get(client, url).await {
        Ok(response) => accept(&response),
        Err(e) => {
            debug!("{e}");
            false
        }
    }
}

/// Requests `/robots.txt` and `/sitemap.xml` on the page's origin concurrently.
pub async fn check_robots_and_sitemap(client: &reqwest::Client, page_url: &Url) -> RobotsSitemap {
    let root = origin(page_url);
    let robots_url = format!("{root}{ROBOTS_PATH}");
    let sitemap_url = format!("{root}{SITEMAP_PATH}");

    let (robots, sitemap) = tokio::join!(
        check(client, &robots_url, robots_present),
        check(client, &sitemap_url, sitemap_present)
    );
    RobotsSitemap { robots, sitemap }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ProbeResponse {
        ProbeResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_robots_requires_ok_and_user_agent() {
        assert!(robots_present(&response(200, "User-Agent: *\nDisallow:")));
        assert!(!robots_present(&response(200, "<html>Not found</html>")));
        assert!(!robots_present(&response(404, "User-agent: *")));
    }

    #[test]
    fn test_sitemap_requires_root_element() {
        assert!(sitemap_present(&response(
            200,
            r#"<?xml version="1.0"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"></urlset>"#
        )));
        assert!(sitemap_present(&response(200, "<sitemapindex></sitemapindex>")));
        assert!(!sitemap_present(&response(200, "<html></html>")));
        assert!(!sitemap_present(&response(500, "<urlset></urlset>")));
    }

    #[tokio::test]
    async fn test_unreachable_origin_is_absent() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = reqwest::Client::new();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/deep/page")).unwrap();
        assert_eq!(
            check_robots_and_sitemap(&client, &url).await,
            RobotsSitemap::default()
        );
    }
}
