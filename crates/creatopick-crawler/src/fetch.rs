//! Page fetching and the crawl entry point

use crate::extract;
use creatopick_core::{CrawledData, CrawlerConfig, SiteKind};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("page fetch returned HTTP {code}")]
    Status { code: u16 },

    #[error("no images found at {url}")]
    NoImages { url: String },
}

/// Fetches pages with a mobile user agent and runs the matching extractor.
/// One request per crawl; no retry.
pub struct Crawler {
    client: reqwest::Client,
    config: CrawlerConfig,
}

impl Crawler {
    pub fn new(config: CrawlerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub async fn fetch_html(&self, url: &str) -> Result<String, CrawlError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                code: status.as_u16(),
            });
        }

        // Consumed as raw text; never validated as HTML
        Ok(response.text().await?)
    }

    /// Classify the URL, fetch the page, extract
    pub async fn crawl(&self, url: &str) -> Result<CrawledData, CrawlError> {
        let kind = SiteKind::detect(url);
        debug!(%url, ?kind, "crawling");

        let html = self.fetch_html(url).await?;
        self.crawl_html(url, &html)
    }

    /// Extraction half of [`crawl`](Self::crawl), split out so fixtures can
    /// exercise it without a network
    pub fn crawl_html(&self, url: &str, html: &str) -> Result<CrawledData, CrawlError> {
        let kind = SiteKind::detect(url);
        let extraction = extract::extract(kind, html, &self.config);

        if extraction.images.is_empty() {
            return Err(CrawlError::NoImages {
                url: url.to_string(),
            });
        }

        let title = extraction.title.unwrap_or_else(|| match kind.display_name() {
            Some(name) => format!("{name} Image"),
            None => "Untitled".to_string(),
        });

        info!(%url, images = extraction.images.len(), "crawl complete");

        Ok(CrawledData {
            url: url.to_string(),
            title,
            description: extraction.description,
            images: extraction.images,
            site_name: kind.display_name().map(String::from),
        })
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new(CrawlerConfig::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawl_html_builds_crawled_data() {
        let crawler = Crawler::default();
        let html = r#"
            <meta property="og:title" content="Landing Shot" />
            <meta property="og:image" content="https://cdn.dribbble.com/userupload/1/shot.png" />
        "#;

        let data = crawler
            .crawl_html("https://dribbble.com/shots/1-landing", html)
            .unwrap();
        assert_eq!(data.title, "Landing Shot");
        assert_eq!(data.site_name.as_deref(), Some("Dribbble"));
        assert_eq!(
            data.images,
            vec!["https://cdn.dribbble.com/userupload/1/shot.png"]
        );
    }

    #[test]
    fn test_crawl_html_zero_images_is_error() {
        let crawler = Crawler::default();
        let err = crawler
            .crawl_html("https://www.pinterest.com/pin/1/", "<html></html>")
            .unwrap_err();
        assert!(matches!(err, CrawlError::NoImages { .. }));
    }

    #[test]
    fn test_crawl_html_title_fallbacks() {
        let crawler = Crawler::default();

        let pin = crawler
            .crawl_html(
                "https://www.pinterest.com/pin/1/",
                r#""https://i.pinimg.com/originals/a/b.jpg""#,
            )
            .unwrap();
        assert_eq!(pin.title, "Pinterest Image");

        let generic = crawler
            .crawl_html(
                "https://example.com/post",
                r#"<img src="https://example.com/a.jpg">"#,
            )
            .unwrap();
        assert_eq!(generic.title, "Untitled");
    }
}
