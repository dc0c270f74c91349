//! Configuration for the crawler and the suggestion client

/// Mobile Safari user agent; third-party pages serve lighter, more regular
/// markup to phones and block fewer requests.
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";

/// Crawler limits and filters
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// User agent sent on every page fetch
    pub user_agent: String,

    /// Cap on extracted images per page (bounds download cost)
    pub max_images: usize,

    /// URL fragments identifying placeholder/common assets to drop
    pub excluded_fragments: Vec<String>,
}

impl CrawlerConfig {
    pub fn new() -> Self {
        Self {
            user_agent: MOBILE_USER_AGENT.to_string(),
            max_images: 3,
            excluded_fragments: vec![
                "/favicon".to_string(),
                "/static/".to_string(),
                "/sprite".to_string(),
                "pinimg.com/images/".to_string(),
                "1x1.png".to_string(),
                "blank.gif".to_string(),
            ],
        }
    }

    pub fn is_excluded(&self, url: &str) -> bool {
        self.excluded_fragments.iter().any(|f| url.contains(f))
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggestion client tuning
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Chat-completion endpoint base (path `/chat/completions` is appended)
    pub base_url: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Topic cache validity window
    pub cache_ttl_hours: i64,

    /// Minimum spacing between API requests
    pub min_request_interval_ms: u64,

    /// Cap on parsed topic suggestions
    pub max_topics: usize,

    /// Cap on parsed keyword suggestions
    pub max_keywords: usize,

    /// Completion token budget
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f64,
}

impl SuggestConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            cache_ttl_hours: 24,
            min_request_interval_ms: 1000,
            max_topics: 7,
            max_keywords: 10,
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crawler_defaults() {
        let config = CrawlerConfig::new();
        assert_eq!(config.max_images, 3);
        assert!(config.user_agent.contains("iPhone"));
    }

    #[test]
    fn test_excluded_fragments() {
        let config = CrawlerConfig::new();
        assert!(config.is_excluded("https://s.pinimg.com/images/default_share.png"));
        assert!(config.is_excluded("https://example.com/favicon.ico"));
        assert!(!config.is_excluded("https://i.pinimg.com/originals/ab/cd/ef.jpg"));
    }

    #[test]
    fn test_suggest_defaults() {
        let config = SuggestConfig::new();
        assert_eq!(config.cache_ttl_hours, 24);
        assert_eq!(config.max_topics, 7);
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.min_request_interval_ms, 1000);
    }
}
