//! The suggestion client: cache check, throttle, one completion call,
//! fallback on any failure

use crate::cache::TopicCache;
use crate::clock::{Clock, SystemClock};
use crate::parse::parse_list;
use crate::prompts;
use chrono::{DateTime, Duration, Utc};
use creatopick_core::SuggestConfig;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Internal failure taxonomy; callers of the public methods never see these
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("no API key configured")]
    MissingKey,

    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned HTTP {code}")]
    Status { code: u16 },

    #[error("completion response carried no content")]
    EmptyResponse,
}

/// Where a suggestion list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Cache,
    Api,
    Fallback,
}

/// A suggestion list plus its provenance. Fallback use is observable here
/// rather than being indistinguishable from a real response.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    pub items: Vec<String>,
    pub source: SuggestionSource,
}

impl Suggestions {
    fn fallback(items: Vec<String>) -> Self {
        Self {
            items,
            source: SuggestionSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == SuggestionSource::Fallback
    }
}

pub struct SuggestClient {
    config: SuggestConfig,
    api_key: Option<String>,
    cache: TopicCache,
    http: reqwest::Client,
    clock: Box<dyn Clock>,
    last_request: Option<DateTime<Utc>>,
}

impl SuggestClient {
    pub fn new(config: SuggestConfig, api_key: Option<String>, cache_dir: PathBuf) -> Self {
        Self::with_clock(config, api_key, cache_dir, Box::new(SystemClock))
    }

    pub fn with_clock(
        config: SuggestConfig,
        api_key: Option<String>,
        cache_dir: PathBuf,
        clock: Box<dyn Clock>,
    ) -> Self {
        let cache = TopicCache::new(cache_dir, config.cache_ttl_hours);
        Self {
            config,
            api_key,
            cache,
            http: reqwest::Client::new(),
            clock,
            last_request: None,
        }
    }

    pub fn cache(&self) -> &TopicCache {
        &self.cache
    }

    /// Work-topic suggestions for a field/role pair, cached for the TTL
    /// window. Never fails: degraded results come back tagged `Fallback`.
    pub async fn topics(&mut self, field: &str, role: &str) -> Suggestions {
        if let Some(items) = self.cache.get(field, role, self.clock.now()) {
            debug!(field, role, "using cached topics");
            return Suggestions {
                items,
                source: SuggestionSource::Cache,
            };
        }

        let user = prompts::topic_user_prompt(field, role);
        match self
            .complete(Some(prompts::TOPIC_SYSTEM_PROMPT), &user)
            .await
        {
            Ok(content) => {
                let items = parse_list(&content, self.config.max_topics);
                if items.is_empty() {
                    warn!(field, role, "completion parsed to nothing; using fallback topics");
                    return Suggestions::fallback(prompts::fallback_topics());
                }
                self.cache.put(field, role, &items, self.clock.now());
                Suggestions {
                    items,
                    source: SuggestionSource::Api,
                }
            }
            Err(e) => {
                warn!(field, role, error = %e, "topic generation failed; using fallback");
                Suggestions::fallback(prompts::fallback_topics())
            }
        }
    }

    /// Search-keyword suggestions, optionally focused on a topic. Not
    /// cached; same never-fails policy.
    pub async fn keywords(&mut self, field: &str, role: &str, topic: Option<&str>) -> Suggestions {
        let user = prompts::keyword_prompt(field, role, topic);
        match self.complete(None, &user).await {
            Ok(content) => {
                let items = parse_list(&content, self.config.max_keywords);
                if items.is_empty() {
                    warn!(field, role, "completion parsed to nothing; using fallback keywords");
                    return Suggestions::fallback(prompts::fallback_keywords());
                }
                Suggestions {
                    items,
                    source: SuggestionSource::Api,
                }
            }
            Err(e) => {
                warn!(field, role, error = %e, "keyword generation failed; using fallback");
                Suggestions::fallback(prompts::fallback_keywords())
            }
        }
    }

    /// Enforce the minimum spacing between API requests
    async fn throttle(&self) {
        let Some(last) = self.last_request else {
            return;
        };
        let min = Duration::milliseconds(self.config.min_request_interval_ms as i64);
        let elapsed = self.clock.now() - last;
        if elapsed < min {
            let wait = (min - elapsed).to_std().unwrap_or_default();
            debug!(?wait, "spacing completion request");
            tokio::time::sleep(wait).await;
        }
    }

    async fn complete(&mut self, system: Option<&str>, user: &str) -> Result<String, SuggestError> {
        let api_key = self.api_key.clone().ok_or(SuggestError::MissingKey)?;

        self.throttle().await;
        self.last_request = Some(self.clock.now());

        let mut messages = Vec::new();
        if let Some(system) = system {
            messages.push(serde_json::json!({"role": "system", "content": system}));
        }
        messages.push(serde_json::json!({"role": "user", "content": user}));

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&serde_json::json!({
                "model": self.config.model,
                "messages": messages,
                "max_tokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Status {
                code: status.as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();
        if content.is_empty() {
            return Err(SuggestError::EmptyResponse);
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn client_without_key(dir: &std::path::Path) -> SuggestClient {
        SuggestClient::new(SuggestConfig::new(), None, dir.to_path_buf())
    }

    #[tokio::test]
    async fn test_missing_key_degrades_to_fallback() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut client = client_without_key(temp.path());

        let topics = client.topics("design", "designer").await;
        assert_eq!(topics.source, SuggestionSource::Fallback);
        assert_eq!(topics.items, prompts::fallback_topics());

        let keywords = client.keywords("design", "designer", None).await;
        assert_eq!(keywords.source, SuggestionSource::Fallback);
        assert_eq!(keywords.items, prompts::fallback_keywords());
    }

    #[tokio::test]
    async fn test_cached_topics_short_circuit_the_api() {
        let temp = tempfile::TempDir::new().unwrap();
        let now = Utc::now();
        let mut client = SuggestClient::with_clock(
            SuggestConfig::new(),
            None, // any API attempt would fail; a hit must not reach it
            temp.path().to_path_buf(),
            Box::new(FixedClock(now)),
        );

        let cached = vec!["dashboard redesign".to_string(), "ux audit".to_string()];
        client.cache.put("design", "designer", &cached, now);

        let topics = client.topics("design", "designer").await;
        assert_eq!(topics.source, SuggestionSource::Cache);
        assert_eq!(topics.items, cached);
    }

    #[tokio::test]
    async fn test_expired_cache_falls_through() {
        let temp = tempfile::TempDir::new().unwrap();
        let now = Utc::now();
        let mut client = SuggestClient::with_clock(
            SuggestConfig::new(),
            None,
            temp.path().to_path_buf(),
            Box::new(FixedClock(now + Duration::hours(25))),
        );

        client
            .cache
            .put("design", "designer", &["stale".to_string()], now);

        // Entry is past the TTL: ignored, and with no key we land on fallback
        let topics = client.topics("design", "designer").await;
        assert_eq!(topics.source, SuggestionSource::Fallback);
    }
}
