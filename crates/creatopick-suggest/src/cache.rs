//! Topic cache: one JSON file per (field, role) key with a TTL window

use chrono::{DateTime, Duration, Utc};
use creatopick_store::{atomic_write, read_json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    topics: Vec<String>,
    cached_at: DateTime<Utc>,
}

pub struct TopicCache {
    dir: PathBuf,
    ttl: Duration,
}

impl TopicCache {
    pub fn new(dir: PathBuf, ttl_hours: i64) -> Self {
        Self {
            dir,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Filesystem-safe cache key for a field/role pair
    pub fn cache_key(field: &str, role: &str) -> String {
        let sanitize = |s: &str| {
            s.to_lowercase()
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
                .collect::<String>()
        };
        format!("{}_{}", sanitize(field), sanitize(role))
    }

    fn entry_path(&self, field: &str, role: &str) -> PathBuf {
        self.dir.join(format!("{}.json", Self::cache_key(field, role)))
    }

    /// Valid cached topics, or nothing. Expired entries are removed on read.
    pub fn get(&self, field: &str, role: &str, now: DateTime<Utc>) -> Option<Vec<String>> {
        let path = self.entry_path(field, role);
        let entry: CacheEntry = match read_json(&path) {
            Ok(Some(entry)) => entry,
            Ok(None) => return None,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unreadable cache entry");
                return None;
            }
        };

        if now - entry.cached_at < self.ttl {
            Some(entry.topics)
        } else {
            debug!(path = %path.display(), "cache entry expired");
            let _ = std::fs::remove_file(&path);
            None
        }
    }

    /// Best-effort write; a failed cache write only costs a future API call
    pub fn put(&self, field: &str, role: &str, topics: &[String], now: DateTime<Utc>) {
        let entry = CacheEntry {
            topics: topics.to_vec(),
            cached_at: now,
        };
        let path = self.entry_path(field, role);
        let json = match serde_json::to_string_pretty(&entry) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize cache entry");
                return;
            }
        };
        if let Err(e) = atomic_write(&path, json.as_bytes()) {
            warn!(path = %path.display(), error = %e, "failed to write cache entry");
        }
    }

    /// Remove one entry regardless of age
    pub fn invalidate(&self, field: &str, role: &str) {
        let _ = std::fs::remove_file(self.entry_path(field, role));
    }

    /// Remove every entry; returns the number of files deleted
    pub fn clear(&self) -> usize {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return 0;
        };
        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && std::fs::remove_file(&path).is_ok()
            {
                removed += 1;
            }
        }
        removed
    }
}
