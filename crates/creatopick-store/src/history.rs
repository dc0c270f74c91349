//! Search history: newest-first, truncated

use crate::collection::{Collection, StoreError};
use chrono::{DateTime, Utc};
use creatopick_core::{next_item_id, SearchHistoryItem};
use std::path::PathBuf;

const MAX_HISTORY: usize = 50;

pub struct SearchHistory {
    collection: Collection<SearchHistoryItem>,
}

impl SearchHistory {
    pub fn new(path: PathBuf) -> Self {
        Self {
            collection: Collection::new(path),
        }
    }

    /// Prepend a search; the list is truncated to the retention cap
    pub fn record(
        &self,
        query: &str,
        result_count: Option<u32>,
        now: DateTime<Utc>,
    ) -> Result<SearchHistoryItem, StoreError> {
        let item = SearchHistoryItem {
            id: next_item_id(now),
            query: query.to_string(),
            timestamp: now,
            result_count,
        };

        let mut items = self.collection.load()?;
        items.insert(0, item.clone());
        items.truncate(MAX_HISTORY);
        self.collection.save(&items)?;
        Ok(item)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<SearchHistoryItem>, StoreError> {
        let mut items = self.collection.load()?;
        items.truncate(limit);
        Ok(items)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.collection.save(&[])
    }
}
