//! Record types shared across the collector

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved reference in the library collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// A saved reference in the bookmark collection (same shape, distinct store)
pub type BookmarkItem = LibraryItem;

impl LibraryItem {
    /// Flatten an enhanced item into the grid record shape.
    ///
    /// The displayed image prefers a materialized local file and falls back
    /// to the remote URL when no download succeeded.
    pub fn from_enhanced(item: &EnhancedLibraryItem) -> Self {
        let image_url = item
            .images
            .first()
            .map(|img| img.display_source().to_string())
            .unwrap_or_default();

        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            source: Some(
                item.site_name
                    .clone()
                    .unwrap_or_else(|| "Web".to_string()),
            ),
            image_url,
            created_at: item.created_at,
            tags: item.tags.clone(),
            description: item.description.clone(),
            url: Some(item.url.clone()),
            memo: item.user_memo.clone(),
        }
    }
}

/// One image attached to an enhanced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl ImageData {
    pub fn remote(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            local_path: None,
            width: None,
            height: None,
        }
    }

    /// Local file when materialized, remote URL otherwise. Never neither.
    pub fn display_source(&self) -> &str {
        self.local_path.as_deref().unwrap_or(&self.url)
    }
}

/// One memo/chat entry attached to an enhanced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Full record produced by the add-from-URL flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedLibraryItem {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    pub images: Vec<ImageData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_memo: Option<String>,
    #[serde(default)]
    pub conversations: Vec<Conversation>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User-defined category for organizing searches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePreset {
    pub id: String,
    pub name: String,
    pub field: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One recorded search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub id: String,
    pub query: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u32>,
}

/// Ephemeral result of crawling a URL; consumed to build an enhanced item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawledData {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

/// Client-generated record identity: millisecond timestamp string
pub fn next_item_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_enhanced() -> EnhancedLibraryItem {
        let now = Utc::now();
        EnhancedLibraryItem {
            id: next_item_id(now),
            url: "https://www.pinterest.com/pin/1".to_string(),
            title: "Gamification App Design".to_string(),
            description: Some("Modern interface".to_string()),
            site_name: Some("Pinterest".to_string()),
            images: vec![ImageData::remote("https://i.pinimg.com/736x/a.jpg")],
            user_memo: Some("good hierarchy".to_string()),
            conversations: Vec::new(),
            tags: vec!["ui".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_item_roundtrip() {
        let item = sample_enhanced();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: EnhancedLibraryItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_display_source_prefers_local() {
        let mut img = ImageData::remote("https://i.pinimg.com/736x/a.jpg");
        assert_eq!(img.display_source(), "https://i.pinimg.com/736x/a.jpg");

        img.local_path = Some("/tmp/images/a.jpg".to_string());
        assert_eq!(img.display_source(), "/tmp/images/a.jpg");
    }

    #[test]
    fn test_from_enhanced_flattens_first_image() {
        let mut item = sample_enhanced();
        item.images[0].local_path = Some("/data/images/a.jpg".to_string());

        let flat = LibraryItem::from_enhanced(&item);
        assert_eq!(flat.id, item.id);
        assert_eq!(flat.image_url, "/data/images/a.jpg");
        assert_eq!(flat.source.as_deref(), Some("Pinterest"));
        assert_eq!(flat.url.as_deref(), Some(item.url.as_str()));
    }

    #[test]
    fn test_from_enhanced_defaults_source_to_web() {
        let mut item = sample_enhanced();
        item.site_name = None;
        let flat = LibraryItem::from_enhanced(&item);
        assert_eq!(flat.source.as_deref(), Some("Web"));
    }

    #[test]
    fn test_next_item_id_is_millis() {
        let now = Utc::now();
        let id = next_item_id(now);
        assert_eq!(id, now.timestamp_millis().to_string());
    }
}
