//! Core record types and configuration for the CreatoPick reference collector

mod config;
mod search;
mod site;
mod types;

pub use config::{CrawlerConfig, SuggestConfig};
pub use search::SearchPlatform;
pub use site::SiteKind;
pub use types::{
    next_item_id, BookmarkItem, Conversation, CrawledData, EnhancedLibraryItem, ImageData,
    LibraryItem, RolePreset, SearchHistoryItem,
};
