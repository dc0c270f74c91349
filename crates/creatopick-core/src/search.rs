//! Search-engine URL construction for the external browser hand-off

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Platforms a suggested keyword can be handed off to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchPlatform {
    Google,
    Behance,
    Dribbble,
    Unsplash,
}

impl SearchPlatform {
    pub const ALL: [SearchPlatform; 4] = [
        SearchPlatform::Google,
        SearchPlatform::Behance,
        SearchPlatform::Dribbble,
        SearchPlatform::Unsplash,
    ];

    /// Build the platform search URL for a keyword (image search on Google,
    /// the site search path elsewhere).
    pub fn search_url(&self, keyword: &str) -> String {
        let encoded = utf8_percent_encode(keyword, NON_ALPHANUMERIC).to_string();
        match self {
            SearchPlatform::Google => {
                format!("https://www.google.com/search?q={encoded}&tbm=isch")
            }
            SearchPlatform::Behance => {
                format!("https://www.behance.net/search/projects?search={encoded}")
            }
            SearchPlatform::Dribbble => format!("https://dribbble.com/search/{encoded}"),
            SearchPlatform::Unsplash => format!("https://unsplash.com/s/photos/{encoded}"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchPlatform::Google => "google",
            SearchPlatform::Behance => "behance",
            SearchPlatform::Dribbble => "dribbble",
            SearchPlatform::Unsplash => "unsplash",
        }
    }
}

impl FromStr for SearchPlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(SearchPlatform::Google),
            "behance" => Ok(SearchPlatform::Behance),
            "dribbble" => Ok(SearchPlatform::Dribbble),
            "unsplash" => Ok(SearchPlatform::Unsplash),
            other => Err(format!(
                "unknown platform '{other}' (expected google, behance, dribbble, unsplash)"
            )),
        }
    }
}
