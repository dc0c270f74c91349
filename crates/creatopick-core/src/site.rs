//! URL classification for extractor dispatch

use serde::{Deserialize, Serialize};

/// Supported source-site categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Pinterest,
    Dribbble,
    Behance,
    Generic,
}

impl SiteKind {
    /// Classify a URL by host substring. Unmatched input is `Generic`,
    /// never an error.
    pub fn detect(url: &str) -> Self {
        if url.contains("pinterest.com") {
            SiteKind::Pinterest
        } else if url.contains("dribbble.com") {
            SiteKind::Dribbble
        } else if url.contains("behance.net") {
            SiteKind::Behance
        } else {
            SiteKind::Generic
        }
    }

    pub fn display_name(&self) -> Option<&'static str> {
        match self {
            SiteKind::Pinterest => Some("Pinterest"),
            SiteKind::Dribbble => Some("Dribbble"),
            SiteKind::Behance => Some("Behance"),
            SiteKind::Generic => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_sites() {
        assert_eq!(
            SiteKind::detect("https://www.pinterest.com/pin/841891724128763931/"),
            SiteKind::Pinterest
        );
        assert_eq!(
            SiteKind::detect("https://dribbble.com/shots/24000000-landing"),
            SiteKind::Dribbble
        );
        assert_eq!(
            SiteKind::detect("https://www.behance.net/gallery/12345/identity"),
            SiteKind::Behance
        );
    }

    #[test]
    fn test_detect_falls_back_to_generic() {
        assert_eq!(
            SiteKind::detect("https://example.com/article"),
            SiteKind::Generic
        );
        assert_eq!(SiteKind::detect("not even a url"), SiteKind::Generic);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SiteKind::Pinterest.display_name(), Some("Pinterest"));
        assert_eq!(SiteKind::Generic.display_name(), None);
    }
}
