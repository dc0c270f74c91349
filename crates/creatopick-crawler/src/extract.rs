//! Pure extraction passes over raw HTML.
//!
//! Each site gets an ordered list of regex rules tried in priority order;
//! candidates are merged first-seen-wins, filtered against the placeholder
//! exclusion list, and capped. The markup these rules target is undocumented
//! third-party structure; when a site changes its HTML the rules degrade to
//! fewer or zero matches rather than failing loudly.

use creatopick_core::{CrawlerConfig, SiteKind};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Output of one extraction pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub title: Option<String>,
    pub description: Option<String>,
    pub images: Vec<String>,
}

static TITLE_RE: OnceLock<Regex> = OnceLock::new();
static META_DESC_RE: OnceLock<Regex> = OnceLock::new();
static OG_TITLE_RE: OnceLock<Regex> = OnceLock::new();
static OG_DESC_RE: OnceLock<Regex> = OnceLock::new();
static OG_IMAGE_RE: OnceLock<Regex> = OnceLock::new();
static IMG_SRC_RE: OnceLock<Regex> = OnceLock::new();

static PIN_CLOSEUP_RE: OnceLock<Regex> = OnceLock::new();
static PIN_STORY_RE: OnceLock<Regex> = OnceLock::new();
static PIN_ORIGINALS_RE: OnceLock<Regex> = OnceLock::new();
static PIN_736_RE: OnceLock<Regex> = OnceLock::new();
static PIN_564_RE: OnceLock<Regex> = OnceLock::new();

static DRIBBBLE_CDN_RE: OnceLock<Regex> = OnceLock::new();
static BEHANCE_CDN_RE: OnceLock<Regex> = OnceLock::new();

fn title_re() -> &'static Regex {
    TITLE_RE.get_or_init(|| Regex::new(r"(?i)<title>([^<]*)</title>").unwrap())
}

fn og_image_re() -> &'static Regex {
    OG_IMAGE_RE
        .get_or_init(|| Regex::new(r#"(?i)<meta property="og:image" content="([^"]*)""#).unwrap())
}

fn og_title_re() -> &'static Regex {
    OG_TITLE_RE
        .get_or_init(|| Regex::new(r#"(?i)<meta property="og:title" content="([^"]*)""#).unwrap())
}

fn og_desc_re() -> &'static Regex {
    OG_DESC_RE.get_or_init(|| {
        Regex::new(r#"(?i)<meta property="og:description" content="([^"]*)""#).unwrap()
    })
}

fn meta_desc_re() -> &'static Regex {
    META_DESC_RE
        .get_or_init(|| Regex::new(r#"(?i)<meta name="description" content="([^"]*)""#).unwrap())
}

/// Ordered candidate accumulator: first-seen dedup, exclusion filter, cap
struct Candidates<'a> {
    config: &'a CrawlerConfig,
    seen: HashSet<String>,
    images: Vec<String>,
}

impl<'a> Candidates<'a> {
    fn new(config: &'a CrawlerConfig) -> Self {
        Self {
            config,
            seen: HashSet::new(),
            images: Vec::new(),
        }
    }

    fn push(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() || self.config.is_excluded(url) {
            return;
        }
        if self.seen.insert(url.to_string()) {
            self.images.push(url.to_string());
        }
    }

    fn push_capture(&mut self, re: &Regex, html: &str) {
        if let Some(cap) = re.captures(html) {
            self.push(&cap[1]);
        }
    }

    fn push_all_matches(&mut self, re: &Regex, html: &str) {
        for m in re.find_iter(html) {
            self.push(m.as_str());
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.images.truncate(self.config.max_images);
        self.images
    }
}

fn first_capture(re: &Regex, html: &str) -> Option<String> {
    re.captures(html).map(|cap| cap[1].trim().to_string()).filter(|s| !s.is_empty())
}

/// Dispatch to the matching site parser
pub fn extract(kind: SiteKind, html: &str, config: &CrawlerConfig) -> Extraction {
    match kind {
        SiteKind::Pinterest => extract_pinterest(html, config),
        SiteKind::Dribbble => extract_dribbble(html, config),
        SiteKind::Behance => extract_behance(html, config),
        SiteKind::Generic => extract_generic(html, config),
    }
}

/// Pinterest rules, highest fidelity first: the closeup pin image, story pin
/// image, og:image, then CDN scans by quality tier (originals, 736x, 564x).
pub fn extract_pinterest(html: &str, config: &CrawlerConfig) -> Extraction {
    let closeup_re = PIN_CLOSEUP_RE
        .get_or_init(|| Regex::new(r#"elementtiming="closeupImage"[^>]*src="([^"]*)""#).unwrap());
    let story_re = PIN_STORY_RE.get_or_init(|| {
        Regex::new(r#"elementtiming="StoryPinImageBlock-MainPinImage"[^>]*src="([^"]*)""#).unwrap()
    });
    let originals_re = PIN_ORIGINALS_RE
        .get_or_init(|| Regex::new(r#"https://i\.pinimg\.com/originals/[^"'\s]*"#).unwrap());
    let large_re = PIN_736_RE
        .get_or_init(|| Regex::new(r#"https://i\.pinimg\.com/736x/[^"'\s]*"#).unwrap());
    let medium_re = PIN_564_RE
        .get_or_init(|| Regex::new(r#"https://i\.pinimg\.com/564x/[^"'\s]*"#).unwrap());

    let mut candidates = Candidates::new(config);
    candidates.push_capture(closeup_re, html);
    candidates.push_capture(story_re, html);
    candidates.push_capture(og_image_re(), html);
    candidates.push_all_matches(originals_re, html);
    candidates.push_all_matches(large_re, html);
    candidates.push_all_matches(medium_re, html);

    Extraction {
        title: first_capture(og_title_re(), html).or_else(|| first_capture(title_re(), html)),
        description: first_capture(og_desc_re(), html)
            .or_else(|| first_capture(meta_desc_re(), html)),
        images: candidates.finish(),
    }
}

/// Dribbble rules: og:image, then shot CDN scan
pub fn extract_dribbble(html: &str, config: &CrawlerConfig) -> Extraction {
    let cdn_re = DRIBBBLE_CDN_RE.get_or_init(|| {
        Regex::new(r#"https://cdn\.dribbble\.com/(?:userupload|users)/[^"'\s]*"#).unwrap()
    });

    let mut candidates = Candidates::new(config);
    candidates.push_capture(og_image_re(), html);
    candidates.push_all_matches(cdn_re, html);

    Extraction {
        title: first_capture(og_title_re(), html).or_else(|| first_capture(title_re(), html)),
        description: first_capture(og_desc_re(), html)
            .or_else(|| first_capture(meta_desc_re(), html)),
        images: candidates.finish(),
    }
}

/// Behance rules: og:image, then project CDN scan
pub fn extract_behance(html: &str, config: &CrawlerConfig) -> Extraction {
    let cdn_re = BEHANCE_CDN_RE.get_or_init(|| {
        Regex::new(r#"https://mir-s3-cdn-cf\.behance\.net/(?:projects|project_modules)/[^"'\s]*"#)
            .unwrap()
    });

    let mut candidates = Candidates::new(config);
    candidates.push_capture(og_image_re(), html);
    candidates.push_all_matches(cdn_re, html);

    Extraction {
        title: first_capture(og_title_re(), html).or_else(|| first_capture(title_re(), html)),
        description: first_capture(og_desc_re(), html)
            .or_else(|| first_capture(meta_desc_re(), html)),
        images: candidates.finish(),
    }
}

/// Generic rules: og:image then every `<img src>` on the page
pub fn extract_generic(html: &str, config: &CrawlerConfig) -> Extraction {
    let img_re = IMG_SRC_RE.get_or_init(|| Regex::new(r#"(?i)<img[^>]+src="([^">]+)""#).unwrap());

    let mut candidates = Candidates::new(config);
    candidates.push_capture(og_image_re(), html);
    for cap in img_re.captures_iter(html) {
        candidates.push(&cap[1]);
    }

    Extraction {
        title: first_capture(title_re(), html),
        description: first_capture(meta_desc_re(), html),
        images: candidates.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PINTEREST_FIXTURE: &str = r#"
        <html><head>
        <title>Fallback Title - Pinterest</title>
        <meta property="og:title" content="Gamification App Design" />
        <meta property="og:description" content="Playful progress screens" />
        <meta property="og:image" content="https://i.pinimg.com/736x/81/03/a1/pin.jpg" />
        </head><body>
        <img elementtiming="closeupImage" src="https://i.pinimg.com/originals/81/03/a1/main.jpg" />
        <script>"https://i.pinimg.com/originals/81/03/a1/main.jpg" "https://i.pinimg.com/originals/7e/4c/fd/second.jpg"</script>
        <img src="https://s.pinimg.com/images/default_share.png" />
        "https://i.pinimg.com/736x/85/12/d2/third.jpg"
        "https://i.pinimg.com/564x/99/aa/bb/fourth.jpg"
        </body></html>
    "#;

    #[test]
    fn test_pinterest_priority_order_and_cap() {
        let config = CrawlerConfig::new();
        let result = extract_pinterest(PINTEREST_FIXTURE, &config);

        assert_eq!(result.images.len(), 3);
        // Closeup image wins the first slot even though og:image appears
        // earlier in the document
        assert_eq!(
            result.images[0],
            "https://i.pinimg.com/originals/81/03/a1/main.jpg"
        );
        assert_eq!(
            result.images[1],
            "https://i.pinimg.com/736x/81/03/a1/pin.jpg"
        );
        // Duplicate of the closeup URL in the originals scan was dropped
        assert_eq!(
            result.images[2],
            "https://i.pinimg.com/originals/7e/4c/fd/second.jpg"
        );
    }

    #[test]
    fn test_pinterest_excludes_placeholder_assets() {
        let config = CrawlerConfig::new();
        let result = extract_pinterest(PINTEREST_FIXTURE, &config);
        assert!(result
            .images
            .iter()
            .all(|url| !url.contains("pinimg.com/images/")));
    }

    #[test]
    fn test_pinterest_metadata() {
        let config = CrawlerConfig::new();
        let result = extract_pinterest(PINTEREST_FIXTURE, &config);
        assert_eq!(result.title.as_deref(), Some("Gamification App Design"));
        assert_eq!(
            result.description.as_deref(),
            Some("Playful progress screens")
        );
    }

    #[test]
    fn test_pinterest_no_matches_is_empty() {
        let config = CrawlerConfig::new();
        let result = extract_pinterest("<html><body>nothing here</body></html>", &config);
        assert!(result.images.is_empty());
        assert!(result.title.is_none());
    }

    #[test]
    fn test_dribbble_og_then_cdn() {
        let config = CrawlerConfig::new();
        let html = r#"
            <meta property="og:image" content="https://cdn.dribbble.com/userupload/123/original.png" />
            "https://cdn.dribbble.com/users/99/screenshots/456/shot.png"
        "#;
        let result = extract_dribbble(html, &config);
        assert_eq!(
            result.images,
            vec![
                "https://cdn.dribbble.com/userupload/123/original.png",
                "https://cdn.dribbble.com/users/99/screenshots/456/shot.png",
            ]
        );
    }

    #[test]
    fn test_behance_cdn_scan() {
        let config = CrawlerConfig::new();
        let html = r#"
            "https://mir-s3-cdn-cf.behance.net/projects/original/abc.png"
            "https://mir-s3-cdn-cf.behance.net/project_modules/1400/def.jpg"
        "#;
        let result = extract_behance(html, &config);
        assert_eq!(result.images.len(), 2);
    }

    #[test]
    fn test_generic_title_and_img_scan() {
        let config = CrawlerConfig::new();
        let html = r#"
            <html><head><title>An Article</title>
            <meta name="description" content="Some words" /></head>
            <body>
            <img src="https://example.com/a.jpg" />
            <img src="https://example.com/a.jpg" />
            <img src="https://example.com/favicon.ico" />
            <img src="https://example.com/b.jpg" />
            </body></html>
        "#;
        let result = extract_generic(html, &config);
        assert_eq!(result.title.as_deref(), Some("An Article"));
        assert_eq!(result.description.as_deref(), Some("Some words"));
        assert_eq!(
            result.images,
            vec!["https://example.com/a.jpg", "https://example.com/b.jpg"]
        );
    }

    #[test]
    fn test_dispatch_by_kind() {
        let config = CrawlerConfig::new();
        let result = extract(SiteKind::Pinterest, PINTEREST_FIXTURE, &config);
        assert_eq!(result, extract_pinterest(PINTEREST_FIXTURE, &config));
    }
}
