use anyhow::Context;
use chrono::Utc;
use creatopick_core::{next_item_id, BookmarkItem};
use creatopick_crawler::Crawler;
use creatopick_store::{Collection, Paths};

pub fn run(
    url: &str,
    title: Option<String>,
    memo: Option<String>,
    tags: Vec<String>,
) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    paths.ensure_layout()?;

    let crawler = Crawler::default();
    let rt = super::runtime()?;
    let data = rt
        .block_on(crawler.crawl(url))
        .with_context(|| format!("crawl failed for {url}"))?;

    let now = Utc::now();
    let item = BookmarkItem {
        id: next_item_id(now),
        title: title.unwrap_or(data.title),
        source: data.site_name.or_else(|| Some("Web".to_string())),
        image_url: data.images.first().cloned().unwrap_or_default(),
        created_at: now,
        tags,
        description: data.description,
        url: Some(data.url),
        memo,
    };

    let bookmarks: Collection<BookmarkItem> = Collection::new(paths.bookmarks_file());
    let count = bookmarks.append(item.clone())?;

    println!("Bookmarked \"{}\" ({count} total)", item.title);

    Ok(())
}
