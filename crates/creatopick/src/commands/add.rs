use anyhow::Context;
use chrono::Utc;
use creatopick_core::{next_item_id, EnhancedLibraryItem, ImageData, LibraryItem};
use creatopick_crawler::Crawler;
use creatopick_media::ImageStore;
use creatopick_store::{Collection, Paths};

pub fn run(
    url: &str,
    memo: Option<String>,
    tags: Vec<String>,
    skip_download: bool,
) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    paths.ensure_layout()?;

    let crawler = Crawler::default();
    let rt = super::runtime()?;
    let data = rt
        .block_on(crawler.crawl(url))
        .with_context(|| format!("crawl failed for {url}"))?;

    let images: Vec<ImageData> = if skip_download {
        data.images
            .iter()
            .map(|u| ImageData::remote(u.clone()))
            .collect()
    } else {
        let store = ImageStore::new(paths.images_dir());
        rt.block_on(store.materialize(&data.images))
            .into_iter()
            .map(|result| ImageData {
                local_path: result
                    .local_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned()),
                url: result.url,
                width: None,
                height: None,
            })
            .collect()
    };
    let downloaded = images.iter().filter(|img| img.local_path.is_some()).count();

    let now = Utc::now();
    let item = EnhancedLibraryItem {
        id: next_item_id(now),
        url: data.url,
        title: data.title,
        description: data.description,
        site_name: data.site_name,
        images,
        user_memo: memo,
        conversations: Vec::new(),
        tags,
        created_at: now,
        updated_at: now,
    };

    let enhanced: Collection<EnhancedLibraryItem> = Collection::new(paths.enhanced_file());
    enhanced.append(item.clone())?;

    let library: Collection<LibraryItem> = Collection::new(paths.library_file());
    let count = library.append(LibraryItem::from_enhanced(&item))?;

    println!(
        "Saved \"{}\" ({} images, {} downloaded)",
        item.title,
        item.images.len(),
        downloaded
    );
    println!("Library now holds {count} items");

    Ok(())
}
