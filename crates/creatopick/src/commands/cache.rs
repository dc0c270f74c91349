use creatopick_core::SuggestConfig;
use creatopick_media::ImageStore;
use creatopick_store::Paths;
use creatopick_suggest::TopicCache;

pub fn run_clear() -> anyhow::Result<()> {
    let paths = Paths::new()?;

    let cache = TopicCache::new(
        paths.topic_cache_dir(),
        SuggestConfig::new().cache_ttl_hours,
    );
    let topics_removed = cache.clear();

    let images = ImageStore::new(paths.images_dir());
    let images_removed = images.clear()?;

    println!("Removed {topics_removed} cached topic entries and {images_removed} downloaded images");
    Ok(())
}
