use creatopick_core::{EnhancedLibraryItem, LibraryItem, RolePreset, SearchHistoryItem};
use creatopick_store::{Collection, Paths};

pub fn run() -> anyhow::Result<()> {
    let paths = Paths::new()?;

    let library: Collection<LibraryItem> = Collection::new(paths.library_file());
    let bookmarks: Collection<LibraryItem> = Collection::new(paths.bookmarks_file());
    let enhanced: Collection<EnhancedLibraryItem> = Collection::new(paths.enhanced_file());
    let history: Collection<SearchHistoryItem> = Collection::new(paths.history_file());
    let presets: Collection<RolePreset> = Collection::new(paths.presets_file());

    let output = serde_json::json!({
        "data_dir": paths.data_dir.display().to_string(),
        "library": library.count()?,
        "bookmarks": bookmarks.count()?,
        "enhanced": enhanced.count()?,
        "history": history.count()?,
        "presets": presets.count()?,
    });

    println!("{output}");
    Ok(())
}
