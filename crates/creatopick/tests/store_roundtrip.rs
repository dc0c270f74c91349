use chrono::Utc;
use creatopick_core::{
    next_item_id, BookmarkItem, EnhancedLibraryItem, ImageData, LibraryItem, RolePreset,
};
use creatopick_store::{Collection, Paths, SearchHistory};

fn sample_item(title: &str) -> LibraryItem {
    let now = Utc::now();
    LibraryItem {
        id: next_item_id(now),
        title: title.to_string(),
        source: Some("Pinterest".to_string()),
        image_url: "https://i.pinimg.com/736x/a.jpg".to_string(),
        created_at: now,
        tags: vec!["ui".to_string(), "mobile".to_string()],
        description: Some("desc".to_string()),
        url: Some("https://www.pinterest.com/pin/1/".to_string()),
        memo: Some("check the nav pattern".to_string()),
    }
}

#[test]
fn test_library_roundtrip_is_structurally_equal() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = Paths::from_dir(temp.path().to_path_buf());

    let library: Collection<LibraryItem> = Collection::new(paths.library_file());
    let items = vec![sample_item("First"), sample_item("Second")];
    library.save(&items).unwrap();

    let reload: Collection<LibraryItem> = Collection::new(paths.library_file());
    assert_eq!(reload.load().unwrap(), items);
}

#[test]
fn test_bookmark_and_library_collections_are_distinct() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = Paths::from_dir(temp.path().to_path_buf());

    let bookmarks: Collection<BookmarkItem> = Collection::new(paths.bookmarks_file());
    bookmarks.append(sample_item("Bookmarked")).unwrap();

    let library: Collection<LibraryItem> = Collection::new(paths.library_file());
    assert!(library.load().unwrap().is_empty());
    assert_eq!(bookmarks.count().unwrap(), 1);
}

#[test]
fn test_enhanced_item_roundtrip_keeps_images() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = Paths::from_dir(temp.path().to_path_buf());
    let now = Utc::now();

    let item = EnhancedLibraryItem {
        id: next_item_id(now),
        url: "https://dribbble.com/shots/1".to_string(),
        title: "Landing Shot".to_string(),
        description: None,
        site_name: Some("Dribbble".to_string()),
        images: vec![
            ImageData {
                url: "https://cdn.dribbble.com/userupload/1/a.png".to_string(),
                local_path: Some("/data/images/a.png".to_string()),
                width: None,
                height: None,
            },
            ImageData::remote("https://cdn.dribbble.com/userupload/1/b.png"),
        ],
        user_memo: None,
        conversations: Vec::new(),
        tags: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    let enhanced: Collection<EnhancedLibraryItem> = Collection::new(paths.enhanced_file());
    enhanced.append(item.clone()).unwrap();

    let loaded = enhanced.load().unwrap();
    assert_eq!(loaded, vec![item.clone()]);

    // The local/remote fallback holds for each image after a reload
    assert_eq!(loaded[0].images[0].display_source(), "/data/images/a.png");
    assert_eq!(
        loaded[0].images[1].display_source(),
        "https://cdn.dribbble.com/userupload/1/b.png"
    );
}

#[test]
fn test_presets_roundtrip() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = Paths::from_dir(temp.path().to_path_buf());

    let presets: Collection<RolePreset> = Collection::new(paths.presets_file());
    presets
        .append(RolePreset {
            id: next_item_id(Utc::now()),
            name: "Preset1".to_string(),
            field: "design".to_string(),
            role: "UI/UX designer".to_string(),
            color: Some("#6C5CE7".to_string()),
        })
        .unwrap();

    let loaded = presets.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].color.as_deref(), Some("#6C5CE7"));
}

#[test]
fn test_history_survives_reopen() {
    let temp = tempfile::TempDir::new().unwrap();
    let paths = Paths::from_dir(temp.path().to_path_buf());

    {
        let history = SearchHistory::new(paths.history_file());
        history.record("modern logo design", Some(156), Utc::now()).unwrap();
    }

    let history = SearchHistory::new(paths.history_file());
    let recent = history.recent(5).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].query, "modern logo design");
    assert_eq!(recent[0].result_count, Some(156));
}
