use creatopick_core::LibraryItem;
use creatopick_store::{Collection, Paths};

pub fn run(bookmarks: bool, limit: usize) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let (label, path) = if bookmarks {
        ("Bookmarks", paths.bookmarks_file())
    } else {
        ("Library", paths.library_file())
    };

    let collection: Collection<LibraryItem> = Collection::new(path);
    let mut items = collection.load()?;

    println!("{label}: {}", items.len());
    println!("==========");

    if items.is_empty() {
        println!("Nothing saved yet.");
        return Ok(());
    }

    // Appended chronologically; show newest first
    items.reverse();
    for item in items.iter().take(limit) {
        let date = item.created_at.format("%Y-%m-%d");
        let source = item.source.as_deref().unwrap_or("-");
        println!("  {} [{}] {}", date, source, item.title);
        if !item.tags.is_empty() {
            println!("    tags: {}", item.tags.join(", "));
        }
        if let Some(memo) = &item.memo {
            println!("    memo: {memo}");
        }
    }

    Ok(())
}
