use creatopick_store::{Paths, SearchHistory};

pub fn run(clear: bool) -> anyhow::Result<()> {
    let paths = Paths::new()?;
    let history = SearchHistory::new(paths.history_file());

    if clear {
        history.clear()?;
        println!("Search history cleared");
        return Ok(());
    }

    let recent = history.recent(20)?;
    if recent.is_empty() {
        println!("No search history");
        return Ok(());
    }

    println!("Recent searches");
    println!("===============");
    for item in &recent {
        let count = item
            .result_count
            .map(|c| format!(" ({c} results)"))
            .unwrap_or_default();
        println!(
            "  {} {}{}",
            item.timestamp.format("%Y-%m-%d %H:%M"),
            item.query,
            count
        );
    }

    Ok(())
}
