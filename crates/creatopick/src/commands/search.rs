use chrono::Utc;
use creatopick_core::SearchPlatform;
use creatopick_store::{Paths, SearchHistory};

pub fn run(keyword: &str, platform: &str, open: bool) -> anyhow::Result<()> {
    let platform: SearchPlatform = platform
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let url = platform.search_url(keyword);

    let paths = Paths::new()?;
    let history = SearchHistory::new(paths.history_file());
    history.record(keyword, None, Utc::now())?;

    println!("{url}");

    if open {
        webbrowser::open(&url)?;
    }

    Ok(())
}
