pub mod add;
pub mod bookmark;
pub mod cache;
pub mod crawl;
pub mod history;
pub mod init;
pub mod keywords;
pub mod list;
pub mod presets;
pub mod search;
pub mod status;
pub mod topics;
pub mod version;

use creatopick_suggest::{SuggestionSource, Suggestions};

/// Single-threaded runtime for the few commands that do network I/O
pub(crate) fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Completion credential, if configured
pub(crate) fn api_key_from_env() -> Option<String> {
    std::env::var("CREATOPICK_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|key| !key.trim().is_empty())
}

pub(crate) fn print_suggestions(suggestions: &Suggestions) {
    for (i, item) in suggestions.items.iter().enumerate() {
        println!("{}. {}", i + 1, item);
    }
    match suggestions.source {
        SuggestionSource::Cache => println!("\n(cached)"),
        SuggestionSource::Fallback => {
            println!("\n(offline fallback; set OPENAI_API_KEY for live suggestions)")
        }
        SuggestionSource::Api => {}
    }
}
