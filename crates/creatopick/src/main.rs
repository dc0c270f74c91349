mod cli;
mod commands;

use clap::Parser;
use cli::{CacheAction, Cli, Commands, PresetAction};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Crawl { url, json } => commands::crawl::run(&url, json),
        Commands::Add {
            url,
            memo,
            tag,
            skip_download,
        } => commands::add::run(&url, memo, tag, skip_download),
        Commands::Bookmark {
            url,
            title,
            memo,
            tag,
        } => commands::bookmark::run(&url, title, memo, tag),
        Commands::List { bookmarks, limit } => commands::list::run(bookmarks, limit),
        Commands::Topics {
            field,
            role,
            refresh,
        } => commands::topics::run(&field, &role, refresh),
        Commands::Keywords { field, role, topic } => {
            commands::keywords::run(&field, &role, topic.as_deref())
        }
        Commands::Search {
            keyword,
            platform,
            open,
        } => commands::search::run(&keyword, &platform, open),
        Commands::History { clear } => commands::history::run(clear),
        Commands::Presets { action } => match action {
            Some(PresetAction::Add {
                name,
                field,
                role,
                color,
            }) => commands::presets::run_add(&name, &field, &role, color),
            Some(PresetAction::List) | None => commands::presets::run_list(),
        },
        Commands::Cache { action } => match action {
            CacheAction::Clear => commands::cache::run_clear(),
        },
        Commands::Status => commands::status::run(),
        Commands::Version => commands::version::run(),
    }
}
