use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "creatopick")]
#[command(version)]
#[command(about = "Reference collection for creatives: crawl, save, organize, suggest")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory layout
    Init,

    /// Crawl a URL and print the extracted images and metadata
    Crawl {
        url: String,

        /// Print the extraction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Crawl a URL, download its images and save a library item
    Add {
        url: String,

        /// Attach a memo
        #[arg(short, long)]
        memo: Option<String>,

        /// Attach a tag (repeatable)
        #[arg(long)]
        tag: Vec<String>,

        /// Keep remote URLs instead of downloading
        #[arg(long)]
        skip_download: bool,
    },

    /// Crawl a URL and save a bookmark
    Bookmark {
        url: String,

        /// Override the extracted title
        #[arg(short, long)]
        title: Option<String>,

        /// Attach a memo
        #[arg(short, long)]
        memo: Option<String>,

        /// Attach a tag (repeatable)
        #[arg(long)]
        tag: Vec<String>,
    },

    /// List saved library items or bookmarks
    List {
        /// List the bookmark collection instead of the library
        #[arg(long)]
        bookmarks: bool,

        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Suggest work topics for a field/role pair
    Topics {
        #[arg(short, long)]
        field: String,

        #[arg(short, long)]
        role: String,

        /// Drop any cached entry first
        #[arg(long)]
        refresh: bool,
    },

    /// Suggest search keywords for a field/role pair
    Keywords {
        #[arg(short, long)]
        field: String,

        #[arg(short, long)]
        role: String,

        /// Focus the keywords on a topic
        #[arg(short, long)]
        topic: Option<String>,
    },

    /// Build a platform search URL for a keyword
    Search {
        keyword: String,

        /// google, behance, dribbble or unsplash
        #[arg(short, long, default_value = "google")]
        platform: String,

        /// Open the URL in the system browser
        #[arg(long)]
        open: bool,
    },

    /// Show recent searches
    History {
        /// Delete all search history
        #[arg(long)]
        clear: bool,
    },

    /// Manage role presets
    Presets {
        #[command(subcommand)]
        action: Option<PresetAction>,
    },

    /// Manage cached data
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Show data paths and collection counts
    Status,

    /// Print version information
    Version,
}

#[derive(Subcommand)]
pub enum PresetAction {
    /// List all presets
    List,
    /// Add a preset
    Add {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        field: String,

        #[arg(short, long)]
        role: String,

        #[arg(long)]
        color: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum CacheAction {
    /// Delete cached topics and downloaded images
    Clear,
}
