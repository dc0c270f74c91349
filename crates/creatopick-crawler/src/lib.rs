//! Site-specific HTML scraping: ordered extraction rules per source site

mod extract;
mod fetch;

pub use extract::{
    extract, extract_behance, extract_dribbble, extract_generic, extract_pinterest, Extraction,
};
pub use fetch::{CrawlError, Crawler};
