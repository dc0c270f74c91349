//! Keyword/topic suggestions via a chat-completion endpoint, with a TTL
//! cache and fixed fallback lists. The client never surfaces an error:
//! failures degrade to the fallback list, tagged with the result source.

mod cache;
mod client;
mod clock;
mod parse;
mod prompts;

pub use cache::TopicCache;
pub use client::{SuggestClient, SuggestError, SuggestionSource, Suggestions};
pub use clock::{Clock, SystemClock};
pub use parse::parse_list;
pub use prompts::{fallback_keywords, fallback_topics};
