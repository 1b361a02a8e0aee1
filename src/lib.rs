//! Emoji search and ranking over a curated keyword dataset.
//!
//! [`EmojiSearch`] offers two modes: [`search`](EmojiSearch::search) for
//! search-as-you-type and [`search_best_match`](EmojiSearch::search_best_match)
//! for finding an emoji that fits a sentence. Both run synchronously against an
//! immutable [`KeywordIndex`] built once from a [`Dataset`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod nlp;
pub mod search;
pub mod tracing;

pub use config::{DatasetPaths, SearchConfig};
pub use dataset::Dataset;
pub use error::{LoadError, Result};
pub use search::{EmojiSearch, IndexStats, KeywordIndex, SearchOptions};
