//! Emoji matching and ranking.
//!
//! Three pipelines share one [`KeywordIndex`]: single-word prefix search for
//! search-as-you-type, multi-word phrase search, and the forgiving best-match
//! ranker that falls back to stemmed words. [`EmojiSearch`] dispatches between them.

pub(crate) mod best_match;
pub(crate) mod engine;
pub(crate) mod index;
pub(crate) mod multi_word;
pub(crate) mod options;
pub(crate) mod single_word;

pub use best_match::match_best;
pub use engine::EmojiSearch;
pub use index::{EmojiEntry, IndexStats, KeywordIndex};
pub use multi_word::match_phrase;
pub use options::SearchOptions;
pub use single_word::match_single_word;

pub(crate) use options::SearchContext;

/// How a keyword word relates to an input word.
///
/// Declared best first so the derived `Ord` prefers exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum MatchKind {
    Exact,
    Prefix,
}

impl MatchKind {
    /// `Exact` when equal, `Prefix` when `candidate` is longer and starts with `input`.
    pub(crate) fn of(input: &str, candidate: &str) -> Option<Self> {
        if candidate == input {
            Some(Self::Exact)
        } else if candidate.starts_with(input) {
            Some(Self::Prefix)
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::dataset::Dataset;
    use crate::search::KeywordIndex;

    /// Build an index from borrowed literals.
    pub(crate) fn index(
        emoji_keywords: &[(&str, &[&str])],
        most_relevant: &[(&str, &str)],
        top_words: &[&str],
    ) -> KeywordIndex {
        let dataset = Dataset::new(
            emoji_keywords
                .iter()
                .map(|(emoji, keywords)| {
                    (
                        emoji.to_string(),
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
            most_relevant
                .iter()
                .map(|(keyword, emoji)| (keyword.to_string(), emoji.to_string()))
                .collect(),
            top_words.iter().map(|w| w.to_string()).collect(),
        )
        .unwrap();
        KeywordIndex::build(dataset)
    }
}
