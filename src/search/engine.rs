//! Entry point tying input handling to the matching pipelines.

use crate::config::{DEFAULT_MAX_RESULTS, SearchConfig};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::nlp::{collapse_whitespace, normalize};
use crate::search::best_match::{rank_any_word, rank_stemmed_word};
use crate::search::multi_word::rank_phrase;
use crate::search::single_word::rank_single_word;
use crate::search::{KeywordIndex, SearchContext, SearchOptions};
use std::path::Path;
use std::sync::Arc;

/// Emoji search over a shared, immutable [`KeywordIndex`].
///
/// Cloning is cheap; clones share the index.
///
/// # Example
///
/// ```
/// use emoji_search::{Dataset, EmojiSearch, KeywordIndex, SearchOptions};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// let dataset = Dataset::new(
///     vec![("🐶".to_string(), vec!["dog face".to_string(), "dog".to_string()])],
///     HashMap::new(),
///     vec![],
/// )?;
/// let search = EmojiSearch::new(Arc::new(KeywordIndex::build(dataset)));
///
/// assert_eq!(search.search("Dog!", None, &SearchOptions::default()), ["🐶"]);
/// # Ok::<(), emoji_search::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmojiSearch {
    index: Arc<KeywordIndex>,
    default_max_results: usize,
}

/// Normalized input, classified for dispatch.
#[derive(Debug, PartialEq, Eq)]
enum Query<'s> {
    Empty,
    Emoji(&'s str),
    Word(String),
    Phrase(String),
}

impl EmojiSearch {
    pub fn new(index: Arc<KeywordIndex>) -> Self {
        Self {
            index,
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Cap applied when a call passes no `max_results`.
    pub fn with_default_max_results(mut self, default_max_results: usize) -> Self {
        self.default_max_results = default_max_results;
        self
    }

    /// Load the dataset named in `config` and build an index from it.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let dataset = Dataset::from_config(config)?;
        let index = Arc::new(KeywordIndex::build(dataset));
        Ok(Self::new(index).with_default_max_results(config.default_max_results))
    }

    /// Read a TOML configuration file and load the dataset it names.
    pub fn load(config_path: &Path) -> Result<Self> {
        Self::from_config(&SearchConfig::load(config_path)?)
    }

    pub fn index(&self) -> &Arc<KeywordIndex> {
        &self.index
    }

    pub fn default_max_results(&self) -> usize {
        self.default_max_results
    }

    /// Search-as-you-type.
    ///
    /// A single word matches keywords (and words of phrase keywords) exactly or by
    /// prefix. A phrase requires every word to match. An emoji as input returns itself.
    pub fn search(
        &self,
        input: &str,
        max_results: Option<usize>,
        options: &SearchOptions,
    ) -> Vec<&str> {
        let context = SearchContext::new(&self.index, options);

        let mut results = match self.classify(input) {
            Query::Empty => Vec::new(),
            Query::Emoji(emoji) => vec![emoji],
            Query::Word(word) => rank_single_word(&word, &context),
            Query::Phrase(phrase) => rank_phrase(&phrase, &context),
        };

        results.truncate(max_results.unwrap_or(self.default_max_results));
        results
    }

    /// Best match for a sentence or list item.
    ///
    /// Tries [`search`](Self::search) semantics first. When that finds nothing, a
    /// single word is retried as its stem, and a phrase is matched on any of its
    /// content words, raw or stemmed.
    pub fn search_best_match(
        &self,
        input: &str,
        max_results: Option<usize>,
        options: &SearchOptions,
    ) -> Vec<&str> {
        let context = SearchContext::new(&self.index, options);

        let mut results = match self.classify(input) {
            Query::Empty => Vec::new(),
            Query::Emoji(emoji) => vec![emoji],
            Query::Word(word) => {
                let strict = rank_single_word(&word, &context);
                if strict.is_empty() {
                    rank_stemmed_word(&word, &context)
                } else {
                    strict
                }
            }
            Query::Phrase(phrase) => {
                let strict = rank_phrase(&phrase, &context);
                if strict.is_empty() {
                    tracing::debug!("No phrase match for {:?}, matching any word", phrase);
                    rank_any_word(&phrase, &context)
                } else {
                    strict
                }
            }
        };

        results.truncate(max_results.unwrap_or(self.default_max_results));
        results
    }

    fn classify(&self, input: &str) -> Query<'_> {
        let normalized = collapse_whitespace(&normalize(input));

        if normalized.is_empty() {
            return Query::Empty;
        }
        if let Some(emoji) = self.index.get_emoji(&normalized) {
            return Query::Emoji(emoji);
        }

        tracing::debug!("Searching for {:?}", normalized);
        if normalized.contains(' ') {
            Query::Phrase(normalized)
        } else {
            Query::Word(normalized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::index;
    use assert2::check;
    use rstest::rstest;

    fn engine() -> EmojiSearch {
        EmojiSearch::new(Arc::new(index(
            &[
                ("🐶", &["dog face", "dog", "puppy"]),
                ("🐕", &["dog", "pet"]),
                ("🏃", &["person running", "run"]),
                ("🍰", &["shortcake", "cake"]),
            ],
            &[("dog", "🐕")],
            &[],
        )))
    }

    #[rstest]
    #[case("", Query::Empty)]
    #[case("  ?!  ", Query::Empty)]
    #[case("🐶", Query::Emoji("🐶"))]
    #[case("  Dog!  ", Query::Word("dog".to_string()))]
    #[case("Dog   Face", Query::Phrase("dog face".to_string()))]
    #[case("t-rex", Query::Phrase("t rex".to_string()))]
    fn classifies_input(#[case] input: &str, #[case] expected: Query<'static>) {
        let engine = engine();
        check!(engine.classify(input) == expected);
    }

    #[test]
    fn emoji_input_returns_itself() {
        let engine = engine();
        check!(engine.search("🍰", None, &SearchOptions::default()) == ["🍰"]);
        check!(engine.search_best_match("🍰", None, &SearchOptions::default()) == ["🍰"]);
    }

    #[test]
    fn routes_single_words_and_phrases() {
        let engine = engine();
        let options = SearchOptions::default();
        check!(engine.search("dog", None, &options) == ["🐕", "🐶"]);
        check!(engine.search("dog face", None, &options) == ["🐶"]);
    }

    #[rstest]
    #[case(None, 2)]
    #[case(Some(1), 1)]
    #[case(Some(0), 0)]
    fn truncates_to_cap(#[case] max_results: Option<usize>, #[case] expected: usize) {
        let engine = engine();
        let results = engine.search("d", max_results, &SearchOptions::default());
        check!(results.len() == expected);
    }

    #[test]
    fn configured_default_cap_applies() {
        let engine = engine().with_default_max_results(1);
        check!(engine.default_max_results() == 1);
        check!(engine.search("dog", None, &SearchOptions::default()) == ["🐕"]);
        check!(engine.search("dog", Some(5), &SearchOptions::default()).len() == 2);
    }

    #[test]
    fn best_match_prefers_strict_results() {
        let engine = engine();
        let options = SearchOptions::default();
        check!(engine.search_best_match("dog", None, &options) == engine.search("dog", None, &options));
    }

    #[test]
    fn best_match_falls_back_to_stems_and_any_word() {
        let engine = engine();
        let options = SearchOptions::default();

        check!(engine.search("cakes", None, &options).is_empty());
        check!(engine.search_best_match("cakes", None, &options) == ["🍰"]);

        check!(engine.search("the puppy ran", None, &options).is_empty());
        check!(engine.search_best_match("the puppy ran", None, &options) == ["🐶"]);
    }

    #[test]
    fn clones_share_the_index() {
        let engine = engine();
        let clone = engine.clone();
        check!(Arc::ptr_eq(engine.index(), clone.index()));
    }
}
