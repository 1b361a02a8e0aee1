//! In-memory keyword index over the emoji dataset.

use crate::dataset::Dataset;
use crate::nlp::{collapse_whitespace, normalize};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

/// One emoji and its normalized keywords. `keywords[0]` is the emoji's name.
#[derive(Debug, Clone)]
pub struct EmojiEntry {
    pub emoji: String,
    pub keywords: Vec<String>,
}

/// Summary counts of an index, logged when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub emojis: usize,
    pub keywords: usize,
    pub multi_word_keywords: usize,
    pub distinct_words: usize,
}

/// Immutable lookup structures shared by every search call.
///
/// Built once from a [`Dataset`]; afterwards it is only read, so it can be shared
/// across threads behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    entries: Vec<EmojiEntry>,
    emoji_set: AHashSet<String>,
    most_relevant_emoji: AHashMap<String, String>,
    frequency_rank: AHashMap<String, usize>,
}

/// Normalize a keyword the way the index stores it.
pub(crate) fn canonical_keyword(keyword: &str) -> String {
    collapse_whitespace(&normalize(keyword))
}

impl KeywordIndex {
    /// Normalize every keyword and derive the lookup maps.
    pub fn build(dataset: Dataset) -> Self {
        let start = std::time::Instant::now();

        let entries: Vec<EmojiEntry> = dataset
            .emoji_keywords
            .into_iter()
            .map(|(emoji, keywords)| EmojiEntry {
                emoji,
                keywords: keywords.iter().map(|k| canonical_keyword(k)).collect(),
            })
            .collect();

        let emoji_set = entries.iter().map(|entry| entry.emoji.clone()).collect();

        let most_relevant_emoji = dataset
            .keyword_most_relevant_emoji
            .into_iter()
            .map(|(keyword, emoji)| (canonical_keyword(&keyword), emoji))
            .collect();

        // First occurrence wins if a word is listed twice.
        let mut frequency_rank = AHashMap::with_capacity(dataset.top_words.len());
        for (rank, word) in dataset.top_words.into_iter().enumerate() {
            frequency_rank.entry(word).or_insert(rank);
        }

        let index = Self {
            entries,
            emoji_set,
            most_relevant_emoji,
            frequency_rank,
        };

        let stats = index.stats();
        tracing::info!(
            "Built keyword index: {} emojis, {} keywords ({} multi-word), {} distinct words in {:?}",
            stats.emojis,
            stats.keywords,
            stats.multi_word_keywords,
            stats.distinct_words,
            start.elapsed()
        );

        index
    }

    /// Emojis in dataset order.
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// The index's own copy of `emoji`, if it is a known emoji.
    pub fn get_emoji(&self, emoji: &str) -> Option<&str> {
        self.emoji_set.get(emoji).map(String::as_str)
    }

    pub fn contains_emoji(&self, emoji: &str) -> bool {
        self.emoji_set.contains(emoji)
    }

    /// Whether `emoji` is the dataset's designated best match for `keyword`.
    pub fn is_most_relevant(&self, keyword: &str, emoji: &str) -> bool {
        self.most_relevant_emoji
            .get(keyword)
            .is_some_and(|best| best == emoji)
    }

    /// Position of `word` among the most frequent English words, if listed.
    pub fn frequency_rank(&self, word: &str) -> Option<usize> {
        self.frequency_rank.get(word).copied()
    }

    pub fn stats(&self) -> IndexStats {
        let keywords = self.entries.iter().flat_map(|e| &e.keywords);
        let distinct_words: AHashSet<&str> = keywords
            .clone()
            .flat_map(|k| k.split(' '))
            .collect();

        IndexStats {
            emojis: self.entries.len(),
            keywords: keywords.clone().count(),
            multi_word_keywords: keywords.filter(|k| k.contains(' ')).count(),
            distinct_words: distinct_words.len(),
        }
    }
}
