//! Per-call search options and the lookup context derived from them.

use crate::search::index::{EmojiEntry, KeywordIndex, canonical_keyword};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Caller-supplied additions and overrides for a single search call.
///
/// Every field is optional; an empty field disables the corresponding feature.
/// Nothing here modifies the shared index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Extra keywords per emoji, appended after the emoji's dataset keywords.
    pub custom_emoji_keywords: HashMap<String, Vec<String>>,
    /// Keyword to preferred emoji. Ranks above the dataset's own most relevant emoji.
    pub custom_keyword_most_relevant_emoji: HashMap<String, String>,
    /// Previously searched inputs, most recent first.
    pub recently_searched_inputs: Vec<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `keywords` to `emoji`'s keyword list.
    pub fn with_custom_keywords<I, S>(mut self, emoji: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_emoji_keywords
            .entry(emoji.into())
            .or_default()
            .extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Prefer `emoji` for exact matches of `keyword`.
    pub fn with_most_relevant_emoji(
        mut self,
        keyword: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        self.custom_keyword_most_relevant_emoji
            .insert(keyword.into(), emoji.into());
        self
    }

    /// Replace the recency list. Most recent first.
    pub fn with_recent_searches<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recently_searched_inputs = inputs.into_iter().map(Into::into).collect();
        self
    }
}

/// Lookups for one search call: the shared index plus the caller's options,
/// normalized the same way as the index.
#[derive(Debug)]
pub(crate) struct SearchContext<'a> {
    index: &'a KeywordIndex,
    custom_keywords: AHashMap<String, Vec<String>>,
    custom_most_relevant: AHashMap<String, String>,
    /// `None` when the caller supplied no recent searches.
    recency: Option<AHashMap<String, usize>>,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(index: &'a KeywordIndex, options: &SearchOptions) -> Self {
        let custom_keywords = options
            .custom_emoji_keywords
            .iter()
            .filter(|(emoji, _)| index.contains_emoji(emoji))
            .map(|(emoji, keywords)| {
                let keywords = keywords.iter().map(|k| canonical_keyword(k)).collect();
                (emoji.clone(), keywords)
            })
            .collect();

        let custom_most_relevant = options
            .custom_keyword_most_relevant_emoji
            .iter()
            .map(|(keyword, emoji)| (canonical_keyword(keyword), emoji.clone()))
            .collect();

        let recency = (!options.recently_searched_inputs.is_empty()).then(|| {
            let mut recency = AHashMap::with_capacity(options.recently_searched_inputs.len());
            // Most recent occurrence wins for repeated inputs.
            for (rank, input) in options.recently_searched_inputs.iter().enumerate() {
                recency.entry(canonical_keyword(input)).or_insert(rank);
            }
            recency
        });

        Self {
            index,
            custom_keywords,
            custom_most_relevant,
            recency,
        }
    }

    pub(crate) fn index(&self) -> &'a KeywordIndex {
        self.index
    }

    /// Dataset keywords of `entry` followed by the caller's custom keywords.
    pub(crate) fn keywords<'s>(&'s self, entry: &'s EmojiEntry) -> impl Iterator<Item = &'s str> {
        let custom = self
            .custom_keywords
            .get(entry.emoji.as_str())
            .into_iter()
            .flatten();

        entry.keywords.iter().chain(custom).map(String::as_str)
    }

    pub(crate) fn is_custom_most_relevant(&self, keyword: &str, emoji: &str) -> bool {
        self.custom_most_relevant
            .get(keyword)
            .is_some_and(|preferred| preferred == emoji)
    }

    /// Position of `keyword` in the caller's recent searches.
    pub(crate) fn recency_rank(&self, keyword: &str) -> Option<usize> {
        self.recency.as_ref()?.get(keyword).copied()
    }
}
