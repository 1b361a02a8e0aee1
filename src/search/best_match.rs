//! Forgiving matching for sentences and list items.
//!
//! A single word that matches nothing is retried with its stem. A phrase is
//! reduced to its content words, and an emoji matches when any of those words,
//! raw or stemmed, matches one of its keyword words.

use crate::nlp::{filter_parts_of_speech, stem};
use crate::search::index::{EmojiEntry, KeywordIndex};
use crate::search::single_word::rank_single_word;
use crate::search::{SearchContext, SearchOptions};
use ahash::AHashSet;
use std::cmp::Ordering;

/// Best-effort matches for normalized `input`, best first.
///
/// Single words go through single-word matching, then its stem if nothing
/// matched. Phrases are ranked by how many of their content words match.
pub fn match_best<'a>(input: &str, index: &'a KeywordIndex, options: &SearchOptions) -> Vec<&'a str> {
    let context = SearchContext::new(index, options);

    if input.contains(' ') {
        return rank_any_word(input, &context);
    }

    let matches = rank_single_word(input, &context);
    if !matches.is_empty() {
        return matches;
    }
    rank_stemmed_word(input, &context)
}

/// Single-word matching on the stem of `word`. Empty when stemming changes nothing.
pub(crate) fn rank_stemmed_word<'a>(word: &str, context: &SearchContext<'a>) -> Vec<&'a str> {
    let stemmed = stem(word);
    if stemmed == word || stemmed.is_empty() {
        tracing::debug!("No stem to retry for {:?}", word);
        return Vec::new();
    }

    tracing::debug!("Retrying {:?} as stem {:?}", word, stemmed);
    rank_single_word(&stemmed, context)
}

/// Rank emojis by how many content words of `phrase` match their keyword words.
pub(crate) fn rank_any_word<'a>(phrase: &str, context: &SearchContext<'a>) -> Vec<&'a str> {
    let tokens: Vec<&str> = phrase.split(' ').collect();
    let words = filter_parts_of_speech(&tokens);
    if words.is_empty() {
        tracing::debug!("Phrase {:?} has no content words", phrase);
        return Vec::new();
    }

    let stems: Vec<String> = words.iter().map(|word| stem(word)).collect();
    let query: Vec<QueryWord<'_>> = words
        .iter()
        .zip(&stems)
        .map(|(&raw, stemmed)| QueryWord {
            raw,
            stemmed: stemmed.as_str(),
        })
        .collect();

    let mut ranked: Vec<(&'a str, BestMatchRank)> = context
        .index()
        .entries()
        .iter()
        .filter_map(|entry| {
            let rank = BestMatchRank::of(&query, entry, context);
            (!rank.is_empty()).then(|| (entry.emoji.as_str(), rank))
        })
        .collect();

    ranked.sort_by(|(_, a), (_, b)| a.cmp(b));

    tracing::trace!(
        "Best match over {:?} matched {} emojis",
        words,
        ranked.len()
    );
    ranked.into_iter().map(|(emoji, _)| emoji).collect()
}

#[derive(Debug, Clone, Copy)]
struct QueryWord<'q> {
    raw: &'q str,
    stemmed: &'q str,
}

/// Per-emoji counts of how the query words matched. Orders best first.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BestMatchRank {
    exact_words: usize,
    exact_stemmed_words: usize,
    prefix_words: usize,
    prefix_stemmed_words: usize,
}

impl BestMatchRank {
    fn of(query: &[QueryWord<'_>], entry: &EmojiEntry, context: &SearchContext<'_>) -> Self {
        let tokens: Vec<&str> = context
            .keywords(entry)
            .flat_map(|keyword| keyword.split(' '))
            .collect();
        let words = filter_parts_of_speech(&tokens);
        let lookup: AHashSet<&str> = words.iter().copied().collect();

        let mut rank = Self::default();
        for word in query {
            if lookup.contains(word.raw) {
                rank.exact_words += 1;
            } else if word.raw != word.stemmed && lookup.contains(word.stemmed) {
                rank.exact_stemmed_words += 1;
            } else {
                rank.count_prefix(word, &words);
            }
        }
        rank
    }

    /// A keyword word starting with the raw word counts once as a raw prefix
    /// match and ends the scan; otherwise any keyword word starting with the
    /// stem counts once as a stemmed prefix match. An empty stem matches nothing.
    fn count_prefix(&mut self, word: &QueryWord<'_>, keyword_words: &[&str]) {
        let mut stem_matched = false;
        for keyword_word in keyword_words {
            if keyword_word.starts_with(word.raw) {
                self.prefix_words += 1;
                return;
            }
            if !word.stemmed.is_empty() && keyword_word.starts_with(word.stemmed) {
                stem_matched = true;
            }
        }

        if stem_matched {
            self.prefix_stemmed_words += 1;
        }
    }

    fn is_empty(&self) -> bool {
        self.exact_words == 0
            && self.exact_stemmed_words == 0
            && self.prefix_words == 0
            && self.prefix_stemmed_words == 0
    }

    fn all_exact(&self) -> usize {
        self.exact_words + self.exact_stemmed_words
    }
}

impl Ord for BestMatchRank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .all_exact()
            .cmp(&self.all_exact())
            .then_with(|| other.exact_words.cmp(&self.exact_words))
            .then_with(|| other.prefix_words.cmp(&self.prefix_words))
            .then_with(|| other.prefix_stemmed_words.cmp(&self.prefix_stemmed_words))
    }
}

impl PartialOrd for BestMatchRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BestMatchRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BestMatchRank {}
