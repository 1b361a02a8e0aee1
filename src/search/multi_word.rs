//! Phrase matching for inputs of several words.
//!
//! Each emoji is first matched against its phrase keywords, in order or out of
//! order. Only emojis without any phrase keyword match fall back to matching
//! the input words against all of their keyword words pooled together.

use crate::search::index::{EmojiEntry, KeywordIndex};
use crate::search::{MatchKind, SearchContext, SearchOptions};
use std::cmp::Ordering;

/// Emojis matching every word of `phrase`, best first. `phrase` must already be
/// normalized with single spaces between words.
pub fn match_phrase<'a>(
    phrase: &str,
    index: &'a KeywordIndex,
    options: &SearchOptions,
) -> Vec<&'a str> {
    rank_phrase(phrase, &SearchContext::new(index, options))
}

pub(crate) fn rank_phrase<'a>(phrase: &str, context: &SearchContext<'a>) -> Vec<&'a str> {
    let query = PhraseQuery::new(phrase);

    let mut ranked: Vec<(&'a str, PhraseRank)> = context
        .index()
        .entries()
        .iter()
        .filter_map(|entry| Some((entry.emoji.as_str(), query.best_rank(entry, context)?)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| a.cmp(b));

    tracing::trace!("Phrase {:?} matched {} emojis", phrase, ranked.len());
    ranked.into_iter().map(|(emoji, _)| emoji).collect()
}

struct PhraseQuery<'p> {
    phrase: &'p str,
    /// `phrase` preceded by a space, for finding it at a word boundary.
    spaced: String,
    words: Vec<&'p str>,
}

impl<'p> PhraseQuery<'p> {
    fn new(phrase: &'p str) -> Self {
        Self {
            phrase,
            spaced: format!(" {phrase}"),
            words: phrase.split(' ').collect(),
        }
    }

    fn best_rank(&self, entry: &EmojiEntry, context: &SearchContext<'_>) -> Option<PhraseRank> {
        let mut best: Option<PhraseRank> = None;

        for keyword in context.keywords(entry).filter(|k| k.contains(' ')) {
            let keyword_words: Vec<&str> = keyword.split(' ').collect();

            let rank = if keyword == self.phrase {
                PhraseRank::InOrder {
                    exact: true,
                    custom_most_relevant: context.is_custom_most_relevant(keyword, &entry.emoji),
                    keyword_words: keyword_words.len(),
                }
            } else if keyword.starts_with(self.phrase) || keyword.contains(&self.spaced) {
                PhraseRank::InOrder {
                    exact: false,
                    custom_most_relevant: context.is_custom_most_relevant(keyword, &entry.emoji),
                    keyword_words: keyword_words.len(),
                }
            } else {
                if keyword_words.len() < self.words.len() {
                    continue;
                }
                let Some(counts) = WordMatches::count(&self.words, &keyword_words) else {
                    continue;
                };
                PhraseRank::OutOfOrder {
                    exact_words: counts.exact,
                    prefix_words: counts.prefix,
                    keyword_words: keyword_words.len(),
                }
            };

            if best.is_none_or(|current| rank < current) {
                best = Some(rank);
            }
        }

        best.or_else(|| {
            let jointed: Vec<&str> = context
                .keywords(entry)
                .flat_map(|keyword| keyword.split(' '))
                .collect();
            let counts = WordMatches::count(&self.words, &jointed)?;
            Some(PhraseRank::Jointed {
                exact_words: counts.exact,
                prefix_words: counts.prefix,
            })
        })
    }
}

/// How many input words matched exactly and how many only as a prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct WordMatches {
    exact: usize,
    prefix: usize,
}

impl WordMatches {
    /// `None` unless every input word matches at least one candidate.
    fn count(input_words: &[&str], candidates: &[&str]) -> Option<Self> {
        let mut matches = Self::default();
        for input in input_words {
            let kind = candidates
                .iter()
                .filter_map(|candidate| MatchKind::of(input, candidate))
                .min()?;
            match kind {
                MatchKind::Exact => matches.exact += 1,
                MatchKind::Prefix => matches.prefix += 1,
            }
        }
        Some(matches)
    }
}

/// How an emoji matched a phrase. Orders best first: in-order phrase keyword
/// matches, then out-of-order phrase keyword matches, then pooled keyword words.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PhraseRank {
    /// The keyword equals the phrase or contains it at a word boundary.
    InOrder {
        exact: bool,
        custom_most_relevant: bool,
        keyword_words: usize,
    },
    /// Every input word matches some word of one phrase keyword.
    OutOfOrder {
        exact_words: usize,
        prefix_words: usize,
        keyword_words: usize,
    },
    /// Every input word matches some word across all of the emoji's keywords.
    Jointed {
        exact_words: usize,
        prefix_words: usize,
    },
}

impl PhraseRank {
    fn tier(&self) -> u8 {
        match self {
            Self::InOrder { .. } => 0,
            Self::OutOfOrder { .. } => 1,
            Self::Jointed { .. } => 2,
        }
    }
}

impl Ord for PhraseRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::InOrder {
                    exact,
                    custom_most_relevant,
                    keyword_words,
                },
                Self::InOrder {
                    exact: other_exact,
                    custom_most_relevant: other_custom,
                    keyword_words: other_words,
                },
            ) => other_exact
                .cmp(exact)
                .then_with(|| other_custom.cmp(custom_most_relevant))
                .then_with(|| keyword_words.cmp(other_words)),
            (
                Self::OutOfOrder {
                    exact_words,
                    prefix_words,
                    keyword_words,
                },
                Self::OutOfOrder {
                    exact_words: other_exact,
                    prefix_words: other_prefix,
                    keyword_words: other_words,
                },
            ) => other_exact
                .cmp(exact_words)
                .then_with(|| other_prefix.cmp(prefix_words))
                .then_with(|| keyword_words.cmp(other_words)),
            (
                Self::Jointed {
                    exact_words,
                    prefix_words,
                },
                Self::Jointed {
                    exact_words: other_exact,
                    prefix_words: other_prefix,
                },
            ) => other_exact
                .cmp(exact_words)
                .then_with(|| other_prefix.cmp(prefix_words)),
            _ => self.tier().cmp(&other.tier()),
        }
    }
}

impl PartialOrd for PhraseRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PhraseRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PhraseRank {}
