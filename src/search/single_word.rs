//! Search-as-you-type matching for a single input word.

use crate::nlp::collation_key;
use crate::search::index::{EmojiEntry, KeywordIndex};
use crate::search::{MatchKind, SearchContext, SearchOptions};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Emojis with a keyword (or a word of a phrase keyword) equal to or starting
/// with `word`, best first. `word` must already be normalized.
pub fn match_single_word<'a>(
    word: &str,
    index: &'a KeywordIndex,
    options: &SearchOptions,
) -> Vec<&'a str> {
    rank_single_word(word, &SearchContext::new(index, options))
}

pub(crate) fn rank_single_word<'a>(word: &str, context: &SearchContext<'a>) -> Vec<&'a str> {
    let mut ranked: Vec<(&'a str, SingleWordRank<'_>)> = context
        .index()
        .entries()
        .iter()
        .filter_map(|entry| Some((entry.emoji.as_str(), best_rank(word, entry, context)?)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| a.cmp(b));

    tracing::trace!("Single word {:?} matched {} emojis", word, ranked.len());
    ranked.into_iter().map(|(emoji, _)| emoji).collect()
}

/// The best-ranked match among all of an emoji's keywords. Earlier keywords win ties.
fn best_rank<'c>(
    word: &str,
    entry: &'c EmojiEntry,
    context: &'c SearchContext<'_>,
) -> Option<SingleWordRank<'c>> {
    let mut best: Option<SingleWordRank<'c>> = None;

    for (position, keyword) in context.keywords(entry).enumerate() {
        let is_single_word = !keyword.contains(' ');

        for candidate in keyword.split(' ') {
            let Some(kind) = MatchKind::of(word, candidate) else {
                continue;
            };
            let is_prefix = kind == MatchKind::Prefix;

            let rank = SingleWordRank {
                kind,
                is_custom_most_relevant: context.is_custom_most_relevant(candidate, &entry.emoji),
                is_most_relevant: context.index().is_most_relevant(candidate, &entry.emoji),
                is_emoji_name: position == 0,
                is_single_word,
                matched_word: candidate,
                matched_key: collation_key(candidate),
                // Recency and frequency look at the whole keyword, not the matched word.
                recency_rank: is_prefix.then(|| context.recency_rank(keyword)).flatten(),
                frequency_rank: is_prefix
                    .then(|| context.index().frequency_rank(keyword))
                    .flatten(),
            };

            if best.as_ref().is_none_or(|current| rank < *current) {
                best = Some(rank);
            }
        }
    }

    best
}

/// Ranking signals of one keyword match. Orders best first.
///
/// Exact matches compare on: custom most relevant, most relevant, emoji name,
/// single-word keyword. Prefix matches compare on: recency, single-word keyword,
/// word frequency, matched word, custom most relevant, most relevant.
#[derive(Debug, Clone)]
pub(crate) struct SingleWordRank<'k> {
    kind: MatchKind,
    is_custom_most_relevant: bool,
    is_most_relevant: bool,
    is_emoji_name: bool,
    is_single_word: bool,
    matched_word: &'k str,
    matched_key: Cow<'k, str>,
    recency_rank: Option<usize>,
    frequency_rank: Option<usize>,
}

/// Present ranks before absent ones, lower first.
fn compare_present_first(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// `true` before `false`.
fn compare_flag(a: bool, b: bool) -> Ordering {
    b.cmp(&a)
}

impl Ord for SingleWordRank<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind.cmp(&other.kind).then_with(|| match self.kind {
            MatchKind::Exact => {
                compare_flag(self.is_custom_most_relevant, other.is_custom_most_relevant)
                    .then_with(|| compare_flag(self.is_most_relevant, other.is_most_relevant))
                    .then_with(|| compare_flag(self.is_emoji_name, other.is_emoji_name))
                    .then_with(|| compare_flag(self.is_single_word, other.is_single_word))
            }
            MatchKind::Prefix => compare_present_first(self.recency_rank, other.recency_rank)
                .then_with(|| compare_flag(self.is_single_word, other.is_single_word))
                .then_with(|| compare_present_first(self.frequency_rank, other.frequency_rank))
                .then_with(|| self.matched_key.cmp(&other.matched_key))
                .then_with(|| self.matched_word.cmp(other.matched_word))
                .then_with(|| {
                    compare_flag(self.is_custom_most_relevant, other.is_custom_most_relevant)
                })
                .then_with(|| compare_flag(self.is_most_relevant, other.is_most_relevant)),
        })
    }
}

impl PartialOrd for SingleWordRank<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SingleWordRank<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SingleWordRank<'_> {}
