//! Function-word filtering for the best-match pipeline.
//!
//! Sentences like "the dog is running after the ball" carry most of their meaning in
//! a few content words. Pronouns, prepositions, conjunctions, articles and a handful
//! of other high-frequency words are dropped before matching.

#[rustfmt::skip]
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they",
    "me", "him", "her", "us", "them",
    "my", "your", "his", "its", "our", "their",
    "mine", "yours", "hers", "ours", "theirs",
    "myself", "yourself", "himself", "herself", "itself", "ourselves", "themselves", "yourselves",
    "this", "that", "these", "those",
    "who", "whom", "which", "what",
];

// "above", "below", "down", "like", "off" and "up" are kept: they show up in emoji keywords.
#[rustfmt::skip]
const PREPOSITIONS: &[&str] = &[
    "about", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "beneath", "beside", "between", "beyond", "by",
    "despite", "during", "except", "for", "from", "in", "inside", "into", "near",
    "of", "on", "onto", "out", "outside", "over", "since", "than", "through", "throughout", "to", "toward",
    "under", "until", "upon", "via", "with", "within", "without",
];

const CONJUNCTIONS: &[&str] = &["for", "and", "nor", "but", "or", "yet", "so"];

const ARTICLES: &[&str] = &["a", "an", "the"];

const PREDETERMINERS: &[&str] = &["all", "both"];

/// A predeterminer following one of these words is kept ("calling all ...").
const PREDETERMINER_KEPT_AFTER: &[&str] = &["calling"];

// "not" is deliberately absent.
#[rustfmt::skip]
const OTHERS: &[&str] = &[
    "is", "are", "was", "were", "if", "will", "would", "be", "being", "one",
    "have", "has", "had", "can", "more", "then", "do", "don't", "first", "even",
    "there", "only", "also", "such", "each", "because", "however", "very",
    "must", "due",
];

/// Whether `word` is a context-free stopword (every closed class except predeterminers).
pub fn is_stopword(word: &str) -> bool {
    [PRONOUNS, PREPOSITIONS, CONJUNCTIONS, ARTICLES, OTHERS]
        .iter()
        .any(|list| list.contains(&word))
}

fn is_dropped_predeterminer(word: &str, previous: Option<&str>) -> bool {
    PREDETERMINERS.contains(&word)
        && !previous.is_some_and(|prev| PREDETERMINER_KEPT_AFTER.contains(&prev))
}

/// Remove function words from a token sequence, preserving order.
///
/// The predeterminer exception looks at the previous token of the *input*,
/// not of the filtered output.
pub fn filter_parts_of_speech<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    words
        .iter()
        .enumerate()
        .filter_map(|(idx, word)| {
            let word = word.as_ref();
            let previous = idx.checked_sub(1).map(|prev| words[prev].as_ref());
            let dropped = is_stopword(word) || is_dropped_predeterminer(word, previous);
            (!dropped).then_some(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(&["the", "dog", "is", "running", "after", "the", "ball"], &["dog", "running", "ball"])]
    #[case(&["i", "love", "you"], &["love"])]
    #[case(&["thumbs", "up"], &["thumbs", "up"])]
    #[case(&["all", "the", "cats"], &["cats"])]
    #[case(&["calling", "all", "cats"], &["calling", "all", "cats"])]
    #[case(&["both", "hands"], &["hands"])]
    #[case(&["i", "don't", "know"], &["know"])]
    #[case(&["not", "happy"], &["not", "happy"])]
    fn test_filter(#[case] input: &[&str], #[case] expected: &[&str]) {
        check!(filter_parts_of_speech(input) == expected);
    }

    #[test]
    fn test_all_stopwords_filter_to_empty() {
        check!(filter_parts_of_speech(&["it", "is", "what", "it", "is"]).is_empty());
    }

    #[test]
    fn test_accepts_owned_strings() {
        let words = vec!["the".to_string(), "moon".to_string()];
        check!(filter_parts_of_speech(&words) == vec!["moon"]);
    }

    #[rstest]
    #[case("the", true)]
    #[case("with", true)]
    #[case("all", false)]
    #[case("party", false)]
    fn test_is_stopword(#[case] word: &str, #[case] expected: bool) {
        check!(is_stopword(word) == expected);
    }
}
