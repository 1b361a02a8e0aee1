mod common;

use assert2::check;
use common::engine;
use emoji_search::{EmojiSearch, SearchOptions};
use rstest::rstest;

#[rstest]
fn hello_world_reference_order(engine: EmojiSearch) {
    let results = engine.search_best_match("hello world", Some(4), &SearchOptions::default());
    check!(results == ["👋", "🫂", "🌍", "🌎"]);
}

#[rstest]
#[case::keyword("raining")]
#[case::phrase_keyword("cloud with rain")]
#[case::jointed_keywords("precipitation weather")]
fn finds_rain_cloud(engine: EmojiSearch, #[case] input: &str) {
    let results = engine.search_best_match(input, None, &SearchOptions::default());
    check!(results.contains(&"🌧️"));
}

#[rstest]
fn stem_only_match_needs_best_match(engine: EmojiSearch) {
    let options = SearchOptions::default();
    check!(engine.search("rained", None, &options).is_empty());

    let results = engine.search_best_match("rained", None, &options);
    check!(results.first() == Some(&"🌧️"));
}

#[rstest]
fn strict_results_are_kept_when_present(engine: EmojiSearch) {
    let options = SearchOptions::default();
    for input in ["amazing", "h", "grinning face"] {
        check!(
            engine.search_best_match(input, None, &options) == engine.search(input, None, &options)
        );
    }
}

#[rstest]
fn sentence_matches_content_words(engine: EmojiSearch) {
    let results = engine.search_best_match(
        "I hope the dogs are happy",
        None,
        &SearchOptions::default(),
    );
    // "happy" and "hope" match exactly; "dogs" only through its stem.
    check!(results == ["😀", "😄", "🙏", "🐶"]);
}

#[rstest]
fn function_words_alone_match_nothing(engine: EmojiSearch) {
    let results = engine.search_best_match("of the and", None, &SearchOptions::default());
    check!(results.is_empty());
}

#[rstest]
fn custom_keywords_apply_to_best_match(engine: EmojiSearch) {
    let options = SearchOptions::new().with_custom_keywords("🏆", ["champion"]);
    let results = engine.search_best_match("we are the champions", None, &options);
    check!(results == ["🏆"]);
}
