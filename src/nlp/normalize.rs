//! String canonicalization shared by keywords and user input.

use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters dropped outright during normalization.
const STRIPPED_CHARS: &[char] = &['“', '”', '"', ':', ';', '(', ')', ',', '.', '!', '?'];

/// Canonicalize a keyword or input string.
///
/// - Removes `“ ” " : ; ( ) , . ! ?`
/// - Replaces `-` with a space
/// - Replaces `’` with `'`
/// - Lowercases
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            c if STRIPPED_CHARS.contains(&c) => {}
            '-' => out.push(' '),
            '’' => out.push('\''),
            c => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// Collapse runs of whitespace to single spaces and trim both ends.
///
/// Applied after [`normalize`] so a phrase's words are exactly its `' '`-separated parts.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sort key that orders accented letters with their base letter, so "piñata"
/// sorts between "pin" and "pine". Ties on the key fall back to plain `str` order.
pub fn collation_key(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.nfd().filter(|c| !is_combining_mark(*c)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Hello, World!", "hello world")]
    #[case("“quoted”", "quoted")]
    #[case("face: (tears) of joy.", "face tears of joy")]
    #[case("T-Rex", "t rex")]
    #[case("don’t", "don't")]
    #[case("what?!", "what")]
    #[case("a;b\"c", "abc")]
    #[case("😀", "😀")]
    #[case("", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        check!(normalize(input) == expected);
    }

    #[rstest]
    #[case("Man-Artist: “Ōkami”")]
    #[case("  Double--Dash  ")]
    #[case("İstanbul")]
    #[case("ÉCOLE’S (old)")]
    fn test_normalize_idempotent(#[case] input: &str) {
        let once = normalize(input);
        check!(normalize(&once) == once);
    }

    #[rstest]
    #[case("  dog   face ", "dog face")]
    #[case("t  rex", "t rex")]
    #[case("   ", "")]
    fn test_collapse_whitespace(#[case] input: &str, #[case] expected: &str) {
        check!(collapse_whitespace(input) == expected);
    }

    #[rstest]
    #[case("pine", "pine")]
    #[case("piñata", "pinata")]
    #[case("café", "cafe")]
    #[case("jalapeño", "jalapeno")]
    #[case("😀", "😀")]
    fn test_collation_key(#[case] input: &str, #[case] expected: &str) {
        check!(collation_key(input) == expected);
    }
}
