//! Loading the keyword dataset that feeds [`KeywordIndex`](crate::search::KeywordIndex).
//!
//! The dataset is produced elsewhere and shipped as three JSON documents:
//!
//! - `emoji_keywords`: `{"➕": ["plus", "add", "sum", ...], ...}`. Object order is the
//!   dataset order and is preserved; the first keyword of each emoji is its name.
//! - `keyword_most_relevant_emoji`: `{"arm": "💪", ...}`.
//! - `top_words`: `["the", "of", "and", ...]`, most frequent first.

use crate::config::{DatasetPaths, SearchConfig};
use crate::error::{LoadError, Result};
use anyhow::Context;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// The raw dataset, before normalization and index construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Emoji and its keywords, in dataset order.
    pub emoji_keywords: Vec<(String, Vec<String>)>,
    /// Keyword to the emoji that best represents it.
    pub keyword_most_relevant_emoji: HashMap<String, String>,
    /// Most frequent English words, most frequent first.
    pub top_words: Vec<String>,
}

impl Dataset {
    /// Build a dataset from in-memory parts.
    ///
    /// Every emoji must have at least one keyword, since the first one is its name.
    pub fn new(
        emoji_keywords: Vec<(String, Vec<String>)>,
        keyword_most_relevant_emoji: HashMap<String, String>,
        top_words: Vec<String>,
    ) -> std::result::Result<Self, LoadError> {
        if let Some((emoji, _)) = emoji_keywords.iter().find(|(_, keywords)| keywords.is_empty()) {
            return Err(LoadError::EmptyKeywords {
                emoji: emoji.clone(),
            });
        }

        Ok(Self {
            emoji_keywords,
            keyword_most_relevant_emoji,
            top_words,
        })
    }

    /// Parse the three JSON documents.
    pub fn from_json_strs(
        emoji_keywords: &str,
        keyword_most_relevant_emoji: &str,
        top_words: &str,
    ) -> std::result::Result<Self, LoadError> {
        let OrderedEmojiKeywords(emoji_keywords) =
            serde_json::from_str(emoji_keywords).map_err(|source| LoadError::Json {
                document: "emoji_keywords",
                source,
            })?;
        let keyword_most_relevant_emoji = serde_json::from_str(keyword_most_relevant_emoji)
            .map_err(|source| LoadError::Json {
                document: "keyword_most_relevant_emoji",
                source,
            })?;
        let top_words = serde_json::from_str(top_words).map_err(|source| LoadError::Json {
            document: "top_words",
            source,
        })?;

        Self::new(emoji_keywords, keyword_most_relevant_emoji, top_words)
    }

    /// Read and parse the three documents from disk.
    pub fn from_paths(paths: &DatasetPaths) -> Result<Self> {
        let emoji_keywords = read(&paths.emoji_keywords)?;
        let most_relevant = read(&paths.keyword_most_relevant_emoji)?;
        let top_words = read(&paths.top_words)?;

        let dataset = Self::from_json_strs(&emoji_keywords, &most_relevant, &top_words)
            .with_context(|| {
                format!(
                    "Failed to load emoji dataset from {}",
                    paths.emoji_keywords.display()
                )
            })?;

        tracing::debug!(
            "Loaded dataset: {} emojis, {} most relevant keywords, {} top words",
            dataset.emoji_keywords.len(),
            dataset.keyword_most_relevant_emoji.len(),
            dataset.top_words.len()
        );

        Ok(dataset)
    }

    /// Read the dataset from the locations named in `config`.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::from_paths(&config.dataset)
    }
}

fn read(path: &Path) -> std::result::Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// `emoji_keywords` document, keeping the object's key order.
struct OrderedEmojiKeywords(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for OrderedEmojiKeywords {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = OrderedEmojiKeywords;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping each emoji to its keyword list")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((emoji, keywords)) = map.next_entry::<String, Vec<String>>()? {
                    entries.push((emoji, keywords));
                }
                Ok(OrderedEmojiKeywords(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn preserves_emoji_order() {
        let dataset = Dataset::from_json_strs(
            r#"{"🐶": ["dog face", "dog"], "🐱": ["cat face", "cat"], "🐭": ["mouse face"]}"#,
            r#"{"dog": "🐶"}"#,
            r#"["the", "dog"]"#,
        )
        .unwrap();

        let emojis: Vec<&str> = dataset.emoji_keywords.iter().map(|(e, _)| e.as_str()).collect();
        check!(emojis == ["🐶", "🐱", "🐭"]);
        check!(dataset.keyword_most_relevant_emoji["dog"] == "🐶");
        check!(dataset.top_words == ["the", "dog"]);
    }

    #[test]
    fn names_the_malformed_document() {
        let result = Dataset::from_json_strs(r#"{"🐶": ["dog"]}"#, "[]", "[]");
        let_assert!(Err(LoadError::Json { document, .. }) = result);
        check!(document == "keyword_most_relevant_emoji");
    }

    #[test]
    fn rejects_emoji_without_keywords() {
        let result = Dataset::from_json_strs(r#"{"🐶": []}"#, "{}", "[]");
        let_assert!(Err(LoadError::EmptyKeywords { emoji }) = result);
        check!(emoji == "🐶");
    }

    #[test]
    fn missing_file_reports_path() {
        let paths = DatasetPaths {
            emoji_keywords: "/nonexistent/emoji-keywords.json".into(),
            ..DatasetPaths::default()
        };
        let err = Dataset::from_paths(&paths).unwrap_err();
        check!(err.to_string().contains("/nonexistent/emoji-keywords.json"));
    }
}
