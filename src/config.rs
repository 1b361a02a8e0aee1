//! Search configuration loaded from TOML.
//!
//! ```toml
//! default_max_results = 24
//!
//! [dataset]
//! emoji_keywords = "data/emoji-keywords.json"
//! keyword_most_relevant_emoji = "data/keyword-most-relevant-emoji.json"
//! top_words = "data/top-1000-words-by-frequency.json"
//! ```

use crate::error::{LoadError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Result cap used when a caller does not pass one.
pub const DEFAULT_MAX_RESULTS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub default_max_results: usize,
    pub dataset: DatasetPaths,
}

/// Locations of the three dataset documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetPaths {
    pub emoji_keywords: PathBuf,
    pub keyword_most_relevant_emoji: PathBuf,
    pub top_words: PathBuf,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_results: DEFAULT_MAX_RESULTS,
            dataset: DatasetPaths::default(),
        }
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            emoji_keywords: PathBuf::from("data/emoji-keywords.json"),
            keyword_most_relevant_emoji: PathBuf::from("data/keyword-most-relevant-emoji.json"),
            top_words: PathBuf::from("data/top-1000-words-by-frequency.json"),
        }
    }
}

impl SearchConfig {
    /// Parse a configuration document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, LoadError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a configuration file.
    ///
    /// Relative dataset paths are resolved against the directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.dataset = config.dataset.resolved_against(base);
        }

        tracing::debug!(
            "Loaded search config from {} (default_max_results={})",
            path.display(),
            config.default_max_results
        );

        Ok(config)
    }
}

impl DatasetPaths {
    fn resolved_against(self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            emoji_keywords: resolve(self.emoji_keywords),
            keyword_most_relevant_emoji: resolve(self.keyword_most_relevant_emoji),
            top_words: resolve(self.top_words),
        }
    }
}
