//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for emoji-search loading operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the file-loading call sites.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the keyword dataset or configuration fails.
///
/// Searching itself never fails; only the loaders that feed the index do.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A dataset or configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A dataset document is not valid JSON of the expected shape.
    #[error("Malformed {document} document: {source}")]
    Json {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The configuration file is not valid TOML of the expected shape.
    #[error("Malformed configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// An emoji has no keywords, so it has no canonical name.
    #[error("Emoji '{emoji}' has an empty keyword list")]
    EmptyKeywords { emoji: String },
}
