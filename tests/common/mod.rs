//! Shared test fixtures and utilities for integration tests.
//!
//! # Reference Dataset
//!
//! `tests/fixtures/` holds a small dataset in the same three-document layout as
//! the real one. Its emoji order, most relevant emojis and top words are chosen so
//! that the documented rankings (for example `"amazing"`) hold exactly.
//!
//! # Available Fixtures
//!
//! - `dataset`: the parsed reference [`Dataset`]
//! - `engine`: an [`EmojiSearch`] over the reference dataset with the default cap
//!
//! # Shared Infrastructure
//!
//! [`TempWorkspace`] provides a temp directory for tests that load configuration
//! and dataset files from disk.

use emoji_search::{Dataset, DatasetPaths, EmojiSearch, KeywordIndex};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Returns the project root directory (where Cargo.toml lives).
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Directory containing the reference dataset documents.
pub fn fixtures_dir() -> PathBuf {
    project_root().join("tests/fixtures")
}

/// Paths of the reference dataset documents.
pub fn fixture_paths() -> DatasetPaths {
    let dir = fixtures_dir();
    DatasetPaths {
        emoji_keywords: dir.join("emoji-keywords.json"),
        keyword_most_relevant_emoji: dir.join("keyword-most-relevant-emoji.json"),
        top_words: dir.join("top-1000-words-by-frequency.json"),
    }
}

/// A temporary directory for file-based loading tests.
///
/// Cleaned up automatically when dropped.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Copies the reference dataset into `dir` under this workspace.
    ///
    /// # Panics
    /// Panics if copying fails.
    pub fn copy_fixtures(&self, dir: &str) {
        let paths = fixture_paths();
        for source in [
            &paths.emoji_keywords,
            &paths.keyword_most_relevant_emoji,
            &paths.top_words,
        ] {
            let Some(name) = source.file_name() else {
                panic!("Fixture path has no file name: {}", source.display());
            };
            let dest = self.root.join(dir).join(name);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
            }
            std::fs::copy(source, &dest).unwrap_or_else(|e| {
                panic!("Failed to copy '{}': {}", source.display(), e)
            });
        }
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The parsed reference dataset.
#[fixture]
pub fn dataset() -> Dataset {
    emoji_search::tracing::init();
    Dataset::from_paths(&fixture_paths()).expect("Reference dataset should load")
}

/// Search over the reference dataset with the default result cap.
#[fixture]
pub fn engine(dataset: Dataset) -> EmojiSearch {
    EmojiSearch::new(Arc::new(KeywordIndex::build(dataset)))
}
