//! Pattern expansion port interface

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Pattern expansion errors
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to read matches for '{pattern}': {message}")]
    Unreadable { pattern: String, message: String },
}

/// Port for turning a path or glob pattern into matching files
#[async_trait]
pub trait PatternExpander: Send + Sync {
    /// Expand a pattern to the files it matches.
    ///
    /// Directories are never returned. An empty result is not an error here;
    /// callers decide how to treat it.
    async fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>, PatternError>;
}
