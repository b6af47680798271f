//! Glob pattern expander adapter

use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{PatternError, PatternExpander};

/// Expands shell-style patterns (`*`, `?`, `[..]`, `**`) with the `glob` crate.
/// A pattern without wildcards matches the literal path if it exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobPatternExpander;

impl GlobPatternExpander {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PatternExpander for GlobPatternExpander {
    async fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
        let entries = glob::glob(pattern).map_err(|e| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| PatternError::Unreadable {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            if !path.is_dir() {
                matches.push(path);
            }
        }
        Ok(matches)
    }
}
