//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default size cap for any transcript read (10 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root directory for nested `update` output
    pub output_dir: Option<String>,
    /// Write `update` output flat into the working directory
    pub flat: Option<bool>,
    /// Keep merged segments instead of deleting them
    pub keep_sources: Option<bool>,
    /// Largest transcript accepted, in bytes
    pub max_file_size: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            output_dir: None,
            flat: Some(false),
            keep_sources: Some(false),
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output_dir: other.output_dir.or(self.output_dir),
            flat: other.flat.or(self.flat),
            keep_sources: other.keep_sources.or(self.keep_sources),
            max_file_size: other.max_file_size.or(self.max_file_size),
        }
    }

    /// Output directory, or the (relative) current directory if not set
    pub fn output_dir_or_default(&self) -> PathBuf {
        self.output_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_default()
    }

    /// Get flat setting, or false if not set
    pub fn flat_or_default(&self) -> bool {
        self.flat.unwrap_or(false)
    }

    /// Get keep_sources setting, or false if not set
    pub fn keep_sources_or_default(&self) -> bool {
        self.keep_sources.unwrap_or(false)
    }

    /// Get the size cap, or 10 MiB if not set
    pub fn max_file_size_or_default(&self) -> u64 {
        self.max_file_size.unwrap_or(DEFAULT_MAX_FILE_SIZE)
    }
}
