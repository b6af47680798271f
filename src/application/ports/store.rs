//! Transcript file storage port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("File too large: {path} ({size} bytes exceeds maximum of {max} bytes)")]
    TooLarge { path: String, size: u64, max: u64 },

    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error, mapping `NotFound` to its own variant
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        let path = path.display().to_string();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Port for reading, writing and removing transcript files
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Size of a file in bytes
    async fn size(&self, path: &Path) -> Result<u64, StoreError>;

    /// Read a whole file as UTF-8 text.
    ///
    /// Fails with [`StoreError::TooLarge`] before reading any content when the
    /// file exceeds `max_bytes`.
    async fn read_limited(&self, path: &Path, max_bytes: u64) -> Result<String, StoreError>;

    /// Replace `path` with `contents` so that it never holds a partial write.
    /// Missing parent directories are created.
    async fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StoreError>;

    /// Delete a file
    async fn remove(&self, path: &Path) -> Result<(), StoreError>;

    /// Canonical form used to compare paths: the resolved path when the file
    /// exists, otherwise its absolute form.
    async fn canonical_path(&self, path: &Path) -> PathBuf;
}
