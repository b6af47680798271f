//! Local filesystem store adapter

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;

use crate::application::ports::{StoreError, TranscriptStore};

/// Transcript store backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTranscriptStore;

impl LocalTranscriptStore {
    pub fn new() -> Self {
        Self
    }
}

/// Write to a temp file beside `path`, then rename it over `path`
fn persist_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.flush()?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl TranscriptStore for LocalTranscriptStore {
    async fn size(&self, path: &Path) -> Result<u64, StoreError> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| StoreError::from_io(path, e))?;
        Ok(metadata.len())
    }

    async fn read_limited(&self, path: &Path, max_bytes: u64) -> Result<String, StoreError> {
        let size = self.size(path).await?;
        if size > max_bytes {
            return Err(StoreError::TooLarge {
                path: path.display().to_string(),
                size,
                max: max_bytes,
            });
        }

        fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::from_io(path, e))
    }

    async fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::from_io(parent, e))?;
            }
        }

        let target = path.to_path_buf();
        let bytes = contents.as_bytes().to_vec();
        tokio::task::spawn_blocking(move || persist_atomically(&target, &bytes))
            .await
            .map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                source: std::io::Error::other(e),
            })?
            .map_err(|e| StoreError::from_io(path, e))
    }

    async fn remove(&self, path: &Path) -> Result<(), StoreError> {
        fs::remove_file(path)
            .await
            .map_err(|e| StoreError::from_io(path, e))
    }

    async fn canonical_path(&self, path: &Path) -> PathBuf {
        if let Ok(resolved) = fs::canonicalize(path).await {
            return resolved;
        }

        // Not written yet: resolve the directory it will land in
        if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            if let Ok(resolved_parent) = fs::canonicalize(parent).await {
                return resolved_parent.join(name);
            }
        }

        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    }
}
