//! In-memory port implementations for use case tests

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::ports::{PatternError, PatternExpander, StoreError, TranscriptStore};

/// Map-backed store; clones share the same files
#[derive(Clone, Default)]
pub struct MemoryStore {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    writes: Arc<Mutex<Vec<PathBuf>>>,
    removals: Arc<Mutex<Vec<PathBuf>>>,
}

impl MemoryStore {
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::default();
        {
            let mut map = store.files.lock().unwrap();
            for (path, contents) in files {
                map.insert(PathBuf::from(path), contents.to_string());
            }
        }
        store
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn removals(&self) -> Vec<PathBuf> {
        self.removals.lock().unwrap().clone()
    }

    fn not_found(path: &Path) -> StoreError {
        StoreError::NotFound {
            path: path.display().to_string(),
        }
    }
}

#[async_trait]
impl TranscriptStore for MemoryStore {
    async fn size(&self, path: &Path) -> Result<u64, StoreError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| Self::not_found(path))
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
        self.contents(path).ok_or_else(|| Self::not_found(path))
    }

    async fn write_atomic(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> Result<(), StoreError> {
        self.removals.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(path))
    }

    async fn canonical_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Expander answering from a fixed table; unknown patterns match nothing
#[derive(Default)]
pub struct StaticExpander {
    matches: HashMap<String, Vec<PathBuf>>,
}

impl StaticExpander {
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a str, Vec<&'a str>)>) -> Self {
        let matches = entries
            .into_iter()
            .map(|(pattern, paths)| {
                (
                    pattern.to_string(),
                    paths.into_iter().map(PathBuf::from).collect(),
                )
            })
            .collect();
        Self { matches }
    }
}

#[async_trait]
impl PatternExpander for StaticExpander {
    async fn expand(&self, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
        if pattern.contains('[') && !pattern.contains(']') {
            return Err(PatternError::InvalidPattern {
                pattern: pattern.to_string(),
                message: "unclosed character class".to_string(),
            });
        }
        Ok(self.matches.get(pattern).cloned().unwrap_or_default())
    }
}
