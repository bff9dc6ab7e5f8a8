//! JSON-file backed store.

use super::store::KeyValueStore;
use crate::error::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Key-value store kept as one JSON object on disk.
///
/// Reads are served from an in-memory cache; every mutation rewrites the
/// whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    cache: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and also treated as empty; it is overwritten on the next save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(data) => match serde_json::from_str::<BTreeMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        warn!(error = %e, "Failed to parse storage file, starting empty");
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!(error = %e, "Failed to read storage file, starting empty");
                    BTreeMap::new()
                }
            }
        } else {
            debug!("No storage file yet");
            BTreeMap::new()
        };

        info!(keys = cache.len(), "File store opened");
        Self { path, cache }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the cache to disk.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(&self.cache)?;
        fs::write(&self.path, data)?;
        debug!(keys = self.cache.len(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self, value))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.cache.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.cache.get(key).cloned())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.cache.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
