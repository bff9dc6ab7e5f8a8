//! String key-value store abstraction.

use crate::error::StoreError;
use std::collections::BTreeMap;
use tracing::instrument;

/// Persistent string storage addressed by key.
pub trait KeyValueStore {
    /// Saves a value under the key, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Loads the value for the key, `None` if not present.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Removes the key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    #[instrument(skip(self, value))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        store.save("turn", "X").unwrap();
        store.save("turn", "O").unwrap();
        assert_eq!(store.load("turn").unwrap().as_deref(), Some("O"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("board").is_ok());
        assert!(store.is_empty());
    }
}
