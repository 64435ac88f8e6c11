//! Raw key-value store primitive and the in-memory implementation.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::StoreError;

/// A string-keyed store of string values.
///
/// This is the only capability the storefront core needs from its host:
/// the browser's local storage, a file on disk, or an in-memory map in tests.
/// Values are opaque; JSON encoding happens one layer up in [`crate::Storage`].
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Get all keys currently in the store.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Check if a key exists in the store.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// In-memory store, mostly for tests and demos.
///
/// An optional quota (in bytes of keys plus values) makes writes fail with
/// [`StoreError::QuotaExceeded`] the way a full browser store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty, unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store that holds at most `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            quota: Some(limit),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn usage(&self) -> Result<usize, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;

        if let Some(limit) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded { needed, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}
