//! Fail-soft JSON accessor over a [`KeyValueStore`].

use std::fmt;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{KeyValueStore, MemoryStore, StoreError};

/// Typed access to a key-value store with automatic JSON serialization.
///
/// The plain methods ([`get`](Storage::get), [`set`](Storage::set),
/// [`remove`](Storage::remove)) never fail: a store fault, a full quota or a
/// value that doesn't decode is logged and turned into the caller's default
/// or `false`. The `try_*` variants return the underlying [`StoreError`].
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap a store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Wrap a store that is already shared.
    pub fn from_shared(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A fresh, unbounded in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Get and decode the value under `key`.
    ///
    /// An empty stored string counts as absent.
    pub fn try_get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.store.get(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        }
    }

    /// Encode and store `value` under `key`.
    pub fn try_set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Delete `key`.
    pub fn try_remove(&self, key: &str) -> Result<(), StoreError> {
        self.store.remove(key)
    }

    /// Get the value under `key`, or `default` if it is missing or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::error!(key, error = %e, "error retrieving value from storage");
                default
            }
        }
    }

    /// Like [`get`](Storage::get) with `T::default()` as the fallback.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key, T::default())
    }

    /// Store `value` under `key`. Returns `false` if the write failed.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "error saving value to storage");
                false
            }
        }
    }

    /// Delete `key`. Returns `false` if the store refused.
    pub fn remove(&self, key: &str) -> bool {
        match self.try_remove(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "error removing value from storage");
                false
            }
        }
    }

    /// Get the stored string under `key` as is, without JSON decoding.
    ///
    /// For keys other writers keep as plain strings. Faults read as `None`.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "error retrieving raw value from storage");
                None
            }
        }
    }

    /// Store `value` under `key` as is, without JSON encoding.
    pub fn set_raw(&self, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "error saving raw value to storage");
                false
            }
        }
    }

    /// Check if a key exists. Store faults count as absent.
    pub fn exists(&self, key: &str) -> bool {
        self.store.exists(key).unwrap_or(false)
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: String,
        quantity: u32,
    }

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::OpenError("unavailable".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::OpenError("unavailable".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::OpenError("unavailable".into()))
        }
        fn keys(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::OpenError("unavailable".into()))
        }
    }

    #[test]
    fn test_set_then_get() {
        let storage = Storage::in_memory();
        let items = vec![Item {
            id: "p1".into(),
            quantity: 2,
        }];

        assert!(storage.set("cart", &items));
        let loaded: Vec<Item> = storage.get("cart", Vec::new());
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_missing_key_returns_default() {
        let storage = Storage::in_memory();
        let loaded: Vec<Item> = storage.get_or_default("cart");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let store = MemoryStore::new();
        store.set("cart", "{not json").unwrap();
        let storage = Storage::new(store);

        let loaded: Vec<Item> = storage.get("cart", Vec::new());
        assert!(loaded.is_empty());
        assert!(storage.try_get::<Vec<Item>>("cart").is_err());
    }

    #[test]
    fn test_empty_string_is_absent() {
        let store = MemoryStore::new();
        store.set("cart", "").unwrap();
        let storage = Storage::new(store);

        assert!(storage.try_get::<Vec<Item>>("cart").unwrap().is_none());
    }

    #[test]
    fn test_broken_store_fails_soft() {
        let storage = Storage::new(BrokenStore);

        let loaded: Vec<Item> = storage.get("cart", Vec::new());
        assert!(loaded.is_empty());
        assert!(!storage.set("cart", &loaded));
        assert!(!storage.remove("cart"));
        assert!(!storage.exists("cart"));
    }

    #[test]
    fn test_quota_fault_returns_false() {
        let storage = Storage::new(MemoryStore::with_quota(8));
        assert!(!storage.set("orders", &vec!["a long order id"; 4]));
        assert!(!storage.exists("orders"));
    }

    #[test]
    fn test_raw_values_skip_json() {
        let store = Arc::new(MemoryStore::new());
        let storage = Storage::from_shared(store.clone());

        assert!(storage.set_raw("adminUsername", "admin"));
        assert_eq!(store.get("adminUsername").unwrap().as_deref(), Some("admin"));
        assert_eq!(storage.get_raw("adminUsername").as_deref(), Some("admin"));
        // Not valid JSON, so the typed accessor falls back.
        assert_eq!(storage.get("adminUsername", String::new()), "");
        assert_eq!(storage.get_raw("missing"), None);
    }

    #[test]
    fn test_raw_access_fails_soft() {
        let storage = Storage::new(BrokenStore);
        assert_eq!(storage.get_raw("adminUsername"), None);
        assert!(!storage.set_raw("adminUsername", "admin"));
    }

    #[test]
    fn test_clones_share_store() {
        let storage = Storage::in_memory();
        let other = storage.clone();

        assert!(storage.set("adminUsername", "admin"));
        let name: Option<String> = other.try_get("adminUsername").unwrap();
        assert_eq!(name.as_deref(), Some("admin"));

        assert!(other.remove("adminUsername"));
        assert!(!storage.exists("adminUsername"));
    }
}
