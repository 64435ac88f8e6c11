//! Fail-soft JSON key-value storage for the Espressionist storefront.
//!
//! Every piece of storefront state (the cart, the order list, the admin
//! session) lives under a string key as a JSON value. This crate provides:
//!
//! - [`KeyValueStore`] - the raw, injectable store primitive
//! - [`MemoryStore`] / [`FileStore`] - in-memory and on-disk implementations
//! - [`Storage`] - the typed accessor that never raises on store faults
//!
//! # Example
//!
//! ```rust
//! use espr_storage::{keys, Storage};
//!
//! let storage = Storage::in_memory();
//!
//! assert!(storage.set(keys::CART, &vec!["espresso"]));
//! let cart: Vec<String> = storage.get(keys::CART, Vec::new());
//! assert_eq!(cart, vec!["espresso".to_string()]);
//!
//! assert!(storage.remove(keys::CART));
//! ```

mod error;
mod file;
mod kv;
mod storage;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use storage::Storage;

/// Keys used throughout the storefront.
pub mod keys {
    /// Cart line items.
    pub const CART: &str = "cart";
    /// Placed orders.
    pub const ORDERS: &str = "orders";
    /// Whether an admin is logged in.
    pub const ADMIN_LOGGED_IN: &str = "adminLoggedIn";
    /// Username of the logged-in admin.
    pub const ADMIN_USERNAME: &str = "adminUsername";
    /// ISO-8601 time of the admin login.
    pub const ADMIN_LOGIN_TIME: &str = "adminLoginTime";
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, FileStore, KeyValueStore, MemoryStore, Storage, StoreError};
}
