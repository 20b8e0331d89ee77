//! Parts Cart Store - persistent cart state over a key-value store.
//!
//! The [`CartStore`] owns the canonical in-memory cart and favorites set,
//! keeps them synchronized with a durable string-keyed store after every
//! mutation, and notifies subscribers so a view layer can re-render without
//! polling.
//!
//! # Architecture
//!
//! - [`kv`] - The `KeyValueStore` trait plus an in-memory implementation
//! - [`file`] - A file-backed store (the local-storage equivalent)
//! - [`catalog`] - JSON catalog loader for `products.json`
//! - [`store`] - The cart store itself: mutations, persistence, checkout
//!
//! # Concurrency
//!
//! Everything is single-threaded and synchronous; operations run to
//! completion and return. Processes sharing a file store get last-writer-
//! wins semantics with no cross-process locking.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod file;
pub mod kv;
pub mod store;

pub use catalog::{CatalogError, JsonCatalog};
pub use error::StoreError;
pub use file::{FileStore, FileStoreError};
pub use kv::{KeyValueStore, MemoryStore, keys};
pub use store::{CartState, CartStore, OrderConfirmation};
