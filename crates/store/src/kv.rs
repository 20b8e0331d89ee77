//! The durable key-value surface the cart store persists through.
//!
//! Models browser local storage: synchronous string get/set/remove, shared
//! across contexts, surviving reloads. The cart store is the only component
//! that touches these keys; nothing else reads or writes them directly.

use std::collections::HashMap;

/// Storage keys owned by the cart store.
pub mod keys {
    /// The live cart: a JSON array of `{product_id, quantity}`.
    pub const CART: &str = "cart";
    /// The favorites set: a JSON array of product ids.
    pub const FAVORITES: &str = "favorites";
    /// The saved-cart snapshot slot, same shape as the cart.
    pub const SNAPSHOT: &str = "favoriteCart";
}

/// Durable string-keyed storage.
///
/// Writes are synchronous: when `set` returns, a reload (or another process
/// reading the same backing store) observes the new value.
pub trait KeyValueStore {
    /// Read the value under a key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value under a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete a key. Deleting a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

/// Ephemeral in-memory store for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with raw bytes, bypassing the cart store.
    ///
    /// Test hook for simulating pre-existing or corrupted persisted state.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("cart"), None);

        store.set("cart", "[]");
        assert_eq!(store.get("cart"), Some("[]".to_string()));

        store.set("cart", r#"[{"product_id":1,"quantity":2}]"#);
        assert_eq!(
            store.get("cart"),
            Some(r#"[{"product_id":1,"quantity":2}]"#.to_string())
        );

        store.remove("cart");
        assert_eq!(store.get("cart"), None);
        // removing again is a no-op
        store.remove("cart");
    }
}
