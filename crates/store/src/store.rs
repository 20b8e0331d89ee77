//! The cart store: canonical in-memory state synchronized with storage.
//!
//! The store owns the live [`Cart`] and [`FavoritesSet`], loads them lazily
//! from the key-value store on first access, and writes the full updated
//! record back synchronously after every mutation - a reload or a second
//! context sharing the backing store observes the latest state.
//!
//! Persisted bytes that fail to decode are treated as absent: the store
//! substitutes empty state, logs a warning, and stays usable. External
//! corruption of storage is never fatal.

use chrono::{Days, Local, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use parts_cart_core::{
    Cart, Catalog, FavoritesSet, ProductId, SnapshotId, Totals, compute_totals,
};

use crate::error::StoreError;
use crate::kv::{KeyValueStore, keys};

/// The state handed to change subscribers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    pub cart: Cart,
    pub favorites: FavoritesSet,
}

/// Result of a successful (simulated) checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Totals captured before the cart was cleared.
    pub totals: Totals,
    /// Estimated delivery date, three days out.
    pub delivery_date: NaiveDate,
}

type Subscriber = Box<dyn Fn(&CartState)>;

/// Persistent cart store over a key-value backing store.
///
/// All operations are synchronous and run to completion; there is no
/// locking across contexts sharing the backing store (last writer wins).
pub struct CartStore<S: KeyValueStore> {
    kv: S,
    state: Option<CartState>,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store over a backing key-value store.
    ///
    /// Nothing is read until the first access; persisted state stays where
    /// it is until then.
    #[must_use]
    pub const fn new(kv: S) -> Self {
        Self {
            kv,
            state: None,
            subscribers: Vec::new(),
        }
    }

    /// The backing key-value store.
    pub fn kv(&self) -> &S {
        &self.kv
    }

    /// Tear down the store, returning the backing key-value store.
    #[must_use]
    pub fn into_kv(self) -> S {
        self.kv
    }

    /// Current cart and favorites.
    ///
    /// Takes `&mut self` because state loads lazily on first access.
    pub fn state(&mut self) -> &CartState {
        self.state_mut()
    }

    /// Register a change listener.
    ///
    /// Fired after every mutating operation with the updated state, so a
    /// view layer can re-render without polling.
    pub fn subscribe(&mut self, subscriber: impl Fn(&CartState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    // =========================================================================
    // Cart mutations
    // =========================================================================

    /// Add one unit of a product, merging into an existing line item.
    ///
    /// Unknown ids are accepted silently; totals computation skips them.
    pub fn add_item(&mut self, product_id: ProductId) -> &Cart {
        self.state_mut().cart.add(product_id);
        self.persist_cart();
        self.notify();
        &self.state_mut().cart
    }

    /// Set a line item's quantity; 0 behaves as removal.
    ///
    /// A missing entry is a no-op - this never creates a line item, and
    /// nothing is persisted unless the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> &Cart {
        if self.state_mut().cart.set_quantity(product_id, quantity) {
            self.persist_cart();
            self.notify();
        }
        &self.state_mut().cart
    }

    /// Step a line item's quantity by `delta`; dropping to 0 removes it.
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i32) -> &Cart {
        if self.state_mut().cart.adjust_quantity(product_id, delta) {
            self.persist_cart();
            self.notify();
        }
        &self.state_mut().cart
    }

    /// Delete a line item if present.
    pub fn remove_item(&mut self, product_id: ProductId) -> &Cart {
        if self.state_mut().cart.remove(product_id) {
            self.persist_cart();
            self.notify();
        }
        &self.state_mut().cart
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.state_mut().cart.clear();
        self.persist_cart();
        self.notify();
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flip a product's favorite status.
    pub fn toggle_favorite(&mut self, product_id: ProductId) -> &FavoritesSet {
        self.state_mut().favorites.toggle(product_id);
        self.persist_favorites();
        self.notify();
        &self.state_mut().favorites
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Save a copy of the current cart under the snapshot slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] when the cart has no items; any
    /// prior snapshot is left untouched.
    pub fn save_snapshot(&mut self) -> Result<SnapshotId, StoreError> {
        if self.state_mut().cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let encoded = serde_json::to_string(&self.state_mut().cart);
        match encoded {
            Ok(json) => self.kv.set(keys::SNAPSHOT, &json),
            Err(e) => tracing::error!("failed to encode cart snapshot: {e}"),
        }
        Ok(SnapshotId::default())
    }

    /// Overwrite the live cart with the saved snapshot (replace, not merge).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoSnapshot`] when nothing is saved. A snapshot
    /// that fails to decode counts as absent.
    pub fn apply_snapshot(&mut self) -> Result<&Cart, StoreError> {
        let Some(raw) = self.kv.get(keys::SNAPSHOT) else {
            return Err(StoreError::NoSnapshot);
        };
        let snapshot: Cart = match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!("discarding malformed cart snapshot: {e}");
                return Err(StoreError::NoSnapshot);
            }
        };
        if snapshot.is_empty() {
            return Err(StoreError::NoSnapshot);
        }

        self.state_mut().cart = snapshot;
        self.persist_cart();
        self.notify();
        Ok(&self.state_mut().cart)
    }

    // =========================================================================
    // Totals & checkout
    // =========================================================================

    /// Price the current cart against a catalog.
    ///
    /// Entries missing from the catalog are skipped, not removed.
    pub fn totals(&mut self, catalog: &impl Catalog) -> Totals {
        compute_totals(&self.state_mut().cart, catalog)
    }

    /// Place the order: capture totals, clear the cart, report a delivery
    /// estimate three days out.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyCart`] when there is nothing to buy.
    pub fn checkout(&mut self, catalog: &impl Catalog) -> Result<OrderConfirmation, StoreError> {
        if self.state_mut().cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let totals = compute_totals(&self.state_mut().cart, catalog);
        let today = Local::now().date_naive();
        let delivery_date = today.checked_add_days(Days::new(3)).unwrap_or(today);

        self.clear();
        Ok(OrderConfirmation {
            totals,
            delivery_date,
        })
    }

    // =========================================================================
    // Internal: load & persist
    // =========================================================================

    fn state_mut(&mut self) -> &mut CartState {
        if self.state.is_none() {
            let cart: Cart = decode_or_default(&self.kv, keys::CART);
            let favorites: FavoritesSet = decode_or_default(&self.kv, keys::FAVORITES);
            self.state = Some(CartState { cart, favorites });
        }
        self.state.get_or_insert_with(CartState::default)
    }

    fn persist_cart(&mut self) {
        let Some(state) = &self.state else { return };
        match serde_json::to_string(&state.cart) {
            Ok(json) => self.kv.set(keys::CART, &json),
            Err(e) => tracing::error!("failed to encode cart: {e}"),
        }
    }

    fn persist_favorites(&mut self) {
        let Some(state) = &self.state else { return };
        match serde_json::to_string(&state.favorites) {
            Ok(json) => self.kv.set(keys::FAVORITES, &json),
            Err(e) => tracing::error!("failed to encode favorites: {e}"),
        }
    }

    fn notify(&self) {
        let Some(state) = &self.state else { return };
        for subscriber in &self.subscribers {
            subscriber(state);
        }
    }
}

impl<S: KeyValueStore + std::fmt::Debug> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("kv", &self.kv)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn decode_or_default<T: DeserializeOwned + Default>(kv: &impl KeyValueStore, key: &str) -> T {
    match kv.get(key) {
        None => T::default(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, "discarding malformed persisted state: {e}");
                T::default()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::kv::MemoryStore;
    use parts_cart_core::{Category, Money, Product};

    const A: ProductId = ProductId::new(1);
    const B: ProductId = ProductId::new(2);

    fn catalog() -> Vec<Product> {
        vec![Product {
            id: A,
            name: "Ryzen 7 7800X3D".to_string(),
            price: Money::from_cents(34999),
            image: "images/ryzen.png".to_string(),
            category: Category::Processors,
        }]
    }

    fn store() -> CartStore<MemoryStore> {
        CartStore::new(MemoryStore::new())
    }

    #[test]
    fn test_loads_persisted_state_lazily() {
        let mut kv = MemoryStore::new();
        kv.seed(keys::CART, r#"[{"product_id":1,"quantity":2}]"#);
        kv.seed(keys::FAVORITES, "[2]");

        let mut store = CartStore::new(kv);
        let state = store.state();
        assert_eq!(state.cart.get(A).map(|item| item.quantity), Some(2));
        assert!(state.favorites.contains(B));
    }

    #[test]
    fn test_malformed_persisted_state_loads_empty() {
        let mut kv = MemoryStore::new();
        kv.seed(keys::CART, "{definitely not a cart");
        kv.seed(keys::FAVORITES, "\"nope\"");

        let mut store = CartStore::new(kv);
        let state = store.state();
        assert!(state.cart.is_empty());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_mutations_persist_synchronously() {
        let mut store = store();
        store.add_item(A);
        store.add_item(A);
        assert_eq!(
            store.kv().get(keys::CART),
            Some(r#"[{"product_id":1,"quantity":2}]"#.to_string())
        );
    }

    #[test]
    fn test_reload_round_trip() {
        let mut store = store();
        store.add_item(A);
        store.add_item(A);
        store.add_item(B);
        store.toggle_favorite(B);
        let expected = store.state().clone();

        let mut reloaded = CartStore::new(store.into_kv());
        assert_eq!(reloaded.state(), &expected);
    }

    #[test]
    fn test_set_quantity_missing_entry_persists_nothing() {
        let mut store = store();
        store.set_quantity(A, 5);
        assert!(store.state().cart.is_empty());
        assert_eq!(store.kv().get(keys::CART), None);
    }

    #[test]
    fn test_clear_persists_empty_state() {
        let mut store = store();
        store.add_item(A);
        store.clear();
        assert_eq!(store.kv().get(keys::CART), Some("[]".to_string()));
    }

    #[test]
    fn test_save_snapshot_requires_items() {
        let mut kv = MemoryStore::new();
        kv.seed(keys::SNAPSHOT, r#"[{"product_id":2,"quantity":1}]"#);

        let mut store = CartStore::new(kv);
        assert_eq!(store.save_snapshot(), Err(StoreError::EmptyCart));
        // the prior snapshot is untouched
        assert_eq!(
            store.kv().get(keys::SNAPSHOT),
            Some(r#"[{"product_id":2,"quantity":1}]"#.to_string())
        );
    }

    #[test]
    fn test_apply_snapshot_replaces_not_merges() {
        let mut store = store();
        store.add_item(B);
        store.save_snapshot().expect("save");

        store.clear();
        store.add_item(A);
        store.add_item(A);

        let cart = store.apply_snapshot().expect("apply");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(B).map(|item| item.quantity), Some(1));
        assert!(cart.get(A).is_none());
    }

    #[test]
    fn test_apply_snapshot_without_one_fails() {
        let mut store = store();
        assert_eq!(store.apply_snapshot().err(), Some(StoreError::NoSnapshot));
    }

    #[test]
    fn test_malformed_snapshot_counts_as_absent() {
        let mut kv = MemoryStore::new();
        kv.seed(keys::SNAPSHOT, "not json");
        let mut store = CartStore::new(kv);
        assert_eq!(store.apply_snapshot().err(), Some(StoreError::NoSnapshot));
    }

    #[test]
    fn test_subscribers_see_every_mutation() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = store();
        store.subscribe(move |state: &CartState| {
            sink.borrow_mut().push(state.cart.total_quantity());
        });

        store.add_item(A);
        store.add_item(A);
        store.remove_item(A);
        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }

    #[test]
    fn test_checkout_clears_cart_and_reports_totals() {
        let mut store = store();
        store.add_item(A);
        store.add_item(A);

        let confirmation = store.checkout(&catalog()).expect("checkout");
        assert_eq!(confirmation.totals.subtotal, Money::from_cents(69998));
        assert!(store.state().cart.is_empty());
        assert_eq!(store.kv().get(keys::CART), Some("[]".to_string()));
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut store = store();
        assert_eq!(store.checkout(&catalog()).err(), Some(StoreError::EmptyCart));
    }
}
