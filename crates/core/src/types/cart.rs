//! The cart: an ordered collection of line items pending checkout.
//!
//! Invariants:
//!
//! - at most one line item per product id (adding again merges quantities)
//! - every line item has `quantity >= 1`; dropping below 1 deletes the entry
//! - insertion order is display order and survives persistence

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product reference with a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Ordered sequence of line items, unique per product id.
///
/// All operations here are pure in-memory mutations; persistence and change
/// notification live in the cart store that owns the `Cart`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The line item for a product, if present.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.product_id == product_id)
    }

    /// Sum of quantities across all line items (the cart-icon badge count).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Add one unit of a product.
    ///
    /// Merges into the existing line item if present, otherwise appends a
    /// new entry with quantity 1.
    pub fn add(&mut self, product_id: ProductId) {
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(LineItem {
                product_id,
                quantity: 1,
            }),
        }
    }

    /// Set the quantity of an existing line item.
    ///
    /// A quantity of 0 removes the entry. Missing entries are left alone;
    /// this never creates a line item. Returns whether the cart changed.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Step a line item's quantity by `delta` (the +/- cart controls).
    ///
    /// Dropping to 0 or below removes the entry. Missing entries are left
    /// alone. Returns whether the cart changed.
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i32) -> bool {
        let Some(item) = self.get(product_id) else {
            return false;
        };
        let new_quantity = i64::from(item.quantity).saturating_add(i64::from(delta));
        let new_quantity = u32::try_from(new_quantity.max(0)).unwrap_or(u32::MAX);
        self.set_quantity(product_id, new_quantity)
    }

    /// Remove a line item if present. Returns whether the cart changed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.items.len() != before
    }

    /// Drop all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ProductId = ProductId::new(1);
    const B: ProductId = ProductId::new(2);

    #[test]
    fn test_repeated_add_merges_into_one_entry() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(A);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(A).map(|item| item.quantity), Some(5));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(A);
        cart.add(A);
        cart.add(B);
        let ids: Vec<_> = cart.items().iter().map(|item| item.product_id).collect();
        assert_eq!(ids, vec![A, B]);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let mut via_set = Cart::new();
        via_set.add(A);
        via_set.add(B);
        let mut via_remove = via_set.clone();

        via_set.set_quantity(A, 0);
        via_remove.remove(A);
        assert_eq!(via_set, via_remove);
    }

    #[test]
    fn test_set_quantity_never_creates() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(A, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_adjust_quantity_scenario() {
        // add A, add A, add B -> [{A,2},{B,1}]
        let mut cart = Cart::new();
        cart.add(A);
        cart.add(A);
        cart.add(B);
        assert_eq!(cart.get(A).map(|item| item.quantity), Some(2));

        // -1 on A -> [{A,1},{B,1}]
        assert!(cart.adjust_quantity(A, -1));
        assert_eq!(cart.get(A).map(|item| item.quantity), Some(1));

        // -1 on A again -> [{B,1}]
        assert!(cart.adjust_quantity(A, -1));
        assert!(cart.get(A).is_none());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(B).map(|item| item.quantity), Some(1));
    }

    #[test]
    fn test_adjust_quantity_missing_is_noop() {
        let mut cart = Cart::new();
        cart.add(A);
        assert!(!cart.adjust_quantity(B, 1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_quantity_counts_units() {
        let mut cart = Cart::new();
        cart.add(A);
        cart.add(A);
        cart.add(B);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_serde_is_a_bare_array() {
        let mut cart = Cart::new();
        cart.add(A);
        cart.add(A);
        let json = serde_json::to_string(&cart).expect("serialize");
        assert_eq!(json, r#"[{"product_id":1,"quantity":2}]"#);
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
