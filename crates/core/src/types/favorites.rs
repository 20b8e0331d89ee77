//! The favorites set: product ids marked with the heart control.
//!
//! Favorites hold ids only, never product snapshots. Cached name/price
//! copies go stale against catalog changes; render-time lookup through the
//! catalog keeps display data current.

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Ordered set of favorited product ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoritesSet {
    ids: Vec<ProductId>,
}

impl FavoritesSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// The favorited ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Whether nothing is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of favorited products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether a product is favorited.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Flip a product's favorite status. Returns whether it is now present.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if let Some(position) = self.ids.iter().position(|id| *id == product_id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }
}
