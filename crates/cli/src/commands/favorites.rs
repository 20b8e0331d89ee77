//! Favorites subcommands.

use parts_cart_core::{Catalog, ProductId};
use parts_cart_store::{CartStore, KeyValueStore};

/// Flip a product's favorite status.
pub fn toggle(store: &mut CartStore<impl KeyValueStore>, product_id: ProductId) {
    let favorites = store.toggle_favorite(product_id);
    if favorites.contains(product_id) {
        println!("Product {product_id} added to favorites.");
    } else {
        println!("Product {product_id} removed from favorites.");
    }
}

/// List favorited products with catalog names where known.
///
/// Favorites store ids only; names and prices come from the catalog at
/// display time, so ids the catalog no longer carries show as bare ids.
pub fn list(store: &mut CartStore<impl KeyValueStore>, catalog: &impl Catalog) {
    let favorites = &store.state().favorites;
    if favorites.is_empty() {
        println!("No favorites yet.");
        return;
    }

    for &id in favorites.ids() {
        match catalog.get(id) {
            Some(product) => println!("  [{}] {} {}", id, product.name, product.price),
            None => println!("  [{id}] (no longer in catalog)"),
        }
    }
}
