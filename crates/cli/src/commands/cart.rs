//! Cart subcommands: show and mutate.

use parts_cart_core::{Catalog, ProductId};
use parts_cart_store::{CartStore, KeyValueStore};

/// Print the cart contents with catalog names and line totals.
///
/// Entries whose product is missing from the catalog are not shown, the
/// same way the storefront cart page skips them; they stay in the cart.
pub fn show(store: &mut CartStore<impl KeyValueStore>, catalog: &impl Catalog) {
    let state = store.state();
    if state.cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for item in state.cart.items() {
        let Some(product) = catalog.get(item.product_id) else {
            continue;
        };
        println!(
            "  {} x {} @ {} = {}",
            item.quantity,
            product.name,
            product.price,
            product.price.times(item.quantity)
        );
    }
    println!("Items in cart: {}", state.cart.total_quantity());
}

/// Add one unit of a product.
pub fn add(store: &mut CartStore<impl KeyValueStore>, product_id: ProductId) {
    let cart = store.add_item(product_id);
    println!("Added product {product_id}. Items in cart: {}", cart.total_quantity());
}

/// Remove a product entirely.
pub fn remove(store: &mut CartStore<impl KeyValueStore>, product_id: ProductId) {
    let cart = store.remove_item(product_id);
    println!(
        "Removed product {product_id}. Items in cart: {}",
        cart.total_quantity()
    );
}

/// Set a product's quantity; 0 removes it.
pub fn set(store: &mut CartStore<impl KeyValueStore>, product_id: ProductId, quantity: u32) {
    let cart = store.set_quantity(product_id, quantity);
    match cart.get(product_id) {
        Some(item) => println!("Product {product_id} quantity is now {}.", item.quantity),
        None => println!("Product {product_id} is not in the cart."),
    }
}

/// Step a product's quantity by +1 or -1.
pub fn step(store: &mut CartStore<impl KeyValueStore>, product_id: ProductId, delta: i32) {
    let cart = store.adjust_quantity(product_id, delta);
    match cart.get(product_id) {
        Some(item) => println!("Product {product_id} quantity is now {}.", item.quantity),
        None => println!("Product {product_id} is not in the cart."),
    }
}

/// Empty the cart.
pub fn clear(store: &mut CartStore<impl KeyValueStore>) {
    store.clear();
    println!("Cart cleared.");
}
