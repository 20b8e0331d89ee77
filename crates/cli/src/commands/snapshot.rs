//! Favorite-cart snapshot subcommands.

use parts_cart_store::{CartStore, KeyValueStore, StoreError};

/// Save the current cart as the favorite cart.
///
/// # Errors
///
/// Returns [`StoreError::EmptyCart`] when there is nothing to save.
pub fn save(store: &mut CartStore<impl KeyValueStore>) -> Result<(), StoreError> {
    match store.save_snapshot() {
        Ok(slot) => {
            println!("Cart saved as favorite ({slot}).");
            Ok(())
        }
        Err(e @ StoreError::EmptyCart) => {
            println!("Your cart is empty. Add items before saving as favorite.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Replace the live cart with the saved favorite cart.
///
/// # Errors
///
/// Returns [`StoreError::NoSnapshot`] when nothing is saved.
pub fn apply(store: &mut CartStore<impl KeyValueStore>) -> Result<(), StoreError> {
    match store.apply_snapshot() {
        Ok(cart) => {
            println!("Favorite cart applied. Items in cart: {}", cart.total_quantity());
            Ok(())
        }
        Err(e @ StoreError::NoSnapshot) => {
            println!("No favorite cart found. Save one first.");
            Err(e)
        }
        Err(e) => Err(e),
    }
}
