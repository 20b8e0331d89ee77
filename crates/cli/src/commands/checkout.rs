//! Totals and the simulated checkout.

use parts_cart_core::{Catalog, Totals};
use parts_cart_store::{CartStore, KeyValueStore, StoreError};

/// Print the priced order summary.
pub fn totals(store: &mut CartStore<impl KeyValueStore>, catalog: &impl Catalog) {
    print_totals(&store.totals(catalog), catalog);
}

/// Place the order: price the cart, clear it, print the confirmation.
///
/// # Errors
///
/// Returns [`StoreError::EmptyCart`] when there is nothing to buy.
pub fn place_order(
    store: &mut CartStore<impl KeyValueStore>,
    catalog: &impl Catalog,
    name: &str,
) -> Result<(), StoreError> {
    let confirmation = match store.checkout(catalog) {
        Ok(confirmation) => confirmation,
        Err(e @ StoreError::EmptyCart) => {
            println!("Your cart is empty. Add items before checking out.");
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    print_totals(&confirmation.totals, catalog);
    println!();
    println!("Thank you {name} for your order!");
    println!(
        "Your order will be delivered on {}.",
        confirmation.delivery_date.format("%A, %B %-d, %Y")
    );
    Ok(())
}

fn print_totals(totals: &Totals, catalog: &impl Catalog) {
    for line in &totals.lines {
        let name = catalog
            .get(line.product_id)
            .map_or("(unknown)", |product| product.name.as_str());
        println!(
            "  {} x {} @ {} = {}",
            line.quantity, name, line.unit_price, line.line_total
        );
    }
    println!("Subtotal: {}", totals.subtotal);
    println!("Shipping: {}", totals.shipping);
    println!("Total:    {}", totals.grand_total);
}
