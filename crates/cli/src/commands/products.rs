//! Product listing, grouped by storefront section.

use parts_cart_core::{Catalog, Category};
use parts_cart_store::{CartStore, KeyValueStore};

/// Print the catalog section by section, marking favorited products.
pub fn list(store: &mut CartStore<impl KeyValueStore>, catalog: &impl Catalog) {
    let favorites = store.state().favorites.clone();

    for category in Category::ALL {
        let products: Vec<_> = catalog
            .list()
            .iter()
            .filter(|product| product.category == category)
            .collect();
        if products.is_empty() {
            continue;
        }

        println!("{}", category.title());
        for product in products {
            let heart = if favorites.contains(product.id) {
                " \u{2665}"
            } else {
                ""
            };
            println!("  [{}] {} {}{heart}", product.id, product.name, product.price);
        }
        println!();
    }
}
