//! The read-only product catalog interface.

use crate::types::{Product, ProductId};

/// Read-only lookup from product id to product metadata.
///
/// The cart never validates ids against the catalog; unknown ids are simply
/// not found, and totals computation skips them.
pub trait Catalog {
    /// Look up a product by id.
    fn get(&self, id: ProductId) -> Option<&Product>;

    /// All products in catalog order.
    fn list(&self) -> &[Product];
}

impl Catalog for [Product] {
    fn get(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|product| product.id == id)
    }

    fn list(&self) -> &[Product] {
        self
    }
}

impl Catalog for Vec<Product> {
    fn get(&self, id: ProductId) -> Option<&Product> {
        <[Product] as Catalog>::get(self, id)
    }

    fn list(&self) -> &[Product] {
        self
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn get(&self, id: ProductId) -> Option<&Product> {
        (**self).get(id)
    }

    fn list(&self) -> &[Product] {
        (**self).list()
    }
}
