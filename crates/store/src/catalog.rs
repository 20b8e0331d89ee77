//! JSON product catalog loader.
//!
//! Parses the `products.json` shape the storefront serves: an array of
//! products with decimal-dollar prices and lowercase category names.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use parts_cart_core::{Catalog, Product, ProductId};

/// Errors loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog contents are not valid product JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable catalog backed by a parsed product list.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl JsonCatalog {
    /// Build a catalog from parsed products.
    ///
    /// When ids collide, the first occurrence wins lookups; the duplicate
    /// still appears in listings.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_id.entry(product.id).or_insert(index);
        }
        Self { products, by_id }
    }

    /// Load a catalog from a `products.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when the JSON is malformed.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Ok(Self::new(products))
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for JsonCatalog {
    fn get(&self, id: ProductId) -> Option<&Product> {
        self.by_id.get(&id).and_then(|&index| self.products.as_slice().get(index))
    }

    fn list(&self) -> &[Product] {
        &self.products
    }
}
