//! Integration tests for the PC-parts cart.
//!
//! Exercises the cart store end to end through the file-backed key-value
//! store: the same path the CLI uses, with a fresh temp directory per test
//! standing in for a browser origin's local storage.
//!
//! # Test Categories
//!
//! - `cart_flow` - Mutation sequences and totals through the store API
//! - `persistence` - Reload round-trips and corrupted-state recovery
//! - `snapshots` - Favorite-cart save/apply and favorites persistence

use std::path::PathBuf;

use tempfile::TempDir;

use parts_cart_store::{CartStore, FileStore, JsonCatalog};

/// A five-product catalog covering every storefront section.
pub const SAMPLE_CATALOG: &str = r#"[
    {"id": 1, "name": "Ryzen 7 7800X3D", "price": 349.99,
     "image": "images/ryzen-7800x3d.png", "category": "processors"},
    {"id": 2, "name": "GeForce RTX 4070 Super", "price": 599.99,
     "image": "images/rtx-4070-super.png", "category": "graphics"},
    {"id": 3, "name": "MSI B650 Tomahawk", "price": 219.99,
     "image": "images/b650-tomahawk.png", "category": "motherboards"},
    {"id": 4, "name": "Corsair Vengeance 32GB DDR5", "price": 104.99,
     "image": "images/vengeance-32gb.png", "category": "memory"},
    {"id": 5, "name": "Samsung 990 Pro 2TB", "price": 169.99,
     "image": "images/990-pro-2tb.png", "category": "storage"}
]"#;

/// Parse the sample catalog.
///
/// # Panics
///
/// Panics if the embedded JSON is invalid (a test-fixture bug).
#[must_use]
pub fn sample_catalog() -> JsonCatalog {
    JsonCatalog::from_json(SAMPLE_CATALOG).expect("sample catalog parses")
}

/// A cart store persisted into its own temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; dropping
/// it deletes the backing file.
pub struct StoreFixture {
    dir: TempDir,
}

impl StoreFixture {
    /// Create a fixture with an empty backing directory.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Path of the backing state file.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("pc-cart-data.json")
    }

    /// Open a store over the backing file.
    ///
    /// Call again after dropping a previous store to simulate a reload (or
    /// a second tab opening the same origin).
    ///
    /// # Panics
    ///
    /// Panics if the backing file exists but cannot be read.
    #[must_use]
    pub fn open(&self) -> CartStore<FileStore> {
        CartStore::new(FileStore::open(self.data_file()).expect("open file store"))
    }
}

impl Default for StoreFixture {
    fn default() -> Self {
        Self::new()
    }
}
