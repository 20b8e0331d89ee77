//! Favorite-cart snapshot and favorites behavior across reloads.

use parts_cart_core::ProductId;
use parts_cart_integration_tests::StoreFixture;
use parts_cart_store::StoreError;

const CPU: ProductId = ProductId::new(1);
const GPU: ProductId = ProductId::new(2);
const RAM: ProductId = ProductId::new(4);

#[test]
fn snapshot_survives_reload_and_replaces_the_cart() {
    let fixture = StoreFixture::new();
    let mut store = fixture.open();

    store.add_item(GPU);
    store.save_snapshot().expect("save snapshot");
    store.clear();
    store.add_item(CPU);
    store.add_item(CPU);
    drop(store);

    let mut reloaded = fixture.open();
    let cart = reloaded.apply_snapshot().expect("apply snapshot");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(GPU).map(|item| item.quantity), Some(1));
    assert!(cart.get(CPU).is_none());
}

#[test]
fn empty_cart_save_fails_and_keeps_the_old_snapshot() {
    let fixture = StoreFixture::new();
    let mut store = fixture.open();

    store.add_item(RAM);
    store.save_snapshot().expect("save snapshot");
    store.clear();

    assert_eq!(store.save_snapshot(), Err(StoreError::EmptyCart));
    let cart = store.apply_snapshot().expect("old snapshot still applies");
    assert_eq!(cart.get(RAM).map(|item| item.quantity), Some(1));
}

#[test]
fn apply_without_snapshot_fails() {
    let fixture = StoreFixture::new();
    let mut store = fixture.open();
    store.add_item(CPU);
    assert_eq!(store.apply_snapshot().err(), Some(StoreError::NoSnapshot));
    // the live cart is untouched by the failed apply
    assert_eq!(store.state().cart.get(CPU).map(|item| item.quantity), Some(1));
}

#[test]
fn favorites_toggle_persists_and_double_toggle_restores() {
    let fixture = StoreFixture::new();
    let mut store = fixture.open();

    store.toggle_favorite(GPU);
    store.toggle_favorite(RAM);
    drop(store);

    let mut reloaded = fixture.open();
    assert!(reloaded.state().favorites.contains(GPU));
    let before = reloaded.state().favorites.clone();

    reloaded.toggle_favorite(CPU);
    reloaded.toggle_favorite(CPU);
    assert_eq!(reloaded.state().favorites, before);
}

#[test]
fn snapshot_is_a_copy_not_a_reference() {
    let fixture = StoreFixture::new();
    let mut store = fixture.open();

    store.add_item(CPU);
    store.save_snapshot().expect("save snapshot");

    // mutating the live cart after saving must not change the snapshot
    store.add_item(CPU);
    store.add_item(GPU);

    let cart = store.apply_snapshot().expect("apply snapshot");
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(CPU).map(|item| item.quantity), Some(1));
}
