//! Cart state persisted to a storage file survives reopening, the way the
//! CLI sees it between invocations.

use game_store_core::CurrencyCode;
use game_store_storefront::cart::CartStore;
use game_store_storefront::catalog::Catalog;
use game_store_storefront::storage::{CART_KEY, CURRENCY_KEY, FileStorage, LocalStorage};
use tempfile::tempdir;

#[test]
fn test_cart_and_currency_rehydrate_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let catalog = Catalog::builtin();

    {
        let mut store = CartStore::open(FileStorage::open(&path).unwrap());
        store.add_to_cart(catalog.find("ps5console").unwrap()).unwrap();
        store.add_to_cart(catalog.find("ps5console").unwrap()).unwrap();
        store.add_to_cart(catalog.find("civ7").unwrap()).unwrap();
        store.set_currency(CurrencyCode::GBP).unwrap();
    }

    let store = CartStore::open(FileStorage::open(&path).unwrap());
    let ids: Vec<_> = store.lines().iter().map(|l| l.product.id.as_str()).collect();
    assert_eq!(ids, ["ps5console", "civ7"]);
    assert_eq!(store.lines()[0].quantity, 2);
    assert_eq!(store.currency(), CurrencyCode::GBP);
}

#[test]
fn test_malformed_values_fall_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut storage = FileStorage::open(&path).unwrap();
        storage.set_item(CART_KEY, "{not a cart").unwrap();
        storage.set_item(CURRENCY_KEY, "JPY").unwrap();
    }

    let store = CartStore::open(FileStorage::open(&path).unwrap());
    assert!(store.lines().is_empty());
    assert_eq!(store.currency(), CurrencyCode::USD);
    assert_eq!(store.formatted_total(), "$0.00");
}

#[test]
fn test_stored_cart_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let catalog = Catalog::builtin();

    let mut store = CartStore::open(FileStorage::open(&path).unwrap());
    store.add_to_cart(catalog.find("civ7").unwrap()).unwrap();
    let storage = store.into_storage();

    let raw = storage.get_item(CART_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["quantity"], 1);
    assert_eq!(value[0]["product"]["id"], "civ7");
    assert_eq!(value[0]["product"]["name"], "Sid Meier's Civilization VII");
}
