#![cfg(target_arch = "wasm32")]

use keyshop_core::{CartPersistence, CartStorage, CartStore, Catalog};
use keyshop_web::storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const TEST_KEY: &str = "keyshopBrowserStorageTest";

#[wasm_bindgen_test]
fn browser_storage_round_trips_raw_values() {
    let storage = BrowserStorage;
    storage.set_item(TEST_KEY, "[]").unwrap();
    assert_eq!(storage.get_item(TEST_KEY).unwrap().as_deref(), Some("[]"));
    storage.remove_item(TEST_KEY).unwrap();
    assert!(storage.get_item(TEST_KEY).unwrap().is_none());
}

#[wasm_bindgen_test]
fn cart_survives_a_reload() {
    let catalog = Catalog::builtin();
    let game = catalog.find_game("fortnite").unwrap();
    let pass = &game.passes[0];
    {
        let (mut store, _) =
            CartStore::init_with(CartPersistence::with_key(BrowserStorage, TEST_KEY));
        store.clear_cart();
        store.add_to_cart(&pass.details(), &game.details(), &catalog);
    }
    let (store, _) = CartStore::init_with(CartPersistence::with_key(BrowserStorage, TEST_KEY));
    assert_eq!(store.cart_item_count(), 1);
    assert!(store.contains_pass("fortnite", &pass.title));
    BrowserStorage.remove_item(TEST_KEY).unwrap();
}
