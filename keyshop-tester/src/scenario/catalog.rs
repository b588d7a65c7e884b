use anyhow::{Context, Result, ensure};
use keyshop_core::{
    CART_STORAGE_KEY, CartPersistence, CartStore, Catalog, GameDetails, LoadReport,
    MemoryStorage, PassDetails, format_price,
};

use super::CartScenario;
use crate::storage::FileStorage;
use crate::util::temp_path;

pub fn catalog_scenarios() -> Vec<CartScenario> {
    vec![
        CartScenario::new(
            "smoke",
            "Smoke",
            "Add one pass and check count, total and the stored slot",
            smoke_expectation,
        ),
        CartScenario::new(
            "repeat-add",
            "Repeat Add Merges Lines",
            "Adding the same pass twice bumps quantity on a single line",
            repeat_add_expectation,
        ),
        CartScenario::new(
            "malformed-price",
            "Malformed Price",
            "An unparseable price is kept for display but contributes nothing",
            malformed_price_expectation,
        ),
        CartScenario::new(
            "quantity-updates",
            "Quantity Updates",
            "Quantity edits, removal at zero and unknown ids",
            quantity_updates_expectation,
        ),
        CartScenario::new(
            "persistence-roundtrip",
            "Persistence Round Trip",
            "A second store over the same slot sees the same lines",
            persistence_roundtrip_expectation,
        ),
        CartScenario::new(
            "corrupt-storage",
            "Corrupt Storage",
            "Unreadable slot data loads as an empty cart and is discarded",
            corrupt_storage_expectation,
        ),
        CartScenario::new(
            "clear-cart",
            "Clear Cart",
            "Clearing empties the slot but keeps UI signals",
            clear_cart_expectation,
        ),
        CartScenario::new(
            "file-roundtrip",
            "File Storage Round Trip",
            "Cart survives a reload through a JSON file on disk",
            file_roundtrip_expectation,
        ),
    ]
}

fn catalog_pass(catalog: &Catalog, game: &str, title: &str) -> Result<(PassDetails, GameDetails)> {
    let game = catalog
        .find_game(game)
        .with_context(|| format!("catalog has no game {game}"))?;
    let pass = catalog
        .find_pass(&game.value, title)
        .with_context(|| format!("{} has no pass {title}", game.value))?;
    Ok((pass.details(), game.details()))
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

fn smoke_expectation(catalog: &Catalog) -> Result<()> {
    let storage = MemoryStorage::new();
    let mut store = CartStore::init(storage.clone());
    ensure!(store.is_empty(), "fresh store should be empty");

    let (pass, game) = catalog_pass(catalog, "minecraft", "Standard Pass")?;
    store.add_to_cart(&pass, &game, catalog);

    ensure!(store.cart_item_count() == 1, "count {}", store.cart_item_count());
    ensure!(
        format_price(store.cart_total()) == "$9.99",
        "total {}",
        format_price(store.cart_total())
    );
    ensure!(
        store.recently_added_item_id() == Some("minecraft-standard"),
        "recently added {:?}",
        store.recently_added_item_id()
    );
    ensure!(storage.contains(CART_STORAGE_KEY), "slot was not written");
    Ok(())
}

fn repeat_add_expectation(catalog: &Catalog) -> Result<()> {
    let (pass, game) = catalog_pass(catalog, "minecraft", "Standard Pass")?;
    let mut store = CartStore::init(MemoryStorage::new());
    store.add_to_cart(&pass, &game, catalog);
    store.add_to_cart(&pass, &game, catalog);

    ensure!(store.items().len() == 1, "lines {}", store.items().len());
    ensure!(store.items()[0].quantity == 2, "quantity {}", store.items()[0].quantity);
    ensure!(store.cart_item_count() == 2, "count {}", store.cart_item_count());
    ensure!(close(store.cart_total(), 19.98), "total {}", store.cart_total());
    ensure!(store.trigger_cart_animation() == 2, "animation trigger not bumped twice");
    Ok(())
}

fn malformed_price_expectation(catalog: &Catalog) -> Result<()> {
    let (_, game) = catalog_pass(catalog, "fortnite", "Battle Pass")?;
    let pass = PassDetails {
        id: None,
        title: "Mystery Pass".to_string(),
        price: "$invalidPrice".to_string(),
        pass_type: "mystery".to_string(),
    };
    let mut store = CartStore::init(MemoryStorage::new());
    store.add_to_cart(&pass, &game, catalog);

    let item = store
        .find_item("fortnite-mystery")
        .context("mystery line missing")?;
    ensure!(close(item.price_numeric, 0.0), "parsed {}", item.price_numeric);
    ensure!(item.pass_price == "$invalidPrice", "display price rewritten");
    ensure!(close(store.cart_total(), 0.0), "total {}", store.cart_total());
    ensure!(store.cart_item_count() == 1, "count {}", store.cart_item_count());
    Ok(())
}

fn quantity_updates_expectation(catalog: &Catalog) -> Result<()> {
    let (standard, minecraft) = catalog_pass(catalog, "minecraft", "Standard Pass")?;
    let (battle, fortnite) = catalog_pass(catalog, "fortnite", "Battle Pass")?;
    let storage = MemoryStorage::new();
    let mut store = CartStore::init(storage.clone());
    store.add_to_cart(&standard, &minecraft, catalog);
    store.add_to_cart(&battle, &fortnite, catalog);

    store.update_quantity("minecraft-standard", 5);
    ensure!(store.cart_item_count() == 6, "count {}", store.cart_item_count());

    let before = storage.raw(CART_STORAGE_KEY);
    store.update_quantity("no-such-line", 3);
    ensure!(storage.raw(CART_STORAGE_KEY) == before, "unknown id rewrote the slot");
    ensure!(store.items().len() == 2, "unknown id changed lines");

    store.update_quantity("minecraft-standard", 0);
    ensure!(store.items().len() == 1, "zero quantity should remove one line");
    ensure!(
        store.find_item("fortnite-standard").is_some(),
        "wrong line removed"
    );

    store.update_quantity("fortnite-standard", -4);
    ensure!(store.is_empty(), "negative quantity should remove the line");
    Ok(())
}

fn persistence_roundtrip_expectation(catalog: &Catalog) -> Result<()> {
    let storage = MemoryStorage::new();
    let mut store = CartStore::init(storage.clone());
    for (game, title) in [
        ("minecraft", "Deluxe Pass"),
        ("cod", "BlackCell Pass"),
        ("cod", "BlackCell Pass"),
    ] {
        let (pass, game) = catalog_pass(catalog, game, title)?;
        store.add_to_cart(&pass, &game, catalog);
    }

    let (reloaded, report) = CartStore::init_with(CartPersistence::new(storage));
    ensure!(
        report == LoadReport::Loaded { count: 2 },
        "unexpected load report {report:?}"
    );
    ensure!(reloaded.items() == store.items(), "reloaded lines differ");
    ensure!(
        reloaded.recently_added_item_id().is_none(),
        "signals should not be persisted"
    );
    Ok(())
}

fn corrupt_storage_expectation(_catalog: &Catalog) -> Result<()> {
    for (raw, expected) in [
        ("{not json", LoadReport::NotJson),
        ("{\"items\": []}", LoadReport::NotArray),
    ] {
        let storage = MemoryStorage::with_item(CART_STORAGE_KEY, raw);
        let (store, report) = CartStore::init_with(CartPersistence::new(storage.clone()));
        ensure!(store.is_empty(), "corrupt slot produced lines");
        ensure!(report == expected, "expected {expected:?}, got {report:?}");
        ensure!(
            !storage.contains(CART_STORAGE_KEY),
            "corrupt slot was not discarded"
        );
    }
    Ok(())
}

fn clear_cart_expectation(catalog: &Catalog) -> Result<()> {
    let (pass, game) = catalog_pass(catalog, "cod", "BlackCell Pass")?;
    let storage = MemoryStorage::new();
    let mut store = CartStore::init(storage.clone());
    store.add_to_cart(&pass, &game, catalog);
    store.clear_cart();

    ensure!(store.is_empty(), "cart not emptied");
    ensure!(
        storage.raw(CART_STORAGE_KEY).as_deref() == Some("[]"),
        "slot should hold an empty array"
    );
    ensure!(
        store.recently_added_item_id() == Some("cod-premium"),
        "clear dropped the recently added signal"
    );
    ensure!(store.trigger_cart_animation() == 1, "clear touched the trigger");
    Ok(())
}

fn file_roundtrip_expectation(catalog: &Catalog) -> Result<()> {
    let storage = FileStorage::new(temp_path("scenario"));
    let result = file_roundtrip(&storage, catalog);
    let _ = std::fs::remove_dir_all(storage.dir());
    result
}

fn file_roundtrip(storage: &FileStorage, catalog: &Catalog) -> Result<()> {
    let (pass, game) = catalog_pass(catalog, "fortnite", "Battle Pass")?;
    let mut store = CartStore::init(storage.clone());
    store.add_to_cart(&pass, &game, catalog);
    store.update_quantity("fortnite-standard", 3);

    ensure!(
        storage.slot_path(CART_STORAGE_KEY).exists(),
        "slot file was not written"
    );
    let reloaded = CartStore::init(storage.clone());
    ensure!(reloaded.items() == store.items(), "file reload differs");
    ensure!(
        format_price(reloaded.cart_total()) == "$23.97",
        "total {}",
        format_price(reloaded.cart_total())
    );
    Ok(())
}
