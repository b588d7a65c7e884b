use anyhow::{Context, Result};
use keyshop_core::{
    AddStatus, CART_STORAGE_KEY, CartPersistence, CartStore, Catalog, GameDetails, LineItem,
    LoadReport, MemoryStorage, PassDetails, format_price,
};

fn catalog_pass(catalog: &Catalog, game: &str, title: &str) -> Result<(PassDetails, GameDetails)> {
    let game = catalog
        .find_game(game)
        .with_context(|| format!("missing game {game}"))?;
    let pass = catalog
        .find_pass(&game.value, title)
        .with_context(|| format!("missing pass {title}"))?;
    Ok((pass.details(), game.details()))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn repeat_add_merges_into_one_line() -> Result<()> {
    let catalog = Catalog::builtin();
    let (pass, game) = catalog_pass(&catalog, "minecraft", "Standard Pass")?;
    let mut store = CartStore::init(MemoryStorage::new());

    assert_eq!(store.add_to_cart(&pass, &game, &catalog), AddStatus::Added);
    assert_eq!(store.add_to_cart(&pass, &game, &catalog), AddStatus::Added);

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].quantity, 2);
    assert_eq!(store.cart_item_count(), 2);
    assert_close(store.cart_total(), 19.98);
    assert_eq!(format_price(store.cart_total()), "$19.98");
    Ok(())
}

#[test]
fn repeated_adds_scale_total_and_survive_reload() -> Result<()> {
    let catalog = Catalog::builtin();
    let (pass, game) = catalog_pass(&catalog, "minecraft", "Standard Pass")?;
    for n in 1..=5_u32 {
        let storage = MemoryStorage::new();
        let mut store = CartStore::init(storage.clone());
        for _ in 0..n {
            store.add_to_cart(&pass, &game, &catalog);
        }
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, n);
        assert_eq!(store.cart_item_count(), u64::from(n));
        assert_close(store.cart_total(), 9.99 * f64::from(n));

        let reloaded = CartStore::init(storage);
        assert_eq!(reloaded.items(), store.items());
    }
    Ok(())
}

#[test]
fn unreadable_price_contributes_nothing() -> Result<()> {
    let catalog = Catalog::builtin();
    let (_, game) = catalog_pass(&catalog, "fortnite", "Battle Pass")?;
    let pass = PassDetails {
        id: None,
        title: "Mystery Pass".to_string(),
        price: "$invalidPrice".to_string(),
        pass_type: "mystery".to_string(),
    };
    let mut store = CartStore::init(MemoryStorage::new());
    store.add_to_cart(&pass, &game, &catalog);

    let item = store
        .find_item("fortnite-mystery")
        .context("line should exist")?;
    assert_close(item.price_numeric, 0.0);
    assert_eq!(item.pass_price, "$invalidPrice");
    assert_close(store.cart_total(), 0.0);
    assert_eq!(store.cart_item_count(), 1);
    Ok(())
}

#[test]
fn zero_quantity_removes_exactly_one_line() -> Result<()> {
    let catalog = Catalog::builtin();
    let mut store = CartStore::init(MemoryStorage::new());
    for (game, title) in [
        ("minecraft", "Standard Pass"),
        ("minecraft", "Deluxe Pass"),
        ("cod", "BlackCell Pass"),
    ] {
        let (pass, details) = catalog_pass(&catalog, game, title)?;
        store.add_to_cart(&pass, &details, &catalog);
    }

    store.update_quantity("minecraft-deluxe", 0);

    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["minecraft-standard", "cod-premium"]);
    Ok(())
}

#[test]
fn corrupt_slot_starts_empty_and_is_cleared() {
    let storage = MemoryStorage::with_item(CART_STORAGE_KEY, "not json at all");
    let (store, report) = CartStore::init_with(CartPersistence::new(storage.clone()));
    assert!(store.is_empty());
    assert_eq!(report, LoadReport::NotJson);
    assert!(!storage.contains(CART_STORAGE_KEY));
}

#[test]
fn session_round_trip_preserves_lines() -> Result<()> {
    let catalog = Catalog::builtin();
    let storage = MemoryStorage::new();
    let expected: Vec<LineItem> = {
        let mut store = CartStore::init(storage.clone());
        let (standard, mc) = catalog_pass(&catalog, "minecraft", "Standard Pass")?;
        let (battle, fortnite) = catalog_pass(&catalog, "fortnite", "Battle Pass")?;
        store.add_to_cart(&battle, &fortnite, &catalog);
        store.add_to_cart(&standard, &mc, &catalog);
        store.update_quantity("fortnite-standard", 4);
        store.items().to_vec()
    };

    let raw = storage
        .raw(CART_STORAGE_KEY)
        .context("cart slot should be written")?;
    let stored: Vec<LineItem> = serde_json::from_str(&raw)?;
    assert_eq!(stored, expected);

    let restored = CartStore::init(storage);
    assert_eq!(restored.items(), expected.as_slice());
    assert_eq!(restored.cart_item_count(), 5);
    Ok(())
}

#[test]
fn removing_unknown_id_is_a_no_op() -> Result<()> {
    let catalog = Catalog::builtin();
    let (pass, game) = catalog_pass(&catalog, "cod", "BlackCell Pass")?;
    let mut store = CartStore::init(MemoryStorage::new());
    store.add_to_cart(&pass, &game, &catalog);
    store.remove_from_cart("does-not-exist");
    store.update_quantity("does-not-exist", 3);
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.cart_item_count(), 1);
    Ok(())
}
