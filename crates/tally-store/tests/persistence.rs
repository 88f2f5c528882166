//! End-to-end persistence tests against real files in a temp directory.

use std::fs;
use std::path::Path;

use tally_commerce::{Catalog, CommerceError, Currency, Money, VariantKey};
use tally_store::{CartLedger, CatalogStore, RemoveOutcome, StoreError};
use tempfile::tempdir;

fn key(k: i64) -> VariantKey {
    VariantKey::new(k).expect("valid key")
}

fn rs(major: i64) -> Money {
    Money::from_major(major, Currency::INR)
}

fn honey_store(path: &Path) -> CatalogStore {
    let mut store = CatalogStore::open(path, Currency::INR).expect("open catalog");
    for name in store
        .catalog()
        .products()
        .map(|p| p.name.to_string())
        .collect::<Vec<_>>()
    {
        store.remove_product(&name).expect("clear defaults");
    }
    store.add_product("Honey", key(1000), rs(736)).expect("add");
    store.add_product("Honey", key(500), rs(428)).expect("add");
    store
}

#[test]
fn first_run_uses_builtin_catalog_and_empty_cart() {
    let dir = tempdir().expect("tempdir");
    let catalog_path = dir.path().join("products.json");
    let cart_path = dir.path().join("cart.json");

    let store = CatalogStore::open(&catalog_path, Currency::INR).expect("open catalog");
    let ledger = CartLedger::open(&cart_path).expect("open cart");

    assert_eq!(store.catalog(), &Catalog::builtin(Currency::INR));
    assert!(ledger.cart().is_empty());
    assert!(!ledger.cart().discount);
    assert!(!catalog_path.exists());
    assert!(!cart_path.exists());
}

#[test]
fn add_then_remove_product_is_absent_after_reload() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("products.json");

    let mut store = CatalogStore::open(&path, Currency::INR).expect("open");
    store.add_product("Moringa Powder", key(100), rs(150)).expect("add");
    assert!(CatalogStore::load(&path, Currency::INR)
        .expect("reload")
        .get("Moringa Powder")
        .is_some());

    let removed = store.remove_product("Moringa Powder").expect("remove");
    assert!(removed.is_some());
    let reloaded = CatalogStore::load(&path, Currency::INR).expect("reload");
    assert!(reloaded.get("Moringa Powder").is_none());
}

#[test]
fn repeated_add_keeps_one_entry_with_latest_price() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("products.json");

    let mut store = CatalogStore::open(&path, Currency::INR).expect("open");
    store.add_product("Honey", key(1000), rs(736)).expect("add");
    store.add_product("Honey", key(1000), rs(750)).expect("add again");

    let reloaded = CatalogStore::load(&path, Currency::INR).expect("reload");
    let honey = reloaded.get("Honey").expect("honey");
    assert_eq!(honey.variants().filter(|(k, _)| *k == key(1000)).count(), 1);
    assert_eq!(honey.price_of(key(1000)), Some(rs(750)));
}

#[test]
fn invalid_product_leaves_catalog_and_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    let mut store = honey_store(&path);
    let before = fs::read_to_string(&path).expect("read");

    let err = store.add_product("  ", key(1000), rs(10)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Commerce(CommerceError::InvalidProductName)
    ));
    let err = store.add_product("Ghee", key(500), rs(0)).unwrap_err();
    assert!(matches!(err, StoreError::Commerce(CommerceError::InvalidPrice(_))));

    assert_eq!(fs::read_to_string(&path).expect("read"), before);
    assert!(store.catalog().get("Ghee").is_none());
}

#[test]
fn catalog_and_cart_round_trip() {
    let dir = tempdir().expect("tempdir");
    let catalog_path = dir.path().join("products.json");
    let cart_path = dir.path().join("cart.json");

    let mut store = honey_store(&catalog_path);
    store
        .add_product("Ghee", key(200), Money::new(59_450, Currency::INR))
        .expect("add");
    let mut ledger = CartLedger::open(&cart_path).expect("open cart");
    ledger
        .add_to_cart(store.catalog(), "Ghee", key(200))
        .expect("add");
    ledger
        .add_to_cart(store.catalog(), "Honey", key(500))
        .expect("add");
    ledger.set_discount(true).expect("discount");

    assert_eq!(
        &CatalogStore::load(&catalog_path, Currency::INR).expect("reload"),
        store.catalog()
    );
    assert_eq!(&CartLedger::load(&cart_path).expect("reload"), ledger.cart());
}

#[test]
fn honey_scenario_bill() {
    let dir = tempdir().expect("tempdir");
    let store = honey_store(&dir.path().join("products.json"));
    let mut ledger = CartLedger::open(dir.path().join("cart.json")).expect("open cart");

    ledger.add_to_cart(store.catalog(), "Honey", key(1000)).expect("add");
    ledger.add_to_cart(store.catalog(), "Honey", key(1000)).expect("add");
    ledger.add_to_cart(store.catalog(), "Honey", key(500)).expect("add");

    let bill = ledger.bill(store.catalog()).expect("bill");
    assert_eq!(bill.subtotal, rs(1900));
    assert_eq!(bill.discount, rs(0));
    assert_eq!(bill.total, rs(1900));
    assert_eq!(bill.lines[0].quantity, 2);
    assert_eq!(bill.lines[0].line_total, rs(1472));
    assert_eq!(bill.lines[1].quantity, 1);
    assert_eq!(bill.lines[1].line_total, rs(428));

    ledger.set_discount(true).expect("discount");
    let bill = ledger.bill(store.catalog()).expect("bill");
    assert_eq!(bill.discount.display_amount(), "190.00");
    assert_eq!(bill.total.display_amount(), "1710.00");
}

#[test]
fn adding_unknown_item_to_cart_fails_without_writing() {
    let dir = tempdir().expect("tempdir");
    let cart_path = dir.path().join("cart.json");
    let store = honey_store(&dir.path().join("products.json"));
    let mut ledger = CartLedger::open(&cart_path).expect("open cart");

    let err = ledger
        .add_to_cart(store.catalog(), "Honey", key(250))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Commerce(CommerceError::VariantNotFound { .. })
    ));
    assert!(ledger.cart().is_empty());
    assert!(!cart_path.exists());
}

#[test]
fn reset_persists_empty_cart() {
    let dir = tempdir().expect("tempdir");
    let cart_path = dir.path().join("cart.json");
    let store = honey_store(&dir.path().join("products.json"));
    let mut ledger = CartLedger::open(&cart_path).expect("open cart");
    ledger.add_to_cart(store.catalog(), "Honey", key(1000)).expect("add");
    ledger.set_discount(true).expect("discount");

    ledger.reset().expect("reset");

    assert!(ledger.cart().is_empty());
    assert!(!ledger.cart().discount);
    let on_disk = CartLedger::load(&cart_path).expect("reload");
    assert!(on_disk.is_empty());
    assert!(!on_disk.discount);
}

#[test]
fn removing_absent_line_is_noop() {
    let dir = tempdir().expect("tempdir");
    let cart_path = dir.path().join("cart.json");
    let store = honey_store(&dir.path().join("products.json"));
    let mut ledger = CartLedger::open(&cart_path).expect("open cart");
    ledger.add_to_cart(store.catalog(), "Honey", key(1000)).expect("add");
    let before = ledger.cart().clone();
    let file_before = fs::read_to_string(&cart_path).expect("read");

    let outcome = ledger.remove_from_cart("Honey", key(500)).expect("remove");
    assert_eq!(outcome, RemoveOutcome::NotInCart);
    assert_eq!(ledger.cart(), &before);
    assert_eq!(fs::read_to_string(&cart_path).expect("read"), file_before);

    let outcome = ledger.remove_from_cart("Honey", key(1000)).expect("remove");
    assert!(matches!(outcome, RemoveOutcome::Removed(_)));
    assert!(CartLedger::load(&cart_path).expect("reload").is_empty());
}

#[test]
fn removed_product_makes_bill_fail_with_stale_line() {
    let dir = tempdir().expect("tempdir");
    let mut store = honey_store(&dir.path().join("products.json"));
    let mut ledger = CartLedger::open(dir.path().join("cart.json")).expect("open cart");
    ledger.add_to_cart(store.catalog(), "Honey", key(500)).expect("add");

    store.remove_product("Honey").expect("remove");

    assert_eq!(
        ledger.bill(store.catalog()),
        Err(CommerceError::StaleCartLine {
            product: "Honey".into(),
            variant: 500
        })
    );
    assert_eq!(ledger.cart().stale_lines(store.catalog()).len(), 1);
}

#[test]
fn legacy_files_are_migrated_on_open() {
    let dir = tempdir().expect("tempdir");
    let catalog_path = dir.path().join("products.json");
    let cart_path = dir.path().join("cart.json");
    fs::write(
        &catalog_path,
        r#"{"Honey 1 kg": 736, "Honey 500 g": 428, "Brown Sugar 1 kg": 225}"#,
    )
    .expect("write");
    fs::write(&cart_path, r#"["Honey 1 kg", "Honey 1 kg", "Honey 500 g"]"#).expect("write");

    let store = CatalogStore::open(&catalog_path, Currency::INR).expect("open catalog");
    let ledger = CartLedger::open(&cart_path).expect("open cart");

    let bill = ledger.bill(store.catalog()).expect("legacy cart resolves");
    assert_eq!(bill.subtotal, rs(1900));

    let catalog_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&catalog_path).expect("read")).expect("json");
    assert_eq!(catalog_json["Honey"]["1000"], 736);
    assert_eq!(catalog_json["Brown Sugar"]["1000"], 225);

    let cart_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cart_path).expect("read")).expect("json");
    assert_eq!(cart_json["lines"][2][0], "Honey");
    assert_eq!(cart_json["lines"][2][1], 500);
    assert_eq!(cart_json["discount"], false);
}

#[test]
fn conflicting_legacy_prices_leave_file_untouched() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    let original = r#"{"Honey 1 kg": 700, "Honey 1000 g": 736}"#;
    fs::write(&path, original).expect("write");

    let err = CatalogStore::open(&path, Currency::INR).unwrap_err();
    assert!(matches!(err, StoreError::Invalid { .. }));
    assert_eq!(fs::read_to_string(&path).expect("read"), original);
}

#[test]
fn fractional_prices_keep_two_decimals_in_every_currency() {
    for currency in [Currency::INR, Currency::USD, Currency::EUR, Currency::GBP] {
        let dir = tempdir().expect("tempdir");
        let catalog_path = dir.path().join("products.json");
        let cart_path = dir.path().join("cart.json");
        fs::write(&catalog_path, r#"{"Candy": {"100": 15}, "Tea": {"250": 428.5}}"#)
            .expect("write");

        let mut store = CatalogStore::open(&catalog_path, currency).expect("open catalog");
        assert_eq!(
            store.catalog().price_of("Tea", key(250)).expect("tea"),
            Money::new(42850, currency)
        );

        // An unrelated mutation rewrites the file without rounding Tea.
        store
            .add_product("Ghee", key(200), Money::from_major(594, currency))
            .expect("add");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&catalog_path).expect("read"))
                .expect("json");
        assert_eq!(json["Tea"]["250"], 428.5);

        let mut ledger = CartLedger::open(&cart_path).expect("open cart");
        ledger.add_to_cart(store.catalog(), "Candy", key(100)).expect("add");
        ledger.set_discount(true).expect("discount");
        let bill = ledger.bill(store.catalog()).expect("bill");
        assert_eq!(bill.subtotal, Money::new(1500, currency));
        assert_eq!(bill.discount, Money::new(150, currency));
        assert_eq!(bill.total, Money::new(1350, currency));
    }
}

#[test]
fn malformed_catalog_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("products.json");
    fs::write(&path, "[1, 2, 3]").expect("write");

    let err = CatalogStore::open(&path, Currency::INR).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn failed_save_keeps_last_saved_state() {
    let dir = tempdir().expect("tempdir");
    let cart_path = dir.path().join("cart.json");
    let catalog_path = dir.path().join("products.json");
    let mut store = honey_store(&catalog_path);
    let mut ledger = CartLedger::open(&cart_path).expect("open cart");
    ledger.add_to_cart(store.catalog(), "Honey", key(1000)).expect("add");

    // A directory where the file should be makes the rename fail.
    fs::remove_file(&cart_path).expect("remove cart file");
    fs::create_dir(&cart_path).expect("block cart path");
    let err = ledger
        .add_to_cart(store.catalog(), "Honey", key(500))
        .unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
    assert_eq!(ledger.cart().item_count(), 1);

    fs::remove_file(&catalog_path).expect("remove catalog file");
    fs::create_dir(&catalog_path).expect("block catalog path");
    let before = store.catalog().clone();
    assert!(store.add_product("Ghee", key(200), rs(594)).is_err());
    assert_eq!(store.catalog(), &before);
}
