//! Integration tests for the ItemInfo enrichment pass
//!
//! These write a small snapshot to disk, run the pass through the public API
//! and read the written tables back.

use std::path::Path;

use iteminfo::prelude::*;
use iteminfo::ids;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn write_table(dir: &Path, name: &str, value: &Value) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn template(id: &str, parent: &str, kind: &str, props: Value) -> (String, Value) {
    (
        id.to_string(),
        json!({ "_id": id, "_name": id, "_parent": parent, "_type": kind, "_props": props }),
    )
}

/// Salewa priced on the flea, one cartridge, and a scope sold mounted on a gun
fn write_snapshot(dir: &Path) {
    let items: serde_json::Map<String, Value> = [
        template("root", "", "Node", json!({})),
        template("meds", "root", "Node", json!({})),
        template(ids::AMMO, "root", "Node", json!({})),
        template(ids::CURRENCY, "root", "Node", json!({})),
        template(
            "salewa",
            "meds",
            "Item",
            json!({ "Width": 1, "Height": 1, "Weight": 0.5, "StackMaxSize": 1 }),
        ),
        template(
            "m855a1",
            ids::AMMO,
            "Item",
            json!({ "Damage": 45, "PenetrationPower": 41, "StackMaxSize": 60 }),
        ),
        // Listed before the gun so its text is read before the gun's is changed
        template("scope", "sights", "Item", json!({ "Width": 2, "Height": 1 })),
        template("gun", "weapons", "Item", json!({ "Width": 4, "Height": 2 })),
        template(ids::ROUBLES, ids::CURRENCY, "Item", json!({})),
        template("dogtag", "meds", "Item", json!({ "QuestItem": true })),
    ]
    .into_iter()
    .collect();
    write_table(dir, "items.json", &Value::Object(items));

    write_table(
        dir,
        "handbook.json",
        &json!({
            "Categories": [],
            "Items": [
                { "Id": "salewa", "ParentId": "meds", "Price": 10000 },
                { "Id": "m855a1", "ParentId": "ammo", "Price": 500 },
                { "Id": "scope", "ParentId": "sights", "Price": 8000 },
                { "Id": "gun", "ParentId": "weapons", "Price": 50000 },
                { "Id": ids::ROUBLES, "ParentId": "money", "Price": 1 },
                { "Id": "dogtag", "ParentId": "meds", "Price": 1 }
            ]
        }),
    );
    write_table(dir, "prices.json", &json!({ "salewa": 15000 }));

    let mut traders = serde_json::Map::new();
    traders.insert(
        ids::PRAPOR.to_string(),
        json!({
            "base": {
                "_id": ids::PRAPOR,
                "nickname": "Prapor",
                "loyaltyLevels": [{ "buy_price_coef": 50 }],
                "items_buy": { "category": [], "id_list": [] },
                "items_buy_prohibited": { "category": [], "id_list": [] }
            },
            "assort": {
                "items": [
                    { "_id": "e_gun", "_tpl": "gun", "parentId": "hideout", "slotId": "hideout" },
                    { "_id": "e_mount", "_tpl": "mount", "parentId": "e_gun", "slotId": "mod_mount" },
                    { "_id": "e_scope", "_tpl": "scope", "parentId": "e_mount", "slotId": "mod_scope" }
                ],
                "barter_scheme": { "e_gun": [[{ "_tpl": ids::ROUBLES, "count": 40000 }]] },
                "loyal_level_items": { "e_gun": 2 }
            }
        }),
    );
    write_table(dir, "traders.json", &Value::Object(traders));

    write_table(
        dir,
        "locales/en.json",
        &json!({
            "salewa Name": "Salewa first aid kit",
            "salewa ShortName": "Salewa",
            "salewa Description": "Restores health.",
            "m855a1 Name": "5.56x45mm M855A1",
            "m855a1 ShortName": "M855A1",
            "scope Name": "Scope",
            "gun ShortName": "Gun"
        }),
    );
    write_table(dir, "locales/ru.json", &json!({ "salewa Name": "Салева" }));
}

fn quiet_enricher() -> Enricher {
    let mut enricher = Enricher::bundled().unwrap();
    enricher.config.hide_language_alert = true;
    enricher
}

#[test]
fn test_apply_and_write_back() {
    let source = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_snapshot(source.path());

    let mut db = load_dir(source.path()).unwrap();
    let report = quiet_enricher().run(&mut db);
    write_dir(&db, output.path()).unwrap();

    assert_eq!(report.language, "en");
    assert_eq!(report.processed, 4);
    assert_eq!(report.barter_failures, 0);

    let (items, en, ru) = load_written(output.path());

    assert_eq!(items["salewa"]["_props"]["BackgroundColor"], "default");
    assert_eq!(
        items["salewa"]["_props"],
        json!({ "Width": 1, "Height": 1, "Weight": 0.5, "StackMaxSize": 1, "BackgroundColor": "default" })
    );
    assert_eq!(en["salewa Name"], "Salewa first aid kit");
    assert_eq!(
        en["salewa Description"],
        "15,000 ₽ [15,000 ₽/s] {30,000 ₽/s/kg} (Flea)\n0 ₽ [0 ₽/s] {0 ₽/s/kg} (None)\n\nRestores health.\n\n"
    );
    assert_eq!(ru["salewa Name"], "Салева");
    assert!(ru["salewa Description"]
        .as_str()
        .is_some_and(|d| d.starts_with("15,000 ₽")));
}

/// `items.json` plus the English and Russian locales of a written snapshot
fn load_written(dir: &Path) -> (Value, Value, Value) {
    let read = |name: &str| -> Value {
        serde_json::from_str(&std::fs::read_to_string(dir.join(name)).unwrap()).unwrap()
    };
    (read("items.json"), read("locales/en.json"), read("locales/ru.json"))
}

#[test]
fn test_ammo_tags_reach_every_locale() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());

    let mut db = load_dir(dir.path()).unwrap();
    quiet_enricher().run(&mut db);

    assert_eq!(
        db.locales.get("en", "m855a1 Name"),
        Some("5.56x45mm M855A1 (45/41) {S}")
    );
    assert_eq!(db.locales.get("en", "m855a1 ShortName"), Some("M855A1 {S}"));
    // Russian has no text of its own and composes onto the English one
    assert_eq!(
        db.locales.get("ru", "m855a1 Name"),
        Some("5.56x45mm M855A1 (45/41) {S}")
    );
}

#[test]
fn test_nested_listing_takes_outer_loyalty() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());
    let db = load_dir(dir.path()).unwrap();

    let enricher = quiet_enricher();
    let prepared = enricher.prepare_language();
    let plan = enricher.planner(&db, &prepared).plan("scope").unwrap();
    assert_eq!(plan.barter_rarity, 2);

    let mut db = db;
    enricher.run(&mut db);
    let description = db.locales.get("en", "scope Description").unwrap();
    assert!(description.contains("BARTER FOR\n---------\nBought ∈ Gun at Prapor lv2 < 40,000₽\n"));
}

#[test]
fn test_second_pass_appends_again() {
    let dir = tempfile::tempdir().unwrap();
    write_snapshot(dir.path());
    let mut db = load_dir(dir.path()).unwrap();

    let enricher = quiet_enricher();
    enricher.run(&mut db);
    enricher.run(&mut db);

    assert_eq!(
        db.locales.get("en", "m855a1 ShortName"),
        Some("M855A1 {S} {S}")
    );
}

#[test]
fn test_missing_required_table() {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "handbook.json", &json!({ "Items": [] }));

    let err = load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, Error::TableNotFound { .. }));
}
