//! File-backed store tests

use blockpage_model::{Component, ComponentType, TemplateCatalog};
use blockpage_store::{JsonFileStore, PageStore, StoreError};
use std::fs;

fn sample_page() -> Vec<Component> {
    let catalog = TemplateCatalog::builtin();
    vec![
        catalog.instantiate("hero", ComponentType::Hero, None).unwrap(),
        catalog
            .instantiate("pricing", ComponentType::Pricing, None)
            .unwrap(),
    ]
}

#[test]
fn test_save_then_load_preserves_order_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("pages"));

    store.save("home", &sample_page()).unwrap();

    assert!(store.exists("home"));
    assert_eq!(store.load("home").unwrap(), sample_page());
    assert!(!store.page_path("home").with_extension("json.tmp").exists());
}

#[test]
fn test_page_file_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());
    store.save("home", &sample_page()).unwrap();

    let raw = fs::read_to_string(store.page_path("home")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["id"], "home");
    assert_eq!(value["components"][0]["type"], "hero");
    assert_eq!(value["components"][1]["template"], "pricing-tiers");
}

#[test]
fn test_missing_page_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert!(matches!(store.load("nope"), Err(StoreError::NotFound(id)) if id == "nope"));
    assert!(!store.exists("nope"));
}

#[test]
fn test_invalid_page_ids_never_touch_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path());

    assert!(matches!(
        store.save("../escape", &[]),
        Err(StoreError::InvalidPageId(_))
    ));
    assert!(matches!(store.load("a/b"), Err(StoreError::InvalidPageId(_))));
}

#[test]
fn test_corrupt_and_duplicate_pages_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    fs::write(store.page_path("broken"), "{ not json").unwrap();
    assert!(matches!(store.load("broken"), Err(StoreError::Json(_))));

    fs::write(
        store.page_path("dupes"),
        r#"{ "id": "dupes", "components": [
            { "id": "x", "type": "hero" },
            { "id": "x", "type": "faq" }
        ] }"#,
    )
    .unwrap();
    assert!(matches!(
        store.load("dupes"),
        Err(StoreError::DuplicateComponentId { .. })
    ));
}

#[test]
fn test_list_pages() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("pages"));

    assert!(store.list().unwrap().is_empty());

    store.save("pricing", &[]).unwrap();
    store.save("about", &[]).unwrap();
    fs::write(dir.path().join("pages").join("notes.txt"), "ignored").unwrap();

    assert_eq!(store.list().unwrap(), vec!["about", "pricing"]);
}
