//! Integration tests for the content store's persistence contract.

use atelier_content::defaults;
use atelier_content::model::{Client, MediaKind, PortfolioItem, PortfolioPatch, ServicePatch};
use atelier_content::storage::{JsonFileMedium, MemoryMedium, StorageMedium};
use atelier_content::store::ContentStore;

fn new_item(id: &str, tags: &[&str]) -> PortfolioItem {
    PortfolioItem {
        id: id.into(),
        title: format!("Item {id}"),
        category: "Brand Film".into(),
        kind: MediaKind::Video,
        media_source: format!("/media/video/item-{id}.mp4"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        year: "2025".into(),
        client_name: None,
        location: None,
        stats: None,
    }
}

/// Simulate a page reload: a fresh store over the same medium.
fn reload(store: ContentStore<MemoryMedium>) -> ContentStore<MemoryMedium> {
    ContentStore::new(store.into_medium())
}

#[test]
fn add_prepends_and_survives_reload() {
    let mut store = ContentStore::new(MemoryMedium::new());
    assert_eq!(store.load_video_items().len(), 6);

    store.add_video_item(new_item("99", &["brand"])).unwrap();

    let store = reload(store);
    let items = store.load_video_items();
    assert_eq!(items.len(), 7);
    assert_eq!(items[0].id, "99");
}

#[test]
fn patch_overlays_fields_and_leaves_siblings_alone() {
    let mut store = ContentStore::new(MemoryMedium::new());
    let before = store.load_video_items();

    store
        .update_video_item(
            "v2",
            PortfolioPatch {
                title: Some("Summit Aftermovie 2024".into()),
                location: Some("Bergen".into()),
                ..Default::default()
            },
        )
        .unwrap();

    let store = reload(store);
    let after = store.load_video_items();

    let patched = after.iter().find(|i| i.id == "v2").unwrap();
    assert_eq!(patched.title, "Summit Aftermovie 2024");
    assert_eq!(patched.location.as_deref(), Some("Bergen"));
    // Omitted fields preserved.
    assert_eq!(patched.category, "Event");
    assert_eq!(patched.year, "2024");

    // Every sibling is byte-for-byte what it was.
    for (b, a) in before.iter().zip(after.iter()) {
        if b.id != "v2" {
            assert_eq!(b, a);
        }
    }
}

#[test]
fn remove_then_reload_drops_exactly_one_entry() {
    let mut store = ContentStore::new(MemoryMedium::new());
    store.remove_graphic_item("g4").unwrap();

    let store = reload(store);
    let items = store.load_graphic_items();
    assert_eq!(items.len(), 5);
    assert!(items.iter().all(|i| i.id != "g4"));
    let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["g1", "g2", "g3", "g5", "g6"]);
}

#[test]
fn persist_load_round_trip_is_deep_equal() {
    let mut store = ContentStore::new(MemoryMedium::new());
    let collection = vec![new_item("a", &["brand", "event"]), new_item("b", &[])];
    store.persist_video_items(&collection).unwrap();

    let store = reload(store);
    assert_eq!(store.load_video_items(), collection);
}

#[test]
fn corrupt_persisted_value_loads_bundled_default() {
    let mut medium = MemoryMedium::new();
    medium.set("videoItems", "{{{ not json").unwrap();

    let store = ContentStore::new(medium);
    assert_eq!(store.load_video_items(), defaults::default_video_items());
}

#[test]
fn corrupt_value_in_one_key_does_not_affect_others() {
    let mut store = ContentStore::new(MemoryMedium::new());
    store.remove_client("c6").unwrap();

    let mut medium = store.into_medium();
    medium.set("videoItems", "[}").unwrap();

    let store = ContentStore::new(medium);
    assert_eq!(store.load_video_items(), defaults::default_video_items());
    assert_eq!(store.load_clients().len(), 5);
}

#[test]
fn reset_restores_every_bundled_default() {
    let mut store = ContentStore::new(MemoryMedium::new());
    store.add_video_item(new_item("99", &["brand"])).unwrap();
    store.remove_graphic_item("g1").unwrap();
    store
        .update_service(
            "s1",
            ServicePatch {
                title: Some("Edited".into()),
                ..Default::default()
            },
        )
        .unwrap();
    store
        .add_client(Client {
            id: "c9".into(),
            name: "Niner".into(),
            logo_source: "/media/clients/niner.svg".into(),
        })
        .unwrap();

    store.reset_to_defaults().unwrap();

    let store = reload(store);
    assert_eq!(store.load_services(), defaults::default_services());
    assert_eq!(store.load_video_items(), defaults::default_video_items());
    assert_eq!(store.load_graphic_items(), defaults::default_graphic_items());
    assert_eq!(store.load_clients(), defaults::default_clients());
}

#[test]
fn login_persists_across_reload() {
    let mut store = ContentStore::new(MemoryMedium::new());
    assert!(store.login("admin", "0414").unwrap());

    let store = reload(store);
    assert!(store.is_authenticated());
}

#[test]
fn failed_login_leaves_session_state_alone() {
    let mut store = ContentStore::new(MemoryMedium::new());
    assert!(store.login("admin", "0414").unwrap());
    assert!(!store.login("x", "y").unwrap());
    // Still logged in from the earlier success.
    assert!(store.is_authenticated());
}

#[test]
fn file_backed_store_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("content.json");

    let mut store = ContentStore::new(JsonFileMedium::open(&path).unwrap());
    store.add_video_item(new_item("99", &["brand"])).unwrap();
    assert!(store.login("admin", "0414").unwrap());
    drop(store);

    let store = ContentStore::new(JsonFileMedium::open(&path).unwrap());
    assert_eq!(store.load_video_items().len(), 7);
    assert_eq!(store.load_video_items()[0].id, "99");
    assert!(store.is_authenticated());
}
