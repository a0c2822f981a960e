use studio_showcase::core::{Entity, LoadSource};
use studio_showcase::{
    ContentStore, KeyValueStore, MemoryKeyValueStore, Repository, Review, TeamMember,
};

#[test]
fn test_saved_content_survives_reload() {
    let mut kv = MemoryKeyValueStore::new();
    let (mut store, report) = ContentStore::load(&kv);
    assert!(report.needs_save());

    store
        .team
        .delete(2)
        .expect("Teammitglied 2 sollte existieren");
    store.save(&mut kv).expect("Speichern sollte gelingen");
    assert_eq!(kv.len(), ContentStore::STORAGE_KEYS.len());

    let (reloaded, report) = ContentStore::load(&kv);
    assert!(!report.needs_save());
    assert_eq!(reloaded.team.len(), 3);
    assert!(reloaded.team.get_by_id(2).is_none());
}

#[test]
fn test_ids_continue_after_reload() {
    let mut kv = MemoryKeyValueStore::new();
    let (mut store, _) = ContentStore::load(&kv);
    store.save(&mut kv).expect("Speichern sollte gelingen");

    let (mut reloaded, _) = ContentStore::load(&kv);
    let id = reloaded
        .team
        .create(TeamMember {
            id: 0,
            name: "Noor Haddad".to_string(),
            role: "Architect".to_string(),
            bio: String::new(),
            photo: String::new(),
        })
        .expect("Anlegen sollte gelingen");

    assert_eq!(id, 5);
}

#[test]
fn test_empty_stored_collection_is_not_reseeded() {
    let mut kv = MemoryKeyValueStore::new();
    kv.set_string(Review::STORAGE_KEY, "[]".to_string());

    let (store, report) = ContentStore::load(&kv);

    assert!(store.reviews.is_empty());
    assert!(report
        .sources
        .contains(&(Review::STORAGE_KEY, LoadSource::Stored)));
    // Alle anderen Sammlungen fehlen und werden befüllt
    assert!(report.needs_save());
    assert!(!store.blogs.is_empty());
}

#[test]
fn test_export_import_roundtrip_via_file() {
    let path = std::env::temp_dir().join(format!(
        "studio_showcase_store_{}.json",
        std::process::id()
    ));
    let mut source = ContentStore::seeded();
    source
        .reviews
        .delete(5)
        .expect("Review 5 sollte existieren");
    source
        .export_to_file(&path)
        .expect("Export sollte gelingen");

    let mut target = ContentStore::empty();
    target
        .import_from_file(&path)
        .expect("Import sollte gelingen");

    assert_eq!(target.reviews.len(), 4);
    assert_eq!(target.blogs.len(), source.blogs.len());
    let _ = std::fs::remove_file(path);
}
