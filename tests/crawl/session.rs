//! Session snapshots on disk.

use super::common::{ready_cache, scenario_records};
use vitrine::{
    persist_index, restore_index, session_key, FileSessionStore, SessionStore, SiteIndexCache,
};

#[test]
fn test_snapshot_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path());
    let key = session_key("vitrine-index-v1", "https://skn.example");

    persist_index(&ready_cache(scenario_records()), &store, &key);

    let restored = SiteIndexCache::new();
    assert!(restore_index(&restored, &store, &key));
    assert!(restored.is_ready());
    assert_eq!(restored.get().to_records(), scenario_records());
}

#[test]
fn test_snapshot_is_flat_record_array() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path());
    persist_index(&ready_cache(scenario_records()), &store, "k");

    let raw = std::fs::read_to_string(dir.path().join("k.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["url"], "about.html");
    assert_eq!(array[0]["bodyText"], "We design residential and commercial interiors.");
}

#[test]
fn test_missing_snapshot_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path());
    let cache = SiteIndexCache::new();

    assert!(!restore_index(&cache, &store, "absent"));
    assert!(!cache.is_ready());
}

#[test]
fn test_corrupt_snapshot_is_a_miss() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("k.json"), "{not json").unwrap();
    let store = FileSessionStore::new(dir.path());
    let cache = SiteIndexCache::new();

    assert!(!restore_index(&cache, &store, "k"));
    assert!(cache.is_empty());
}

#[test]
fn test_key_changes_with_prefix_and_origin() {
    let a = session_key("vitrine-index-v1", "https://skn.example");
    let b = session_key("vitrine-index-v2", "https://skn.example");
    let c = session_key("vitrine-index-v1", "https://other.example");
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert!(a.starts_with("vitrine-index-v1-"));
}

#[test]
fn test_remove_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path());
    persist_index(&ready_cache(scenario_records()), &store, "k");

    store.remove("k").unwrap();
    assert!(store.load("k").unwrap().is_none());
}
