use lockforge::pattern::Pattern;
use lockforge::store::{PatternStore, SavedEntry};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn temp_store() -> (TempDir, PatternStore) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = PatternStore::new(dir.path().join("saved.json"));
    (dir, store)
}

#[test]
fn test_missing_file_reads_empty() {
    let (_dir, store) = temp_store();
    assert!(store.load().is_empty());
}

#[test]
fn test_add_and_reload() {
    let (_dir, store) = temp_store();
    let p = Pattern::from_taps([0, 2, 6, 8]);
    let saved = store.add(Some("  zig  "), &p, 72).unwrap();
    assert_eq!(saved.name, "zig");
    assert_eq!(saved.len, 7);

    let entries = store.load();
    assert_eq!(entries, vec![saved]);
    assert_eq!(entries[0].pattern(), p);
}

#[test]
fn test_auto_names_increment() {
    let (_dir, store) = temp_store();
    let p = Pattern::from_taps([0, 1, 2, 5]);
    assert_eq!(store.add(None, &p, 40).unwrap().name, "Pattern 1");
    assert_eq!(store.add(Some(""), &p, 40).unwrap().name, "Pattern 2");
    store.add(Some("mine"), &p, 40).unwrap();
    assert_eq!(store.add(None, &p, 40).unwrap().name, "Pattern 3");
}

#[test]
fn test_short_pattern_rejected() {
    let (_dir, store) = temp_store();
    let p = Pattern::from_taps([0, 1, 2]);
    assert!(store.add(Some("short"), &p, 0).is_err());
    assert!(store.load().is_empty());
}

#[test]
fn test_long_names_truncated() {
    let (_dir, store) = temp_store();
    let p = Pattern::from_taps([0, 1, 2, 5]);
    let name = "ñ".repeat(70);
    let saved = store.add(Some(&name), &p, 40).unwrap();
    assert_eq!(saved.name.chars().count(), 50);
}

#[test]
fn test_remove_and_clear() {
    let (_dir, store) = temp_store();
    let p = Pattern::from_taps([0, 1, 2, 5]);
    store.add(Some("a"), &p, 40).unwrap();
    store.add(Some("b"), &p, 40).unwrap();

    assert!(store.remove(5).unwrap().is_none());
    let removed = store.remove(0).unwrap().unwrap();
    assert_eq!(removed.name, "a");
    assert_eq!(store.load().len(), 1);

    store.clear_all().unwrap();
    assert!(store.load().is_empty());
    assert!(!store.path().exists());
    // Clearing twice is fine.
    store.clear_all().unwrap();
}

#[test]
fn test_corrupt_file_reads_empty() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().is_empty());

    fs::write(store.path(), r#"{"name": "x"}"#).unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_malformed_entries_are_dropped() {
    let (_dir, store) = temp_store();
    let raw = json!([
        {"name": "good", "seq": [0, 1, 2, 5], "len": 4, "score": 40},
        {"name": "bad score", "seq": [0, 1, 2, 5], "len": 4, "score": 140},
        {"name": "float score", "seq": [0, 1, 2, 5], "len": 4, "score": 40.5},
        {"name": "too short after filter", "seq": [0, 1, 9, -1, "x"], "len": 5, "score": 10},
        {"name": "filtered", "seq": [0, 11, 1, 2, 5], "len": 5, "score": 12},
        {"seq": [3, 4, 5, 8], "score": 0},
        "not an object",
        {"name": 42, "seq": [6, 7, 8, 5], "len": "four", "score": 100},
        {"name": "repeats", "seq": [0, 1, 0, 1], "len": 4, "score": 90},
        {"name": "skips middles", "seq": [0, 2, 8, 6], "len": 4, "score": 76}
    ]);
    fs::write(store.path(), raw.to_string()).unwrap();

    let entries = store.load();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["good", "filtered", "", "42", "skips middles"]);

    assert_eq!(entries[1].seq, vec![0, 1, 2, 5]);
    assert_eq!(entries[1].len, 4);
    assert_eq!(entries[3].score, 100);

    // Stored sequences come back canonical, with the length recomputed.
    assert_eq!(entries[4].seq, vec![0, 1, 2, 5, 8, 7, 6]);
    assert_eq!(entries[4].len, 7);
    for e in &entries {
        let mut unique = e.seq.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), e.seq.len(), "repeat in {:?}", e.seq);
        assert_eq!(e.pattern().nodes(), e.seq.as_slice());
    }
}

#[test]
fn test_sanitize_requires_seq_and_score() {
    assert!(SavedEntry::sanitize(&json!({"name": "x", "score": 10})).is_none());
    assert!(SavedEntry::sanitize(&json!({"name": "x", "seq": [0, 1, 2, 5]})).is_none());
}
