use serde_json::{json, Value};

use super::{read, read_checked, read_typed, write, write_typed, JsonFileStore, MemoryStore, StoreError};
use super::store::DocumentStore;

#[test]
fn test_missing_file_writes_default() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let value = read(&store, "incidents.json", json!([]));
    assert_eq!(value, json!([]));

    let on_disk: Value =
        serde_json::from_slice(&std::fs::read(dir.path().join("incidents.json")).unwrap()).unwrap();
    assert_eq!(on_disk, json!([]));
}

#[test]
fn test_missing_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("data");
    let store = JsonFileStore::new(&nested);

    read(&store, "protocols.json", json!({}));
    assert!(nested.join("protocols.json").exists());
}

#[test]
fn test_corrupt_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let path = dir.path().join("audit_logs.json");
    std::fs::write(&path, "{not json").unwrap();

    let value = read(&store, "audit_logs.json", json!([]));
    assert_eq!(value, json!([]));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    let doc = json!({"CÓDIGO ROJO": {"steps": ["Evacuar"]}});
    write(&store, "protocols.json", &doc).unwrap();

    assert_eq!(read(&store, "protocols.json", json!({})), doc);
    // Pretty printed, non-ASCII kept as-is
    let text = std::fs::read_to_string(dir.path().join("protocols.json")).unwrap();
    assert!(text.contains("CÓDIGO ROJO"));
    assert!(text.contains("\n  "));
    assert!(!dir.path().join("protocols.json.tmp").exists());
}

#[test]
fn test_invalid_name_returns_default_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("data"));

    assert_eq!(read(&store, "../escape.json", json!(1)), json!(1));
    assert!(!dir.path().join("escape.json").exists());
    assert!(matches!(
        write(&store, "../escape.json", &json!(1)),
        Err(StoreError::InvalidName(_))
    ));
}

#[test]
fn test_typed_read_shape_mismatch_heals() {
    let store = MemoryStore::new();
    store.insert_raw("incidents.json", r#"{"not": "a list"}"#);

    let list: Vec<u32> = read_typed(&store, "incidents.json", Vec::new());
    assert!(list.is_empty());
    assert_eq!(store.load("incidents.json").unwrap(), Some(json!([])));
}

#[test]
fn test_typed_roundtrip() {
    let store = MemoryStore::new();
    write_typed(&store, "numbers.json", &vec![3u32, 2, 1]).unwrap();
    let list: Vec<u32> = read_typed(&store, "numbers.json", Vec::new());
    assert_eq!(list, vec![3, 2, 1]);
}

#[test]
fn test_failed_check_heals() {
    let store = MemoryStore::new();
    write_typed(&store, "numbers.json", &vec![7u32]).unwrap();

    let list: Vec<u32> = read_checked(&store, "numbers.json", vec![0], |doc: &Vec<u32>| {
        if doc.iter().any(|n| *n > 5) {
            Err(StoreError::UnsupportedSchema {
                document: "numbers.json".to_string(),
                found: 7,
                supported: 5,
            })
        } else {
            Ok(())
        }
    });
    assert_eq!(list, vec![0]);
    assert_eq!(store.load("numbers.json").unwrap(), Some(json!([0])));
}

#[test]
fn test_memory_store_missing() {
    let store = MemoryStore::new();
    assert!(store.load("nothing.json").unwrap().is_none());
    assert!(!store.contains("nothing.json"));
    read(&store, "nothing.json", json!({}));
    assert!(store.contains("nothing.json"));
}
