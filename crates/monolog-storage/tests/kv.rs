use monolog_storage::error::StorageError;
use monolog_storage::kv::{FileStore, KeyValueStore, MemoryStore};

#[test]
fn file_store_round_trips_and_removes() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    assert_eq!(store.get_item("posts").unwrap(), None);

    store.set_item("posts", "[]").unwrap();
    assert_eq!(store.get_item("posts").unwrap().as_deref(), Some("[]"));
    assert!(dir.path().join("nested/posts.json").exists());
    assert!(!dir.path().join("nested/posts.json.tmp").exists());

    store.set_item("posts", "[1]").unwrap();
    assert_eq!(store.get_item("posts").unwrap().as_deref(), Some("[1]"));

    store.remove_item("posts").unwrap();
    store.remove_item("posts").unwrap();
    assert_eq!(store.get_item("posts").unwrap(), None);
}

#[test]
fn failed_rename_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("posts.json");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), "x").unwrap();
    let store = FileStore::new(dir.path());

    let err = store.set_item("posts", "[]").unwrap_err();

    assert!(matches!(err, StorageError::Io { .. }));
    assert!(!dir.path().join("posts.json.tmp").exists());
    assert!(blocker.join("keep").exists());
}

#[test]
fn file_store_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    for key in ["", "../escape", ".hidden", "a/b", "spaced key"] {
        let err = store.set_item(key, "x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }), "{key}");
    }
}

#[test]
fn memory_store_is_last_writer_wins() {
    let store = MemoryStore::new();

    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));

    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
}
