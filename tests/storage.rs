use homedeck::storage::{load_slice, save_slice, FileStore, KeyValueStore, MemoryStore, StorageError};
use tempfile::TempDir;

#[test]
fn test_memory_store_get_and_set() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("tasks").unwrap(), None);

    store.set("tasks", "[]").unwrap();
    assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));

    store.set("tasks", "[1]").unwrap();
    assert_eq!(store.raw("tasks"), Some("[1]"));
}

#[test]
fn test_invalid_keys_are_rejected() {
    let mut store = MemoryStore::new();
    for key in ["", "../escape", "a/b", "with space"] {
        assert!(matches!(store.set(key, "x"), Err(StorageError::InvalidKey(_))), "key {key:?}");
        assert!(store.get(key).is_err());
    }
    assert!(store.set("darkMode", "true").is_ok());
    assert!(store.set("notes_v2-backup", "[]").is_ok());
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    assert_eq!(store.get("notes").unwrap(), None);
    store.set("notes", r#"[{"id":"1"}]"#).unwrap();

    assert_eq!(store.get("notes").unwrap().as_deref(), Some(r#"[{"id":"1"}]"#));
    assert!(store.path_for("notes").exists());
    assert_eq!(store.path_for("notes"), dir.path().join("notes.json"));
}

#[test]
fn test_file_store_overwrite_leaves_no_temp_files() {
    let dir = TempDir::new().unwrap();
    let mut store = FileStore::open(dir.path()).unwrap();

    store.set("darkMode", "false").unwrap();
    store.set("darkMode", "true").unwrap();

    assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["darkMode.json".to_string()]);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("tasks", "[]").unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_file_store_creates_nested_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FileStore::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(store.path_for("tasks"), nested.join("tasks.json"));
}

#[test]
fn test_load_slice_missing_and_blank_are_silent() {
    let store = MemoryStore::with_values([("tasks", "   ")]);

    let (tasks, warning) = load_slice::<Vec<String>, _>(&store, "tasks");
    assert!(tasks.is_empty());
    assert!(warning.is_none());

    let (dark, warning) = load_slice::<bool, _>(&store, "darkMode");
    assert!(!dark);
    assert!(warning.is_none());
}

#[test]
fn test_load_slice_malformed_warns() {
    let store = MemoryStore::with_values([("darkMode", "maybe")]);

    let (dark, warning) = load_slice::<bool, _>(&store, "darkMode");
    assert!(!dark);
    let warning = warning.unwrap();
    assert_eq!(warning.key, "darkMode");
    assert!(warning.to_string().contains("darkMode"));
}

#[test]
fn test_save_slice_writes_json() {
    let mut store = MemoryStore::new();
    save_slice(&mut store, "darkMode", &true).unwrap();
    save_slice(&mut store, "tasks", &Vec::<String>::new()).unwrap();

    assert_eq!(store.raw("darkMode"), Some("true"));
    assert_eq!(store.raw("tasks"), Some("[]"));
}
