use super::*;
use super::test_helpers::*;

#[test]
fn memory_storage_get_missing_key_is_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get(THEME_KEY), Ok(None));
}

#[test]
fn memory_storage_set_then_get_returns_value() {
    let store = MemoryStorage::new();
    store.set(NAME_KEY, "  Jo ").unwrap();
    assert_eq!(store.get(NAME_KEY), Ok(Some("  Jo ".to_owned())));
}

#[test]
fn memory_storage_set_overwrites() {
    let store = MemoryStorage::new();
    store.set(THEME_KEY, "light").unwrap();
    store.set(THEME_KEY, "dark").unwrap();
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_owned())));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_storage_remove_deletes_and_tolerates_missing() {
    let store = MemoryStorage::new();
    store.set(EMAIL_KEY, "a@b.co").unwrap();
    store.remove(EMAIL_KEY).unwrap();
    store.remove(EMAIL_KEY).unwrap();
    assert!(store.is_empty());
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.set(NAME_KEY, "Jo").unwrap();
    assert_eq!(other.get(NAME_KEY), Ok(Some("Jo".to_owned())));
}

#[test]
fn unavailable_storage_fails_every_operation() {
    let store = MemoryStorage::unavailable();
    assert_eq!(store.get(THEME_KEY), Err(StorageError::Unavailable));
    assert_eq!(store.set(THEME_KEY, "dark"), Err(StorageError::Unavailable));
    assert_eq!(store.remove(THEME_KEY), Err(StorageError::Unavailable));
}

#[test]
fn read_only_storage_reads_but_rejects_writes() {
    let store = MemoryStorage::new();
    store.set(NAME_KEY, "Jo").unwrap();
    let read_only = store.with_failure(FailureMode::ReadOnly);

    assert_eq!(read_only.get(NAME_KEY), Ok(Some("Jo".to_owned())));
    assert!(matches!(read_only.set(NAME_KEY, "Al"), Err(StorageError::Write { .. })));
    assert!(matches!(read_only.remove(NAME_KEY), Err(StorageError::Remove { .. })));
    assert_eq!(store.get(NAME_KEY), Ok(Some("Jo".to_owned())));
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: NAME_KEY.to_owned(), reason: "quota exceeded".to_owned() };
    assert_eq!(err.to_string(), "failed to write 'savedFormName': quota exceeded");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get(THEME_KEY), Err(StorageError::Unavailable));
    assert_eq!(store.set(THEME_KEY, "dark"), Err(StorageError::Unavailable));
    assert_eq!(store.remove(THEME_KEY), Err(StorageError::Unavailable));
}
