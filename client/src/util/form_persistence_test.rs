use super::*;
use crate::util::storage::THEME_KEY;
use crate::util::storage::test_helpers::{FailureMode, MemoryStorage};

#[test]
fn save_writes_raw_values() {
    let store = MemoryStorage::new();
    save(&store, "  Jo ", "jo@x.com ");
    assert_eq!(store.get(NAME_KEY), Ok(Some("  Jo ".to_owned())));
    assert_eq!(store.get(EMAIL_KEY), Ok(Some("jo@x.com ".to_owned())));
}

#[test]
fn save_then_load_round_trips() {
    let store = MemoryStorage::new();
    save(&store, "Jo", "jo@x.com");
    assert_eq!(
        load(&store),
        SavedFields { name: Some("Jo".to_owned()), email: Some("jo@x.com".to_owned()) }
    );
}

#[test]
fn load_absent_keys_is_none() {
    assert_eq!(load(&MemoryStorage::new()), SavedFields::default());
}

#[test]
fn load_treats_empty_strings_as_absent() {
    let store = MemoryStorage::new();
    save(&store, "", "jo@x.com");
    let saved = load(&store);
    assert_eq!(saved.name, None);
    assert_eq!(saved.email, Some("jo@x.com".to_owned()));
}

#[test]
fn clear_removes_only_draft_keys() {
    let store = MemoryStorage::new();
    store.set(THEME_KEY, "dark").unwrap();
    save(&store, "Jo", "jo@x.com");
    clear(&store);
    assert_eq!(load(&store), SavedFields::default());
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_owned())));
}

#[test]
fn failures_are_swallowed() {
    let store = MemoryStorage::unavailable();
    save(&store, "Jo", "jo@x.com");
    clear(&store);
    assert_eq!(load(&store), SavedFields::default());
    assert_eq!(saved_name(&store), None);
}

#[test]
fn read_only_storage_keeps_previous_drafts() {
    let store = MemoryStorage::new();
    save(&store, "Jo", "jo@x.com");
    let read_only = store.with_failure(FailureMode::ReadOnly);
    save(&read_only, "Al", "al@x.com");
    clear(&read_only);
    assert_eq!(saved_name(&store), Some("Jo".to_owned()));
}
