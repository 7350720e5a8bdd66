use super::*;
use crate::util::dom::test_helpers::HeadlessDocument;
use crate::util::storage::test_helpers::MemoryStorage;

#[test]
fn read_preference_is_none_when_absent() {
    assert_eq!(read_preference(&MemoryStorage::new()), None);
}

#[test]
fn read_preference_parses_stored_value() {
    let store = MemoryStorage::new();
    store.set(THEME_KEY, "dark").unwrap();
    assert_eq!(read_preference(&store), Some(Theme::Dark));
}

#[test]
fn read_preference_ignores_unknown_value() {
    let store = MemoryStorage::new();
    store.set(THEME_KEY, "sepia").unwrap();
    assert_eq!(read_preference(&store), None);
}

#[test]
fn read_preference_is_none_when_storage_fails() {
    assert_eq!(read_preference(&MemoryStorage::unavailable()), None);
}

#[test]
fn apply_dark_sets_marker_and_persists() {
    let store = MemoryStorage::new();
    let doc = HeadlessDocument::new();
    apply(&store, &doc, Theme::Dark);
    assert!(doc.has_marker(Target::Body, DARK_MARKER));
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_owned())));
    assert_eq!(current(&doc), Theme::Dark);
}

#[test]
fn apply_light_twice_matches_once() {
    let store = MemoryStorage::new();
    let doc = HeadlessDocument::new();
    doc.set_marker(Target::Body, DARK_MARKER, true);

    apply(&store, &doc, Theme::Light);
    let once = (current(&doc), store.get(THEME_KEY));
    apply(&store, &doc, Theme::Light);
    let twice = (current(&doc), store.get(THEME_KEY));

    assert_eq!(once, twice);
    assert!(!doc.has_marker(Target::Body, DARK_MARKER));
    assert_eq!(twice.1, Ok(Some("light".to_owned())));
}

#[test]
fn apply_still_marks_document_when_storage_fails() {
    let store = MemoryStorage::unavailable();
    let doc = HeadlessDocument::new();
    apply(&store, &doc, Theme::Dark);
    assert_eq!(current(&doc), Theme::Dark);
}

#[test]
fn toggle_flips_from_document_state() {
    let store = MemoryStorage::new();
    let doc = HeadlessDocument::new();
    assert_eq!(toggle(&store, &doc), Theme::Dark);
    assert_eq!(toggle(&store, &doc), Theme::Light);
    assert_eq!(store.get(THEME_KEY), Ok(Some("light".to_owned())));
}

#[test]
fn toggle_reads_document_not_storage() {
    let store = MemoryStorage::new();
    let doc = HeadlessDocument::new();
    // Storage edited behind the page's back: says dark, document shows light.
    store.set(THEME_KEY, "dark").unwrap();

    assert_eq!(toggle(&store, &doc), Theme::Dark);
    assert_eq!(store.get(THEME_KEY), Ok(Some("dark".to_owned())));
    assert!(doc.has_marker(Target::Body, DARK_MARKER));
}
