//! Draft persistence for the name and email fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Values are stored raw (as typed) so a reload restores exactly what the
//! user saw. Every failure is logged and swallowed: losing a draft is a
//! convenience regression, never a correctness one.

#[cfg(test)]
#[path = "form_persistence_test.rs"]
mod form_persistence_test;

use crate::util::storage::{EMAIL_KEY, KeyValueStore, NAME_KEY};

/// Draft values found in storage. `None` means "leave the field alone".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedFields {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Write both drafts. Each key is attempted independently.
pub fn save(store: &impl KeyValueStore, name: &str, email: &str) {
    for (key, value) in [(NAME_KEY, name), (EMAIL_KEY, email)] {
        if let Err(e) = store.set(key, value) {
            log::warn!("could not save form draft: {e}");
        }
    }
}

/// Read both drafts. Empty stored strings count as absent.
pub fn load(store: &impl KeyValueStore) -> SavedFields {
    SavedFields { name: read_draft(store, NAME_KEY), email: read_draft(store, EMAIL_KEY) }
}

/// Remove both drafts.
pub fn clear(store: &impl KeyValueStore) {
    for key in [NAME_KEY, EMAIL_KEY] {
        if let Err(e) = store.remove(key) {
            log::warn!("could not clear form draft: {e}");
        }
    }
}

/// Saved name for the welcome line, if any.
pub fn saved_name(store: &impl KeyValueStore) -> Option<String> {
    read_draft(store, NAME_KEY)
}

fn read_draft(store: &impl KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            log::warn!("could not load form draft: {e}");
            None
        }
    }
}
