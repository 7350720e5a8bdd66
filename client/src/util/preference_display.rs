//! Status line derived from persisted preferences.

#[cfg(test)]
#[path = "preference_display_test.rs"]
mod preference_display_test;

use crate::util::dark_mode;
use crate::util::form_persistence;
use crate::util::storage::KeyValueStore;

/// `Current theme: {theme}.` plus ` Welcome back, {name}!` when a name is
/// saved. Reads storage, not the document.
pub fn render(store: &impl KeyValueStore) -> String {
    let theme = dark_mode::read_preference(store).unwrap_or_default();
    let mut text = format!("Current theme: {theme}.");
    if let Some(name) = form_persistence::saved_name(store) {
        text.push_str(&format!(" Welcome back, {name}!"));
    }
    text
}
