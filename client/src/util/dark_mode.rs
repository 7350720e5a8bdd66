//! Theme marker on `<body>` plus the persisted preference.
//!
//! The `dark-theme` class on the body is the live source of truth for the
//! current theme; storage only remembers it for the next page load.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort. A failed write is logged and the
//! theme is still applied for this session.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;
use crate::util::dom::{DocumentHost, Target};
use crate::util::storage::{KeyValueStore, THEME_KEY};

/// Body class present while the dark theme is applied.
pub const DARK_MARKER: &str = "dark-theme";

/// Read the persisted theme. Missing, unreadable or unrecognized values are
/// all `None`.
pub fn read_preference(store: &impl KeyValueStore) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => {
            let theme = Theme::parse(&raw);
            if theme.is_none() {
                log::warn!("ignoring unrecognized stored theme '{raw}'");
            }
            theme
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("could not read theme preference: {e}");
            None
        }
    }
}

/// Theme currently shown by the document.
pub fn current(doc: &impl DocumentHost) -> Theme {
    if doc.has_marker(Target::Body, DARK_MARKER) { Theme::Dark } else { Theme::Light }
}

/// Set the body marker for `theme` and persist it.
pub fn apply(store: &impl KeyValueStore, doc: &impl DocumentHost, theme: Theme) {
    doc.set_marker(Target::Body, DARK_MARKER, theme.is_dark());
    if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
        log::warn!("could not save theme preference: {e}");
    }
}

/// Apply the opposite of what the document currently shows.
pub fn toggle(store: &impl KeyValueStore, doc: &impl DocumentHost) -> Theme {
    let next = current(doc).opposite();
    apply(store, doc, next);
    next
}
