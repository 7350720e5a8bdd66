//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared `ContactApp` signal provided by
//! `app::App`.

pub mod animated_box;
pub mod form_field;
pub mod preference_display;
pub mod success_banner;
pub mod theme_switcher;
