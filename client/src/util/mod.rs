//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the controller can run against in-memory stand-ins.

pub mod animation;
pub mod dark_mode;
pub mod dom;
pub mod form_persistence;
pub mod preference_display;
pub mod storage;
pub mod timer;
pub mod validation;
