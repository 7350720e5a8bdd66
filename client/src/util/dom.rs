//! Document surface used by the controller for imperative DOM work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Most presentation is reactive (Leptos renders validation markers, error
//! text, the toggle icon and the status line from state). Three things are
//! not: the body-level theme marker (which is also the source of truth for
//! `toggle`), moving input focus, and restarting a CSS animation. Those go
//! through [`DocumentHost`] so the logic can run headless in tests.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// An element addressed by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// `document.body`.
    Body,
    /// An element looked up by its `id` attribute.
    Element(&'static str),
}

/// Minimal element interface consumed by the controller.
pub trait DocumentHost {
    /// Whether `target` currently carries the `marker` class.
    fn has_marker(&self, target: Target, marker: &str) -> bool;

    /// Add (`present = true`) or remove the `marker` class.
    fn set_marker(&self, target: Target, marker: &str, present: bool);

    /// Move input focus to `target`.
    fn focus(&self, target: Target);

    /// Force a synchronous layout computation for `target`.
    fn force_layout(&self, target: Target);
}

// =============================================================================
// BROWSER DOCUMENT
// =============================================================================

/// The live browser document. Inert (no markers, no-op writes) outside the
/// browser build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserDocument;

#[cfg(feature = "hydrate")]
fn resolve(target: Target) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    match target {
        Target::Body => document.body(),
        Target::Element(id) => document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>().ok(),
    }
}

impl DocumentHost for BrowserDocument {
    fn has_marker(&self, target: Target, marker: &str) -> bool {
        #[cfg(feature = "hydrate")]
        {
            resolve(target).is_some_and(|el| el.class_list().contains(marker))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, marker);
            false
        }
    }

    fn set_marker(&self, target: Target, marker: &str, present: bool) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = resolve(target) else {
                log::warn!("cannot set marker '{marker}': {target:?} not found");
                return;
            };
            let class_list = el.class_list();
            let result = if present { class_list.add_1(marker) } else { class_list.remove_1(marker) };
            if let Err(e) = result {
                log::warn!("failed to update marker '{marker}' on {target:?}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, marker, present);
        }
    }

    fn focus(&self, target: Target) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = resolve(target)
                && let Err(e) = el.focus()
            {
                log::warn!("failed to focus {target:?}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }

    fn force_layout(&self, target: Target) {
        #[cfg(feature = "hydrate")]
        {
            // Reading offsetWidth flushes pending style changes.
            if let Some(el) = resolve(target) {
                std::hint::black_box(el.offset_width());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
