//! Application state object for the contact page.
//!
//! DESIGN
//! ======
//! `ContactApp` is built once at startup and owns everything the page's event
//! handlers touch: the key-value store, the document surface, form values and
//! validation, the applied theme, the derived status line and the success
//! banner. The Leptos tree holds it in a single `RwSignal` context; tests
//! drive it directly over in-memory storage and document doubles.
//!
//! RE-ENTRANCY
//! ===========
//! Moving focus makes the browser fire `blur` on the previously focused
//! input synchronously, and that input's handler updates the app signal.
//! Focus therefore never moves while the signal is borrowed: `submit` only
//! reports the field, and [`submit_with`] focuses it after the update has
//! returned.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::{RwSignal, Update};

use crate::state::form::{Field, FormState};
use crate::state::submission::{HideTicket, SUCCESS_HIDE_DELAY, SubmissionState, SubmitOutcome};
use crate::state::theme::Theme;
use crate::util::dom::{BrowserDocument, DocumentHost};
use crate::util::storage::{BrowserStorage, KeyValueStore};
use crate::util::timer::Scheduler;
use crate::util::validation::trim_input;
use crate::util::{animation, dark_mode, form_persistence, preference_display};

/// The app as wired in the browser.
pub type BrowserContactApp = ContactApp<BrowserStorage, BrowserDocument>;

#[derive(Clone, Debug)]
pub struct ContactApp<S, D> {
    store: S,
    document: D,
    pub form: FormState,
    /// Theme last applied; drives the toggle icon and label.
    pub theme: Theme,
    pub preference_text: String,
    pub submission: SubmissionState,
}

impl<S: KeyValueStore, D: DocumentHost> ContactApp<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self {
            store,
            document,
            form: FormState::default(),
            theme: Theme::default(),
            preference_text: String::new(),
            submission: SubmissionState::default(),
        }
    }

    /// Page-load restore: theme (default light), saved drafts, status line.
    pub fn initialize(&mut self) {
        let theme = dark_mode::read_preference(&self.store).unwrap_or_default();
        self.apply_theme(theme);

        let saved = form_persistence::load(&self.store);
        if let Some(name) = saved.name {
            self.form.name = name;
        }
        if let Some(email) = saved.email {
            self.form.email = email;
        }
        self.refresh_preferences();
        log::debug!("contact page restored (theme: {theme})");
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        self.form.set_value(field, value);
    }

    pub fn set_message(&mut self, value: String) {
        self.form.message = value;
    }

    /// Focus left `field`.
    pub fn blur(&mut self, field: Field) {
        match field {
            Field::Name | Field::Email => {
                self.save_drafts();
                self.form.validate(field);
            }
            Field::Password => {
                self.form.validate(Field::Password);
                if !trim_input(&self.form.confirm_password).is_empty() {
                    self.form.validate(Field::ConfirmPassword);
                }
            }
            Field::ConfirmPassword => {
                self.form.validate(Field::ConfirmPassword);
            }
        }
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        dark_mode::apply(&self.store, &self.document, theme);
        self.theme = theme;
        self.refresh_preferences();
    }

    /// Flip whatever the document currently shows.
    pub fn toggle_theme(&mut self) {
        self.theme = dark_mode::toggle(&self.store, &self.document);
        self.refresh_preferences();
    }

    /// Mirror name and email into storage, then refresh the status line.
    pub fn save_drafts(&mut self) {
        form_persistence::save(&self.store, &self.form.name, &self.form.email);
        self.refresh_preferences();
    }

    pub fn refresh_preferences(&mut self) {
        self.preference_text = preference_display::render(&self.store);
    }

    /// Validate everything; on success show the banner and reset, otherwise
    /// report the first invalid field. Moving focus is left to the caller.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submission.hide();

        if let Err(field) = self.form.validate_all() {
            log::debug!("submission rejected at {field:?}");
            return SubmitOutcome::Rejected(field);
        }

        let name = std::mem::take(&mut self.form.name);
        let ticket = self.submission.show(name);
        self.form.reset();
        form_persistence::clear(&self.store);
        self.refresh_preferences();
        log::info!("contact form submitted");
        SubmitOutcome::Accepted(ticket)
    }

    /// Auto-hide callback. Stale tickets are ignored.
    pub fn expire_success(&mut self, ticket: HideTicket) {
        self.submission.expire(ticket);
    }

    pub fn trigger_animation(&self) {
        animation::pulse(&self.document);
    }
}

/// Shared access to a [`ContactApp`] from event handlers and timers.
pub trait AppHandle<S, D>: Clone + 'static {
    /// Run `f` against the app. `None` when the app is gone.
    fn update_app<R>(&self, f: impl FnOnce(&mut ContactApp<S, D>) -> R) -> Option<R>;
}

impl<S, D> AppHandle<S, D> for RwSignal<ContactApp<S, D>>
where
    S: Send + Sync + 'static,
    D: Send + Sync + 'static,
{
    fn update_app<R>(&self, f: impl FnOnce(&mut ContactApp<S, D>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Form submit handler body.
///
/// Accepted: schedule the banner's auto-hide, replacing any pending one.
/// Rejected: cancel the pending hide and focus the first invalid field once
/// `app` is no longer borrowed.
pub fn submit_with<S, D, H, F, T>(app: &H, focus: &F, timer: &mut T) -> Option<SubmitOutcome>
where
    S: KeyValueStore + 'static,
    D: DocumentHost + 'static,
    H: AppHandle<S, D>,
    F: DocumentHost,
    T: Scheduler,
{
    let outcome = app.update_app(ContactApp::submit)?;
    match outcome {
        SubmitOutcome::Accepted(ticket) => {
            let handle = app.clone();
            timer.schedule(SUCCESS_HIDE_DELAY, move || {
                handle.update_app(|a| a.expire_success(ticket));
            });
        }
        SubmitOutcome::Rejected(field) => {
            timer.cancel();
            focus.focus(field.target());
        }
    }
    Some(outcome)
}
