//! Success banner lifecycle.
//!
//! DESIGN
//! ======
//! Two states: idle (no banner) and success-shown. Each successful submit
//! issues a fresh [`HideTicket`]; only the most recent ticket may hide the
//! banner, so a timer left over from an earlier submit cannot cut a newer
//! banner short even if it fires.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::time::Duration;

use crate::state::form::Field;

/// How long the success banner stays up.
pub const SUCCESS_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Permission to hide one specific banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

/// Banner contents for an accepted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessMessage {
    /// Name as submitted (raw), shown emphasized.
    pub name: String,
}

impl std::fmt::Display for SuccessMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Thank you, {}! Your message has been sent.", self.name)
    }
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Banner shown; schedule a hide with this ticket.
    Accepted(HideTicket),
    /// Validation failed; focus went to this field.
    Rejected(Field),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    success: Option<(SuccessMessage, HideTicket)>,
    issued: u64,
}

impl SubmissionState {
    #[must_use]
    pub fn success(&self) -> Option<&SuccessMessage> {
        self.success.as_ref().map(|(message, _)| message)
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.success.is_some()
    }

    /// Show the banner for `name`, superseding any pending hide.
    pub fn show(&mut self, name: String) -> HideTicket {
        self.issued += 1;
        let ticket = HideTicket(self.issued);
        self.success = Some((SuccessMessage { name }, ticket));
        ticket
    }

    /// Hide unconditionally (start of every submit).
    pub fn hide(&mut self) {
        self.success = None;
    }

    /// Hide if `ticket` belongs to the banner on screen. Returns whether it did.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        match &self.success {
            Some((_, current)) if *current == ticket => {
                self.success = None;
                true
            }
            _ => false,
        }
    }
}
