//! Field validation rules.
//!
//! Each rule is a pure function of the current input. Name and email are
//! checked trimmed; passwords are checked exactly as typed. Trimming and
//! length follow browser string semantics: U+FEFF counts as whitespace and
//! length is measured in UTF-16 code units.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::form::Field;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("email pattern failed to compile: {e}");
        None
    }
});

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", .0.required_message())]
    Required(Field),
    #[error("Please enter a valid email address.")]
    InvalidFormat,
    /// Fewer than [`MIN_PASSWORD_LEN`] UTF-16 code units.
    #[error("Password must be at least {} characters long.", MIN_PASSWORD_LEN)]
    TooShort,
    #[error("Passwords do not match.")]
    Mismatch,
}

/// Strip leading and trailing whitespace the way `String.prototype.trim`
/// does: byte order marks are stripped, NEL (U+0085) is kept.
#[must_use]
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Length as the browser reports it (`String.length`).
#[must_use]
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// `local@domain.tld` shape only; no further domain checks.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// # Errors
///
/// [`ValidationError::Required`] when the trimmed name is empty.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if trim_input(name).is_empty() {
        return Err(ValidationError::Required(Field::Name));
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::Required`] when the trimmed email is empty,
/// [`ValidationError::InvalidFormat`] when it is not `x@y.z` shaped.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = trim_input(email);
    if email.is_empty() {
        return Err(ValidationError::Required(Field::Email));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidFormat);
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::Required`] when empty, [`ValidationError::TooShort`]
/// below [`MIN_PASSWORD_LEN`] UTF-16 code units.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::Required(Field::Password));
    }
    if input_len(password) < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

/// # Errors
///
/// [`ValidationError::Required`] when empty, [`ValidationError::Mismatch`]
/// unless byte-for-byte equal to `password`.
pub fn validate_confirm_password(confirm: &str, password: &str) -> Result<(), ValidationError> {
    if confirm.is_empty() {
        return Err(ValidationError::Required(Field::ConfirmPassword));
    }
    if confirm != password {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}
