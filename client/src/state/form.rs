//! Contact form values and per-field validation state.
//!
//! DESIGN
//! ======
//! Validity is an explicit [`ValidationState`] per field rather than a CSS
//! class read back from the DOM. The view maps state to the `valid` /
//! `invalid` markers and error text in a single rendering step.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::dom::Target;
use crate::util::validation::{
    ValidationError, validate_confirm_password, validate_email, validate_name, validate_password,
};

/// Marker class for a field that passed validation.
pub const VALID_MARKER: &str = "valid";
/// Marker class for a field that failed validation.
pub const INVALID_MARKER: &str = "invalid";

/// A validated form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All validated fields, in focus priority order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::ConfirmPassword];

    /// DOM `id` of the input element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// DOM `id` of the element holding the field's error text.
    #[must_use]
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
            Field::ConfirmPassword => "confirmPasswordError",
        }
    }

    /// HTML `type` attribute for the input.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
        }
    }

    #[must_use]
    pub fn target(self) -> Target {
        Target::Element(self.element_id())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    #[must_use]
    pub fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Full Name is required.",
            Field::Email => "Email Address is required.",
            Field::Password => "Password is required.",
            Field::ConfirmPassword => "Please confirm your password.",
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::ConfirmPassword => 3,
        }
    }
}

/// Outcome of the most recent validation pass for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Unvalidated,
    Valid,
    Invalid(ValidationError),
}

impl ValidationState {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationState::Valid)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationState::Invalid(_))
    }

    /// Error slot text; empty unless invalid.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ValidationState::Invalid(err) => err.to_string(),
            ValidationState::Unvalidated | ValidationState::Valid => String::new(),
        }
    }

    /// Marker class to render on the input, if any.
    #[must_use]
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            ValidationState::Unvalidated => None,
            ValidationState::Valid => Some(VALID_MARKER),
            ValidationState::Invalid(_) => Some(INVALID_MARKER),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationState {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationState::Valid,
            Err(err) => ValidationState::Invalid(err),
        }
    }
}

/// Current field values plus their validation states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Free-text message body. Not validated, not persisted.
    pub message: String,
    states: [ValidationState; 4],
}

impl FormState {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }

    #[must_use]
    pub fn state(&self, field: Field) -> ValidationState {
        self.states[field.index()]
    }

    /// Run the rule for `field` against current values and record the result.
    pub fn validate(&mut self, field: Field) -> bool {
        let result = match field {
            Field::Name => validate_name(&self.name),
            Field::Email => validate_email(&self.email),
            Field::Password => validate_password(&self.password),
            Field::ConfirmPassword => validate_confirm_password(&self.confirm_password, &self.password),
        };
        let passed = result.is_ok();
        self.states[field.index()] = result.into();
        passed
    }

    /// Validate every field (no short-circuit) and return the first failing
    /// one in priority order.
    ///
    /// # Errors
    ///
    /// Returns the highest-priority [`Field`] that failed.
    pub fn validate_all(&mut self) -> Result<(), Field> {
        let mut first_failure = None;
        for field in Field::ALL {
            if !self.validate(field) && first_failure.is_none() {
                first_failure = Some(field);
            }
        }
        first_failure.map_or(Ok(()), Err)
    }

    /// Empty every value (message included) and clear validation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
