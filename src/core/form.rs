//! Field state for the account sign-up form
//!
//! Holds the raw user-entered values plus the transient submission flags.
//! Derivations (format errors, strength) live in `core::validation`.

/// Selector for one of the sign-up form's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Raw values of the sign-up form, exactly as typed.
///
/// Trimming and normalization happen when the submission payload is built,
/// never while the user is still editing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single field's value with what the user typed.
    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// True when any field is empty or whitespace-only.
    pub fn has_blank_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|value| value.trim().is_empty())
    }
}

/// Transient flags raised while a submission is in flight.
///
/// Set through the controller's busy guard only, so they cannot stay raised
/// after an attempt ends, whatever the exit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmissionState {
    pub in_progress: bool,
    pub controls_disabled: bool,
}

impl SubmissionState {
    /// Both flags raised for the duration of the remote call.
    pub fn busy() -> Self {
        Self {
            in_progress: true,
            controls_disabled: true,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}
