//! Validation for the sign-up form
//!
//! Pure derivations over the raw field values. Nothing here performs IO or
//! keeps state of its own; the form component calls
//! [`ValidationState::after_edit`] after every field change and renders the
//! result.

use crate::core::form::{FormField, RegistrationForm};

/// Minimum password length (in characters) accepted at submission.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Symbols that count as their own character class in the strength score.
const STRENGTH_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Inline errors rendered next to their own inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Email does not look like `local@domain.tld`
    InvalidEmail,
    /// Confirmation differs from the password
    PasswordMismatch,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::PasswordMismatch => write!(f, "Passwords do not match"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Checks the email against a conventional `local@domain.tld` shape.
///
/// Empty input is not an error here; emptiness belongs to the
/// required-fields gate at submission time.
pub fn validate_email_format(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        return None;
    }

    if email.chars().any(char::is_whitespace) {
        return Some(FieldError::InvalidEmail);
    }

    if email.chars().filter(|c| *c == '@').count() != 1 {
        return Some(FieldError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Some(FieldError::InvalidEmail);
    };

    if local.is_empty() || domain.is_empty() {
        return Some(FieldError::InvalidEmail);
    }

    // The domain needs a dot that is neither its first nor its last character.
    // '.' is ASCII, so the byte offset right after it starts the next character.
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Some(FieldError::InvalidEmail);
    }

    None
}

/// Flags a mismatch only once the user has typed something into the
/// confirmation field.
pub fn validate_confirmation(password: &str, confirm: &str) -> Option<FieldError> {
    if !confirm.is_empty() && confirm != password {
        Some(FieldError::PasswordMismatch)
    } else {
        None
    }
}

/// Scores the password as 0, 25, 50, 75, or 100.
///
/// One point per ASCII character class present (lowercase, uppercase, digit,
/// symbol from [`STRENGTH_SYMBOLS`]), scaled to a percentage. Anything
/// shorter than [`MIN_PASSWORD_CHARS`] scores 0 outright. This is a coarse
/// meter for the UI, not a cryptographic strength estimate.
pub fn password_strength(password: &str) -> u8 {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return 0;
    }

    let classes = [
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| STRENGTH_SYMBOLS.contains(c)),
    ];

    classes.iter().filter(|present| **present).count() as u8 * 25
}

/// Label band for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    Strongest,
}

impl StrengthBand {
    /// Maps a 0-100 score onto its band. Only the exact top value reads as
    /// `Strongest`.
    pub fn from_score(score: u8) -> Self {
        match score {
            100.. => StrengthBand::Strongest,
            75.. => StrengthBand::Strong,
            50.. => StrengthBand::Fair,
            25.. => StrengthBand::Weak,
            _ => StrengthBand::VeryWeak,
        }
    }
}

impl std::fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StrengthBand::VeryWeak => "Very weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Fair => "Fair",
            StrengthBand::Strong => "Strong",
            StrengthBand::Strongest => "Strongest",
        };
        write!(f, "{}", label)
    }
}

/// Derived validation state for the whole form.
///
/// Always produced by full rederivation, never patched entry by entry. The
/// one externally sourced entry is `server_email_error`: the form attaches it
/// after the service reports the address as taken, and the next edit to the
/// email field drops it, so a stale server verdict never outlives a changed
/// value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationState {
    pub email_format_error: Option<FieldError>,
    pub server_email_error: Option<String>,
    pub password_mismatch_error: Option<FieldError>,
    pub password_strength: u8,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rederives every entry from the current field values.
    pub fn after_edit(&self, form: &RegistrationForm, edited: FormField) -> ValidationState {
        let server_email_error = if edited == FormField::Email {
            None
        } else {
            self.server_email_error.clone()
        };

        ValidationState {
            email_format_error: validate_email_format(&form.email),
            server_email_error,
            password_mismatch_error: validate_confirmation(&form.password, &form.confirm_password),
            password_strength: password_strength(&form.password),
        }
    }

    /// Errors the inputs are already showing inline. The server email error
    /// does not gate submission.
    pub fn has_inline_errors(&self) -> bool {
        self.email_format_error.is_some() || self.password_mismatch_error.is_some()
    }
}
