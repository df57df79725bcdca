//! User-facing notifications
//!
//! The sign-up flow only emits these; queueing, rendering, and dismissal
//! belong to the snackbar layer in `ui`.

/// Notification severity, mapped to styling by the snackbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, fire-and-forget message for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Outbound channel for transient messages.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_severity() {
        let ok = Notification::success("Sign-up successful!");
        assert_eq!(ok.severity, Severity::Success);
        assert_eq!(ok.message, "Sign-up successful!");

        let err = Notification::error("Something went wrong. Try again.");
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.message, "Something went wrong. Try again.");
    }
}
