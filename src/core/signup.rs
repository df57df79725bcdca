//! Sign-up submission flow
//!
//! Gates a submission attempt against the current field and validation
//! state, issues the remote call, and maps every outcome back onto the
//! caller's seams: session sink, notification channel, and busy flags.

use crate::core::api::{ApiError, RegisterRequest, RegistrationApi};
use crate::core::form::{RegistrationForm, SubmissionState};
use crate::core::notify::{Notification, Notifier};
use crate::core::session::SessionSink;
use crate::core::validation::{MIN_PASSWORD_CHARS, ValidationState};

const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
const MSG_SIGN_UP_SUCCESS: &str = "Sign-up successful!";

/// Receives the busy flags while an attempt is in flight.
pub trait StatusSink {
    fn set_submission(&self, state: SubmissionState);
}

/// How one submission attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Registered; the session is committed and the panel should close.
    Completed,
    /// At least one field was blank. An aggregate notification went out.
    MissingFields,
    /// Password under the minimum length. A notification went out.
    PasswordTooShort,
    /// Inline errors are still showing; nothing new was announced.
    InlineErrorsPending,
    /// The address is taken; the message belongs on the email field.
    EmailTaken(String),
    /// Rejected or unreachable; an error notification went out.
    Failed,
}

/// Raises the busy flags for the duration of the remote call and drops them
/// on every exit path, unwinding included.
struct SubmitGuard<'a, F: StatusSink> {
    status: &'a F,
}

impl<'a, F: StatusSink> SubmitGuard<'a, F> {
    fn acquire(status: &'a F) -> Self {
        status.set_submission(SubmissionState::busy());
        Self { status }
    }
}

impl<F: StatusSink> Drop for SubmitGuard<'_, F> {
    fn drop(&mut self) {
        self.status.set_submission(SubmissionState::idle());
    }
}

/// Orchestrates sign-up attempts over the four seams it is handed.
///
/// Assumes single-flight use: the rendered control stays disabled while
/// `in_progress` is raised, so a second attempt cannot start underneath a
/// running one.
pub struct SignUpService<A, S, N, F> {
    api: A,
    session: S,
    notifier: N,
    status: F,
}

impl<A, S, N, F> SignUpService<A, S, N, F>
where
    A: RegistrationApi,
    S: SessionSink,
    N: Notifier,
    F: StatusSink,
{
    pub fn new(api: A, session: S, notifier: N, status: F) -> Self {
        Self {
            api,
            session,
            notifier,
            status,
        }
    }

    /// Runs one submission attempt end to end.
    ///
    /// The local gates run in order (blank fields, password length, inline
    /// errors) before anything is sent; only a fully gated attempt raises
    /// the busy flags or touches the network.
    pub async fn submit(
        &self,
        form: &RegistrationForm,
        validation: &ValidationState,
    ) -> SubmitOutcome {
        if form.has_blank_fields() {
            self.notifier
                .notify(Notification::error(MSG_FILL_ALL_FIELDS));
            return SubmitOutcome::MissingFields;
        }

        if form.password.chars().count() < MIN_PASSWORD_CHARS {
            self.notifier
                .notify(Notification::error(MSG_PASSWORD_TOO_SHORT));
            return SubmitOutcome::PasswordTooShort;
        }

        if validation.has_inline_errors() {
            // These are already visible next to their fields.
            return SubmitOutcome::InlineErrorsPending;
        }

        let request = RegisterRequest::from_form(form);
        let _guard = SubmitGuard::acquire(&self.status);

        tracing::info!("registration attempt for {}", request.email);

        match self.api.register(&request).await {
            Ok(session) => {
                self.session.commit(session);
                self.notifier
                    .notify(Notification::success(MSG_SIGN_UP_SUCCESS));
                SubmitOutcome::Completed
            }
            Err(err @ ApiError::Conflict(_)) => {
                tracing::info!("registration conflict for {}", request.email);
                SubmitOutcome::EmailTaken(err.user_message())
            }
            Err(err) => {
                tracing::warn!("registration failed: {}", err);
                self.notifier.notify(Notification::error(err.user_message()));
                SubmitOutcome::Failed
            }
        }
    }
}
