//! Session context for the signed-in user
//!
//! Holds the current session in a reactive context and receives fresh
//! sessions from the sign-up flow. In-memory only; nothing is persisted
//! across reloads.

use leptos::prelude::*;

use crate::core::{AuthSession, SessionSink, User};

/// Whether anyone is signed in right now.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(AuthSession),
}

/// Reactive handle on the current session, shareable by copy.
#[derive(Clone, Copy)]
pub struct UserContext {
    pub state: RwSignal<SessionState>,
}

impl UserContext {
    pub fn is_signed_in(&self) -> bool {
        matches!(self.state.get(), SessionState::SignedIn(_))
    }

    /// Current user, if signed in.
    pub fn user(&self) -> Option<User> {
        match self.state.get() {
            SessionState::SignedIn(session) => Some(session.user),
            SessionState::SignedOut => None,
        }
    }
}

impl SessionSink for UserContext {
    fn commit(&self, session: AuthSession) {
        tracing::debug!("session committed for {}", session.user.email);
        self.state.set(SessionState::SignedIn(session));
    }
}

/// Provide the session context to the component tree.
pub fn provide_user_context() -> UserContext {
    let ctx = UserContext {
        state: RwSignal::new(SessionState::SignedOut),
    };
    provide_context(ctx);
    ctx
}

/// Get the session context. Panics if no ancestor provided it.
pub fn use_user_context() -> UserContext {
    expect_context::<UserContext>()
}
