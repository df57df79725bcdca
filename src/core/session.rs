//! Session types returned by the registration service

use serde::{Deserialize, Serialize};

/// Public user fields as the service reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// First word of the stored name, for compact greetings.
    pub fn given_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

/// An authenticated session: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Where a fresh session gets written after a successful sign-up.
///
/// Persistence and expiry are the implementor's business; the sign-up flow
/// only commits.
pub trait SessionSink {
    fn commit(&self, session: AuthSession);
}
