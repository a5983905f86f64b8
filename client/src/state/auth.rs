//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the sign-in form on success and read by the dashboard. Lives only
//! in memory; session persistence and refresh belong to the identity provider.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use identity::Session;

/// Authentication state tracking the signed-in session, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Greeting label for the signed-in user.
    #[must_use]
    pub fn user_label(&self) -> Option<&str> {
        self.session.as_ref().map(Session::label)
    }
}
