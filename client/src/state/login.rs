//! Sign-in form state: typed credentials, mode flag, last failure.
//!
//! DESIGN
//! ======
//! Plain data with small mutators so the page, the attempt runner and tests
//! all drive the same transitions. The page wraps it in an `RwSignal`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use identity::{AuthError, FederatedProvider, Session};

use crate::net::auth_flow::Attempt;

/// Whether submitting the form signs in or creates an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::Register,
            Self::Register => Self::SignIn,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In to Your Account",
            Self::Register => "Create Your Account",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Please sign in to continue.",
            Self::Register => "Join us by creating a new account.",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Login",
            Self::Register => "Register",
        }
    }

    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Register",
            Self::Register => "Already have an account? Login",
        }
    }

    #[must_use]
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in...",
            Self::Register => "Creating account...",
        }
    }
}

/// What the outstanding attempt is doing, for the pending hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptKind {
    Credentials(AuthMode),
    Federated(FederatedProvider),
}

impl AttemptKind {
    #[must_use]
    pub fn pending_label(self) -> &'static str {
        match self {
            Self::Credentials(mode) => mode.pending_label(),
            Self::Federated(FederatedProvider::Apple) => "Waiting for Apple...",
            Self::Federated(FederatedProvider::Google) => "Waiting for Google...",
        }
    }
}

/// Outcome of the most recently started or resolved attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AttemptStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Transient state of the sign-in form.
///
/// `error` is `Some` only while the last resolved attempt failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub error: Option<String>,
    pub status: AttemptStatus,
    /// Kind of the most recently started attempt.
    pub last_attempt: Option<AttemptKind>,
}

impl LoginForm {
    pub fn update_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    pub fn update_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    /// Flip between sign-in and registration. Fields and error are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Snapshot of the typed credentials for a submission in the current mode.
    #[must_use]
    pub fn credentials_attempt(&self) -> Attempt {
        Attempt::Credentials { mode: self.mode, email: self.email.clone(), password: self.password.clone() }
    }

    /// Mark an attempt as started. Credential submissions clear the previous
    /// error; federated attempts leave it until they resolve.
    pub fn begin(&mut self, attempt: &Attempt) {
        if matches!(attempt, Attempt::Credentials { .. }) {
            self.error = None;
        }
        self.last_attempt = Some(attempt.kind());
        self.status = AttemptStatus::Pending;
    }

    /// Apply a resolved attempt. Returns `true` when the caller should
    /// navigate away.
    pub fn finish(&mut self, outcome: &Result<Session, AuthError>) -> bool {
        match outcome {
            Ok(_) => {
                self.error = None;
                self.status = AttemptStatus::Succeeded;
                true
            }
            Err(err) => {
                self.error = Some(err.message());
                self.status = AttemptStatus::Failed;
                false
            }
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == AttemptStatus::Pending
    }

    /// Hint for the outstanding attempt, if any.
    #[must_use]
    pub fn pending_label(&self) -> Option<&'static str> {
        self.last_attempt
            .filter(|_| self.is_pending())
            .map(AttemptKind::pending_label)
    }
}
