//! Capability traits consumed by the sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form never talks HTTP itself. It holds an [`IdentityProvider`] and
//! issues exactly one call per user action. Implementations are `?Send`
//! because the browser build runs them on a single-threaded executor.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::types::{IdpCredential, ProviderDescriptor, Session};

/// External identity service: verifies credentials and issues sessions.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Sign in an existing account with email and password.
    async fn sign_in_with_email_and_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Create an account with email and password and sign it in.
    async fn create_user_with_email_and_password(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Sign in through a provider-hosted popup.
    async fn sign_in_with_popup(&self, provider: &ProviderDescriptor) -> Result<Session, AuthError>;
}

/// Provider-hosted popup interaction. Opaque to this crate: it only
/// consumes the credential the popup hands back.
#[async_trait(?Send)]
pub trait PopupFlow {
    async fn authorize(&self, provider: &ProviderDescriptor) -> Result<IdpCredential, AuthError>;
}

/// Popup flow for environments without a browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPopup;

#[async_trait(?Send)]
impl PopupFlow for NoPopup {
    async fn authorize(&self, _provider: &ProviderDescriptor) -> Result<IdpCredential, AuthError> {
        Err(AuthError::Popup("popup sign-in is not available".to_owned()))
    }
}
