//! Attempt runner: one identity-provider call per user action.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page builds an [`Attempt`] from a click or submit and hands it to
//! [`run`], which marks the form pending, performs exactly one provider call,
//! applies the outcome and navigates on success.
//!
//! ERROR HANDLING
//! ==============
//! Every provider failure is folded into `LoginForm::error`; nothing is
//! retried and nothing propagates past the page. Overlapping attempts are not
//! guarded: whichever resolves last writes the final state.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use identity::{AuthError, FederatedProvider, IdentityProvider, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::login::{AttemptKind, AuthMode, LoginForm};

/// Fixed destination after any successful sign-in or registration.
pub const POST_AUTH_PATH: &str = "/dashboard";

/// A single user-triggered authentication request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Email/password submission in the given mode.
    Credentials { mode: AuthMode, email: String, password: String },
    /// Popup sign-in with Apple or Google.
    Federated(FederatedProvider),
}

impl Attempt {
    #[must_use]
    pub fn kind(&self) -> AttemptKind {
        match self {
            Self::Credentials { mode, .. } => AttemptKind::Credentials(*mode),
            Self::Federated(provider) => AttemptKind::Federated(*provider),
        }
    }
}

/// Navigation capability used after a successful attempt.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

/// Adapts the router's `use_navigate` closure.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate_to(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

/// Where the runner reads and writes form and session state.
pub trait FormStore {
    fn update_form(&self, f: impl FnOnce(&mut LoginForm));
    fn store_session(&self, session: &Session);
}

/// Reactive store used by the login page.
#[derive(Clone, Copy)]
pub struct SignalStore {
    pub form: RwSignal<LoginForm>,
    pub auth: RwSignal<AuthState>,
}

impl FormStore for SignalStore {
    fn update_form(&self, f: impl FnOnce(&mut LoginForm)) {
        self.form.update(f);
    }

    fn store_session(&self, session: &Session) {
        let session = session.clone();
        self.auth.update(|state| state.session = Some(session));
    }
}

/// Issue the provider call matching `attempt`.
///
/// # Errors
///
/// Returns the provider's failure unchanged.
pub async fn perform<P>(provider: &P, attempt: &Attempt) -> Result<Session, AuthError>
where
    P: IdentityProvider + ?Sized,
{
    match attempt {
        Attempt::Credentials { mode: AuthMode::Register, email, password } => {
            provider.create_user_with_email_and_password(email, password).await
        }
        Attempt::Credentials { mode: AuthMode::SignIn, email, password } => {
            provider.sign_in_with_email_and_password(email, password).await
        }
        Attempt::Federated(federated) => {
            let session = provider.sign_in_with_popup(&federated.descriptor()).await?;
            log::info!(
                "{} sign-in resolved: uid={} user={}",
                federated.provider_id(),
                session.local_id,
                session.label()
            );
            Ok(session)
        }
    }
}

/// Run one attempt end to end against `store`.
///
/// Returns the provider outcome after it has been applied to the form.
///
/// # Errors
///
/// Returns the provider's failure; it is already reflected in the form.
pub async fn run<S, P, N>(store: &S, provider: &P, navigator: &N, attempt: Attempt) -> Result<Session, AuthError>
where
    S: FormStore,
    P: IdentityProvider + ?Sized,
    N: Navigator + ?Sized,
{
    store.update_form(|form| form.begin(&attempt));

    let outcome = perform(provider, &attempt).await;
    if let Err(err) = &outcome {
        log::warn!("authentication attempt failed: {err}");
    }

    let mut navigate = false;
    store.update_form(|form| navigate = form.finish(&outcome));
    if navigate {
        if let Ok(session) = &outcome {
            store.store_session(session);
        }
        navigator.navigate_to(POST_AUTH_PATH);
    }
    outcome
}

/// Identity provider used by the browser bundle.
///
/// # Errors
///
/// Returns an error when the build-time config is incomplete.
#[cfg(feature = "hydrate")]
pub fn browser_provider() -> Result<identity::FirebaseAuth<crate::net::popup::BrowserPopup>, AuthError> {
    let config = crate::config::ClientConfig::from_build_env()?;
    identity::FirebaseAuth::with_popup(config.identity, crate::net::popup::BrowserPopup::new(config.popup_handler_url))
}
