//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes behind sign-in apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// `true` when the page should send the visitor back to the sign-in form.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/login` whenever no session is held.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
