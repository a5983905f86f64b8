//! Dashboard page: the fixed destination after sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the in-memory `AuthState` filled by the login page. Visitors without
//! a session are sent back to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{LOGIN_PATH, install_unauth_redirect};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        auth.update(|state| state.session = None);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <h2>"Dashboard"</h2>
            <Show when=move || auth.with(AuthState::is_signed_in)>
                <p class="dashboard-greeting">
                    "Signed in as "
                    <span>{move || auth.with(|a| a.user_label().unwrap_or_default().to_owned())}</span>
                </p>
            </Show>
            <button class="toggle-auth-button" on:click=on_sign_out>
                "Sign out"
            </button>
        </div>
    }
}
