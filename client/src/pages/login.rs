//! Login page: email/password form with register toggle, plus Apple and
//! Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every action becomes one `Attempt` run by `net::auth_flow::run` against the
//! browser identity provider. On success the session lands in the app-wide
//! `AuthState` and the router moves to `/dashboard`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use identity::FederatedProvider;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::auth_flow::Attempt;
use crate::state::auth::AuthState;
use crate::state::login::LoginForm;

/// Inline hint shown while an attempt is outstanding.
fn status_hint(form: &LoginForm) -> Option<&'static str> {
    form.pending_label()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    // Submit stays enabled while a request is outstanding; the last attempt
    // to resolve decides the final form state.
    let dispatch = move |attempt: Attempt| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::auth_flow::{FormStore, RouterNavigator, SignalStore, browser_provider, run};

            let store = SignalStore { form, auth };
            let navigator = RouterNavigator(navigate.clone());
            leptos::task::spawn_local(async move {
                match browser_provider() {
                    Ok(provider) => {
                        let _ = run(&store, &provider, &navigator, attempt).await;
                    }
                    Err(err) => {
                        log::error!("identity provider unavailable: {err}");
                        store.update_form(|f| {
                            f.finish(&Err(err));
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (attempt, auth, &navigate);
        }
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            dispatch(form.with(LoginForm::credentials_attempt));
        }
    };
    let on_apple = {
        let dispatch = dispatch.clone();
        move |_: leptos::ev::MouseEvent| dispatch(Attempt::Federated(FederatedProvider::Apple))
    };
    let on_google = move |_: leptos::ev::MouseEvent| dispatch(Attempt::Federated(FederatedProvider::Google));

    let mode = move || form.with(|f| f.mode);

    view! {
        <div class="login-container col-12 col-t-6 col-d-6">
            <div class="login-container-title col-12">
                <h2 class="col-12">{move || mode().title()}</h2>
                <p>{move || mode().subtitle()}</p>
            </div>
            <form class="form-container col-12" on:submit=on_submit>
                <input
                    class="input-field"
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.update_email(event_target_value(&ev)))
                />
                <input
                    class="input-field"
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.update_password(event_target_value(&ev)))
                />
                <button class="submit-button" type="submit">
                    {move || mode().submit_label()}
                </button>
            </form>
            <div class="other-sign col-12">
                <button class="apple-signin-button" on:click=on_apple>
                    "Sign in with Apple"
                </button>
                <button class="google-signin-button" on:click=on_google>
                    "Sign in with Google"
                </button>
                <Show when=move || form.with(|f| status_hint(f).is_some())>
                    <p class="login-status">{move || form.with(|f| status_hint(f).unwrap_or_default())}</p>
                </Show>
                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                </Show>
                <button class="toggle-auth-button" on:click=move |_| form.update(LoginForm::toggle_mode)>
                    {move || mode().toggle_label()}
                </button>
            </div>
        </div>
    }
}
