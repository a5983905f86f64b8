//! Browser popup flow for Apple and Google sign-in.
//!
//! The popup loads the configured handler page, which runs the provider's
//! own sign-in and posts one message back to this window: either the
//! `IdpCredential` JSON itself or `{"error": "..."}`. Messages from other
//! origins are ignored. Closing the popup ends the attempt with an error.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

#[cfg(any(test, feature = "hydrate"))]
use identity::{AuthError, IdpCredential, ProviderDescriptor};

#[cfg(any(test, feature = "hydrate"))]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PopupMessage {
    Failure { error: String },
    Credential(IdpCredential),
}

/// Handler URL with the provider, scopes and custom parameters as query.
#[cfg(any(test, feature = "hydrate"))]
fn popup_url(handler_url: &str, provider: &ProviderDescriptor) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("providerId", provider.provider_id())
        .append_pair("scopes", &provider.scopes.join(","));
    for (key, value) in &provider.custom_parameters {
        query.append_pair(key, value);
    }
    format!("{handler_url}?{}", query.finish())
}

/// `scheme://host[:port]` of the handler page.
#[cfg(any(test, feature = "hydrate"))]
fn handler_origin(handler_url: &str) -> String {
    let Some((scheme, rest)) = handler_url.split_once("://") else {
        return String::new();
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    format!("{scheme}://{host}")
}

#[cfg(any(test, feature = "hydrate"))]
fn parse_popup_message(raw: &str) -> Result<IdpCredential, AuthError> {
    let message: PopupMessage = serde_json::from_str(raw)
        .map_err(|_| AuthError::Popup("popup returned no credential".to_owned()))?;
    match message {
        PopupMessage::Failure { error } => Err(AuthError::Popup(error)),
        PopupMessage::Credential(credential) => Ok(credential),
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserPopup;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::future::{Either, select};
    use identity::{AuthError, IdpCredential, PopupFlow, ProviderDescriptor};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::{handler_origin, parse_popup_message, popup_url};

    const POPUP_TARGET: &str = "identity-popup";
    const POPUP_FEATURES: &str = "width=500,height=640";
    const CLOSED_POLL_MS: u32 = 500;

    /// Popup flow driven by `window.open` and `postMessage`.
    pub struct BrowserPopup {
        handler_url: String,
    }

    impl BrowserPopup {
        #[must_use]
        pub fn new(handler_url: String) -> Self {
            Self { handler_url }
        }
    }

    #[async_trait(?Send)]
    impl PopupFlow for BrowserPopup {
        async fn authorize(&self, provider: &ProviderDescriptor) -> Result<IdpCredential, AuthError> {
            let window = web_sys::window().ok_or_else(|| AuthError::Popup("no browser window".to_owned()))?;
            let url = popup_url(&self.handler_url, provider);
            let popup = window
                .open_with_url_and_target_and_features(&url, POPUP_TARGET, POPUP_FEATURES)
                .ok()
                .flatten()
                .ok_or_else(|| AuthError::Popup("popup blocked".to_owned()))?;

            let (tx, rx) = oneshot::channel::<Result<IdpCredential, AuthError>>();
            let tx = Rc::new(RefCell::new(Some(tx)));
            let mut origin = handler_origin(&self.handler_url);
            if origin.is_empty() {
                // Relative handler URL: same origin as the app.
                origin = window.location().origin().unwrap_or_default();
            }
            let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
                if ev.origin() != origin {
                    return;
                }
                let Some(raw) = ev.data().as_string() else {
                    return;
                };
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(parse_popup_message(&raw));
                }
            });
            window
                .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
                .map_err(|_| AuthError::Popup("could not listen for popup messages".to_owned()))?;

            let closed_watch = async {
                loop {
                    gloo_timers::future::TimeoutFuture::new(CLOSED_POLL_MS).await;
                    if popup.closed().unwrap_or(true) {
                        break;
                    }
                }
            };
            futures::pin_mut!(closed_watch);

            let result = match select(rx, closed_watch).await {
                Either::Left((Ok(result), _)) => result,
                Either::Left((Err(_), _)) | Either::Right(((), _)) => {
                    Err(AuthError::Popup("popup closed before sign-in completed".to_owned()))
                }
            };

            let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
            let _ = popup.close();
            result
        }
    }
}
