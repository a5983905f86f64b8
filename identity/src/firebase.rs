//! Firebase Auth REST client.
//!
//! Talks to the Identity Toolkit v1 endpoints:
//! `accounts:signInWithPassword`, `accounts:signUp` and
//! `accounts:signInWithIdp`. Federated sign-in first runs the configured
//! [`PopupFlow`] and then exchanges its credential.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses carrying `{"error": {"message": ...}}` become
//! [`AuthError::Rejected`] with the provider message untouched. Anything else
//! maps to transport or parse errors.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::error::AuthError;
use crate::provider::{IdentityProvider, NoPopup, PopupFlow};
use crate::types::{IdpCredential, ProviderDescriptor, Session};

#[cfg(test)]
#[path = "firebase_test.rs"]
mod firebase_test;

const SIGN_IN_WITH_PASSWORD: &str = "accounts:signInWithPassword";
const SIGN_UP: &str = "accounts:signUp";
const SIGN_IN_WITH_IDP: &str = "accounts:signInWithIdp";

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpRequest<'a> {
    post_body: &'a str,
    request_uri: &'a str,
    return_idp_credential: bool,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<String>,
    #[serde(default)]
    provider_id: Option<String>,
    #[serde(default)]
    is_new_user: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

fn account_to_session(resp: AccountResponse, default_provider: &str, default_new_user: bool) -> Session {
    Session {
        local_id: resp.local_id,
        email: resp.email.filter(|e| !e.is_empty()),
        display_name: resp.display_name.filter(|n| !n.is_empty()),
        id_token: resp.id_token,
        refresh_token: resp.refresh_token,
        expires_in_secs: resp
            .expires_in
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0),
        provider_id: resp.provider_id.unwrap_or_else(|| default_provider.to_owned()),
        is_new_user: resp.is_new_user.unwrap_or(default_new_user),
    }
}

/// Turn a non-success response body into the matching error.
///
/// Only a Firebase error envelope counts as a rejection; proxies and outages
/// answering with other bodies are transport failures.
fn rejection_from_body(status: u16, body: &str) -> AuthError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => AuthError::Rejected { status, message: envelope.error.message },
        Err(_) => AuthError::Transport(format!("HTTP {status}")),
    }
}

// =============================================================================
// CLIENT
// =============================================================================

/// Identity provider backed by the Firebase Auth REST API.
pub struct FirebaseAuth<F = NoPopup> {
    http: reqwest::Client,
    config: IdentityConfig,
    popup: F,
}

impl FirebaseAuth<NoPopup> {
    /// Build a client without a popup flow; federated sign-in will fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: IdentityConfig) -> Result<Self, AuthError> {
        Self::with_popup(config, NoPopup)
    }
}

impl<F: PopupFlow> FirebaseAuth<F> {
    /// Build a client that runs `popup` for federated sign-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_popup(config: IdentityConfig, popup: F) -> Result<Self, AuthError> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config, popup })
    }

    fn endpoint(&self, method: &str) -> String {
        format!("{}/{method}?key={}", self.config.base_url, self.config.api_key)
    }

    async fn post<B: Serialize + ?Sized>(&self, method: &str, body: &B) -> Result<AccountResponse, AuthError> {
        let resp = self
            .http
            .post(self.endpoint(method))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = rejection_from_body(status.as_u16(), &text);
            tracing::debug!(%method, status = status.as_u16(), code = ?err.code(), "identity request rejected");
            return Err(err);
        }

        serde_json::from_str(&text).map_err(|e| AuthError::Parse(e.to_string()))
    }

    async fn exchange_credential(&self, credential: &IdpCredential) -> Result<Session, AuthError> {
        let post_body = credential
            .post_body()
            .ok_or_else(|| AuthError::Popup("provider returned no token".to_owned()))?;
        let request = IdpRequest {
            post_body: &post_body,
            request_uri: &self.config.request_uri,
            return_idp_credential: true,
            return_secure_token: true,
        };
        let resp = self.post(SIGN_IN_WITH_IDP, &request).await?;
        Ok(account_to_session(resp, credential.provider.provider_id(), false))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &IdentityConfig) -> Result<reqwest::Client, AuthError> {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .build()
        .map_err(|e| AuthError::HttpClientBuild(e.to_string()))
}

// Browser fetch has no client-level timeouts.
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &IdentityConfig) -> Result<reqwest::Client, AuthError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| AuthError::HttpClientBuild(e.to_string()))
}

#[async_trait(?Send)]
impl<F: PopupFlow> IdentityProvider for FirebaseAuth<F> {
    async fn sign_in_with_email_and_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = PasswordRequest { email, password, return_secure_token: true };
        let resp = self.post(SIGN_IN_WITH_PASSWORD, &request).await?;
        Ok(account_to_session(resp, "password", false))
    }

    async fn create_user_with_email_and_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = PasswordRequest { email, password, return_secure_token: true };
        let resp = self.post(SIGN_UP, &request).await?;
        Ok(account_to_session(resp, "password", true))
    }

    async fn sign_in_with_popup(&self, provider: &ProviderDescriptor) -> Result<Session, AuthError> {
        let credential = self.popup.authorize(provider).await?;
        if credential.provider != provider.provider {
            return Err(AuthError::Popup(format!(
                "popup returned a {} credential for a {} sign-in",
                credential.provider.provider_id(),
                provider.provider_id()
            )));
        }
        self.exchange_credential(&credential).await
    }
}
