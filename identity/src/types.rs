//! Provider-neutral identity types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

// =============================================================================
// SESSION
// =============================================================================

/// Session information returned by a successful sign-in or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned user id.
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    /// Lifetime of `id_token` in seconds.
    pub expires_in_secs: u64,
    /// `password`, `apple.com` or `google.com`.
    pub provider_id: String,
    /// `true` when the call created the account.
    pub is_new_user: bool,
}

impl Session {
    /// Short label for logs and greetings: email, then display name, then id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.email
            .as_deref()
            .or(self.display_name.as_deref())
            .unwrap_or(&self.local_id)
    }
}

// =============================================================================
// FEDERATED PROVIDERS
// =============================================================================

/// Third-party account providers offered on the sign-in form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FederatedProvider {
    Apple,
    Google,
}

impl FederatedProvider {
    /// Provider id as understood by the identity service.
    #[must_use]
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Apple => "apple.com",
            Self::Google => "google.com",
        }
    }

    /// Preconfigured descriptor for this provider.
    #[must_use]
    pub fn descriptor(self) -> ProviderDescriptor {
        match self {
            Self::Apple => ProviderDescriptor::apple(),
            Self::Google => ProviderDescriptor::google(),
        }
    }
}

/// What to ask a federated provider for during a popup flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderDescriptor {
    pub provider: FederatedProvider,
    pub scopes: Vec<String>,
    pub custom_parameters: BTreeMap<String, String>,
}

impl ProviderDescriptor {
    /// Sign in with Apple, asking for email and name.
    #[must_use]
    pub fn apple() -> Self {
        Self {
            provider: FederatedProvider::Apple,
            scopes: vec!["email".to_owned(), "name".to_owned()],
            custom_parameters: BTreeMap::new(),
        }
    }

    /// Google sign-in with the account chooser always shown.
    #[must_use]
    pub fn google() -> Self {
        Self {
            provider: FederatedProvider::Google,
            scopes: vec!["openid".to_owned(), "email".to_owned(), "profile".to_owned()],
            custom_parameters: BTreeMap::from([("prompt".to_owned(), "select_account".to_owned())]),
        }
    }

    #[must_use]
    pub fn provider_id(&self) -> &'static str {
        self.provider.provider_id()
    }
}

/// Credential produced by a popup flow, exchanged for a [`Session`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdpCredential {
    pub provider: FederatedProvider,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub nonce: Option<String>,
}

impl IdpCredential {
    /// Form-encoded `postBody` for the credential exchange.
    ///
    /// Returns `None` when the credential carries no token at all.
    #[must_use]
    pub fn post_body(&self) -> Option<String> {
        if self.id_token.is_none() && self.access_token.is_none() {
            return None;
        }
        let mut body = url::form_urlencoded::Serializer::new(String::new());
        if let Some(token) = &self.id_token {
            body.append_pair("id_token", token);
        }
        if let Some(token) = &self.access_token {
            body.append_pair("access_token", token);
        }
        if let Some(nonce) = &self.nonce {
            body.append_pair("nonce", nonce);
        }
        body.append_pair("providerId", self.provider.provider_id());
        Some(body.finish())
    }
}
