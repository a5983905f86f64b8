//! Browser-bundle configuration baked in at compile time.
//!
//! The WASM bundle cannot read the server's environment, so the identity
//! settings come from `option_env!` when the bundle is built:
//!
//! - `FIREBASE_API_KEY` (required)
//! - `IDENTITY_BASE_URL` (optional, defaults to the Identity Toolkit endpoint)
//! - `IDENTITY_REQUEST_URI` (optional, continue URI for federated exchanges,
//!   defaults to `http://localhost`)
//! - `AUTH_POPUP_HANDLER_URL` (optional, defaults to `/__/auth/popup`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use identity::{AuthError, IdentityConfig};

pub const DEFAULT_POPUP_HANDLER_URL: &str = "/__/auth/popup";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub identity: IdentityConfig,
    pub popup_handler_url: String,
}

impl ClientConfig {
    /// Config from values captured when the bundle was compiled.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] when no API key was provided at build time.
    pub fn from_build_env() -> Result<Self, AuthError> {
        Self::from_values(
            option_env!("FIREBASE_API_KEY"),
            option_env!("IDENTITY_BASE_URL"),
            option_env!("IDENTITY_REQUEST_URI"),
            option_env!("AUTH_POPUP_HANDLER_URL"),
        )
    }

    fn from_values(
        api_key: Option<&str>,
        base_url: Option<&str>,
        request_uri: Option<&str>,
        popup_handler_url: Option<&str>,
    ) -> Result<Self, AuthError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AuthError::Config("FIREBASE_API_KEY was not set when the bundle was built".to_owned()))?;

        let mut identity = IdentityConfig::new(api_key);
        if let Some(base_url) = base_url.filter(|url| !url.trim().is_empty()) {
            identity = identity.with_base_url(base_url.trim());
        }
        if let Some(request_uri) = request_uri.map(str::trim).filter(|uri| !uri.is_empty()) {
            identity = identity.with_request_uri(request_uri);
        }
        let popup_handler_url = popup_handler_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_POPUP_HANDLER_URL)
            .to_owned();

        Ok(Self { identity, popup_handler_url })
    }
}
