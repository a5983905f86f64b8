//! Identity-provider endpoints, continue URI and HTTP timeouts.
//!
//! Callers build this from whatever source they have (the browser bundle
//! uses compile-time values). Timeouts only apply to native builds; browser
//! fetch has no client-level timeouts.

pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_IDENTITY_REQUEST_URI: &str = "http://localhost";
pub const DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for IdentityTimeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_IDENTITY_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Web API key of the identity project.
    pub api_key: String,
    /// REST base URL, without trailing slash.
    pub base_url: String,
    /// Continue URI sent with federated credential exchanges.
    pub request_uri: String,
    pub timeouts: IdentityTimeouts,
}

impl IdentityConfig {
    /// Config with default endpoints for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_IDENTITY_BASE_URL.to_owned(),
            request_uri: DEFAULT_IDENTITY_REQUEST_URI.to_owned(),
            timeouts: IdentityTimeouts::default(),
        }
    }

    /// Override the REST base URL (used to point at an emulator or mock).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Override the continue URI sent with `accounts:signInWithIdp`.
    #[must_use]
    pub fn with_request_uri(mut self, request_uri: &str) -> Self {
        self.request_uri = request_uri.to_owned();
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

