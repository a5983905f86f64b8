use identity::config::{DEFAULT_IDENTITY_BASE_URL, DEFAULT_IDENTITY_REQUEST_URI};

use super::*;

#[test]
fn from_values_requires_api_key() {
    assert!(matches!(ClientConfig::from_values(None, None, None, None), Err(AuthError::Config(_))));
    assert!(matches!(ClientConfig::from_values(Some("  "), None, None, None), Err(AuthError::Config(_))));
}

#[test]
fn from_values_applies_defaults() {
    let cfg = ClientConfig::from_values(Some("key"), None, Some(" "), Some("")).unwrap();
    assert_eq!(cfg.identity.api_key, "key");
    assert_eq!(cfg.identity.base_url, DEFAULT_IDENTITY_BASE_URL);
    assert_eq!(cfg.identity.request_uri, DEFAULT_IDENTITY_REQUEST_URI);
    assert_eq!(cfg.popup_handler_url, DEFAULT_POPUP_HANDLER_URL);
}

#[test]
fn from_values_applies_overrides() {
    let cfg = ClientConfig::from_values(
        Some("key"),
        Some("http://localhost:9099/identitytoolkit.googleapis.com/v1/"),
        Some(" https://app.example.com/login "),
        Some("https://auth.example.com/__/popup"),
    )
    .unwrap();
    assert_eq!(cfg.identity.base_url, "http://localhost:9099/identitytoolkit.googleapis.com/v1");
    assert_eq!(cfg.identity.request_uri, "https://app.example.com/login");
    assert_eq!(cfg.popup_handler_url, "https://auth.example.com/__/popup");
}
