use super::*;
use std::collections::BTreeMap;

use identity::FederatedProvider;

#[test]
fn popup_url_carries_provider_scopes_and_parameters() {
    assert_eq!(
        popup_url("https://auth.example.com/__/popup", &ProviderDescriptor::google()),
        "https://auth.example.com/__/popup?providerId=google.com&scopes=openid%2Cemail%2Cprofile&prompt=select_account"
    );
    assert_eq!(
        popup_url("/__/auth/popup", &ProviderDescriptor::apple()),
        "/__/auth/popup?providerId=apple.com&scopes=email%2Cname"
    );
}

#[test]
fn popup_url_escapes_custom_parameters() {
    let descriptor = ProviderDescriptor {
        provider: FederatedProvider::Google,
        scopes: vec!["email".to_owned()],
        custom_parameters: BTreeMap::from([("login_hint".to_owned(), "a&b=c d".to_owned())]),
    };
    assert_eq!(
        popup_url("/popup", &descriptor),
        "/popup?providerId=google.com&scopes=email&login_hint=a%26b%3Dc+d"
    );
}

#[test]
fn handler_origin_strips_path_and_query() {
    assert_eq!(handler_origin("https://auth.example.com/__/popup?x=1"), "https://auth.example.com");
    assert_eq!(handler_origin("http://localhost:8080/popup"), "http://localhost:8080");
    assert_eq!(handler_origin("not a url"), "");
}

#[test]
fn parse_popup_message_accepts_bare_credential() {
    let credential = parse_popup_message(r#"{"provider":"Apple","id_token":"jwt"}"#).unwrap();
    assert_eq!(credential.provider, FederatedProvider::Apple);
    assert_eq!(credential.id_token.as_deref(), Some("jwt"));
    assert_eq!(credential.access_token, None);
}

#[test]
fn parse_popup_message_surfaces_handler_error() {
    let err = parse_popup_message(r#"{"error":"auth/popup-closed-by-user"}"#).unwrap_err();
    assert_eq!(err.message(), "auth/popup-closed-by-user");
}

#[test]
fn parse_popup_message_rejects_empty_and_garbage() {
    let no_credential = AuthError::Popup("popup returned no credential".to_owned());
    assert_eq!(parse_popup_message("{}").unwrap_err(), no_credential);
    assert_eq!(parse_popup_message(r#"{"provider":"Yahoo"}"#).unwrap_err(), no_credential);
    assert_eq!(parse_popup_message("not json").unwrap_err(), no_credential);
}
