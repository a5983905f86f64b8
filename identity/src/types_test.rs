use super::*;

fn session(email: Option<&str>, display_name: Option<&str>) -> Session {
    Session {
        local_id: "uid-1".to_owned(),
        email: email.map(str::to_owned),
        display_name: display_name.map(str::to_owned),
        id_token: "id".to_owned(),
        refresh_token: "refresh".to_owned(),
        expires_in_secs: 3600,
        provider_id: "password".to_owned(),
        is_new_user: false,
    }
}

#[test]
fn session_label_prefers_email_then_name_then_id() {
    assert_eq!(session(Some("a@b.com"), Some("Alice")).label(), "a@b.com");
    assert_eq!(session(None, Some("Alice")).label(), "Alice");
    assert_eq!(session(None, None).label(), "uid-1");
}

#[test]
fn provider_ids_match_identity_service_names() {
    assert_eq!(FederatedProvider::Apple.provider_id(), "apple.com");
    assert_eq!(FederatedProvider::Google.provider_id(), "google.com");
}

#[test]
fn descriptors_are_bound_to_their_provider() {
    let apple = FederatedProvider::Apple.descriptor();
    assert_eq!(apple, ProviderDescriptor::apple());
    assert_eq!(apple.provider_id(), "apple.com");
    assert_eq!(apple.scopes, vec!["email", "name"]);

    let google = FederatedProvider::Google.descriptor();
    assert_eq!(google.provider_id(), "google.com");
    assert_eq!(google.custom_parameters.get("prompt").map(String::as_str), Some("select_account"));
}

#[test]
fn post_body_includes_tokens_and_provider() {
    let cred = IdpCredential {
        provider: FederatedProvider::Apple,
        id_token: Some("jwt".to_owned()),
        access_token: None,
        nonce: Some("n1".to_owned()),
    };
    assert_eq!(cred.post_body().as_deref(), Some("id_token=jwt&nonce=n1&providerId=apple.com"));
}

#[test]
fn post_body_requires_a_token() {
    let cred = IdpCredential { provider: FederatedProvider::Google, id_token: None, access_token: None, nonce: None };
    assert_eq!(cred.post_body(), None);
}

#[test]
fn credential_deserializes_with_missing_optional_fields() {
    let cred: IdpCredential = serde_json::from_value(serde_json::json!({
        "provider": "Google",
        "access_token": "ya29"
    }))
    .unwrap();
    assert_eq!(cred.provider, FederatedProvider::Google);
    assert_eq!(cred.access_token.as_deref(), Some("ya29"));
    assert_eq!(cred.id_token, None);
}

#[test]
fn post_body_escapes_reserved_characters() {
    let cred = IdpCredential {
        provider: FederatedProvider::Google,
        id_token: None,
        access_token: Some("ya29&x=1".to_owned()),
        nonce: Some("a b=c".to_owned()),
    };
    assert_eq!(
        cred.post_body().as_deref(),
        Some("access_token=ya29%26x%3D1&nonce=a+b%3Dc&providerId=google.com")
    );
}
