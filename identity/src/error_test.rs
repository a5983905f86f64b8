use super::*;

#[test]
fn rejected_message_is_provider_text_verbatim() {
    let err = AuthError::Rejected { status: 400, message: "INVALID_PASSWORD".to_owned() };
    assert_eq!(err.message(), "INVALID_PASSWORD");
    assert_eq!(err.to_string(), "INVALID_PASSWORD");
}

#[test]
fn rejected_code_strips_detail_suffix() {
    let err = AuthError::Rejected {
        status: 400,
        message: "WEAK_PASSWORD : Password should be at least 6 characters".to_owned(),
    };
    assert_eq!(err.code(), Some("WEAK_PASSWORD"));
    assert_eq!(err.message(), "WEAK_PASSWORD : Password should be at least 6 characters");
}

#[test]
fn popup_message_is_bare_text() {
    let err = AuthError::Popup("popup blocked".to_owned());
    assert_eq!(err.message(), "popup blocked");
    assert_eq!(err.code(), None);
}

#[test]
fn transport_message_is_prefixed() {
    let err = AuthError::Transport("connection refused".to_owned());
    assert_eq!(err.message(), "identity request failed: connection refused");
}
