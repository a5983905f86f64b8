use super::*;
use crate::state::login::{AttemptStatus, AuthMode};

#[test]
fn status_hint_absent_when_idle_or_resolved() {
    for status in [AttemptStatus::Idle, AttemptStatus::Succeeded, AttemptStatus::Failed] {
        let form = LoginForm { status, ..LoginForm::default() };
        assert_eq!(status_hint(&form), None, "{status:?}");
    }
}

#[test]
fn status_hint_follows_credentials_mode_while_pending() {
    let mut form = LoginForm::default();
    let attempt = form.credentials_attempt();
    form.begin(&attempt);
    assert_eq!(status_hint(&form), Some("Signing in..."));

    form.toggle_mode();
    let attempt = form.credentials_attempt();
    form.begin(&attempt);
    assert_eq!(status_hint(&form), Some("Creating account..."));
}

#[test]
fn status_hint_names_federated_provider_regardless_of_mode() {
    let mut form = LoginForm { mode: AuthMode::Register, ..LoginForm::default() };
    form.begin(&Attempt::Federated(FederatedProvider::Google));
    assert_eq!(status_hint(&form), Some("Waiting for Google..."));

    form.begin(&Attempt::Federated(FederatedProvider::Apple));
    assert_eq!(status_hint(&form), Some("Waiting for Apple..."));

    form.finish(&Err(identity::AuthError::Popup("popup blocked".to_owned())));
    assert_eq!(status_hint(&form), None);
}
