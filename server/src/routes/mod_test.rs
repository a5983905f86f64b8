use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_login() {
    use axum::http::header::LOCATION;
    use axum::response::IntoResponse;

    let resp = root_redirect().await.into_response();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some("/login"));
}

#[test]
fn bundled_stylesheet_covers_login_markup() {
    let css = include_str!("../../../style/main.css");
    for class in [".login-container", ".input-field", ".submit-button", ".error", ".toggle-auth-button"] {
        assert!(css.contains(class), "missing {class}");
    }
}
