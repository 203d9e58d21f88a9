//! Integration tests for the login/verify/logout flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "password": crate::helpers::TEST_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.get("token").is_none());
}

#[tokio::test]
async fn test_login_without_configured_password_is_server_error() {
    let app = TestApp::with_admin_password(None);

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "password": "anything" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_verify_after_login() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app.request("GET", "/api/verify", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], true);
}

#[tokio::test]
async fn test_verify_without_header_never_errors() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/verify", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], false);
}

#[tokio::test]
async fn test_verify_with_unknown_token() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/verify", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], false);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app.request("POST", "/api/logout", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/api/verify", None, Some(&token)).await;
    assert_eq!(response.body["authenticated"], false);
}

#[tokio::test]
async fn test_logout_without_header_is_still_204() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/logout", None, None).await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
}
