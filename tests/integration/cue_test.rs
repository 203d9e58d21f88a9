//! Integration tests for cue CRUD.

use http::StatusCode;

use crate::helpers::TestApp;

fn red_cue() -> serde_json::Value {
    serde_json::json!({ "name": "red", "type": "color", "value": "#ff0000" })
}

#[tokio::test]
async fn test_list_cues_is_public_and_empty() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/cues", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = TestApp::new();

    let response = app.request("POST", "/api/cues", Some(red_cue()), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_then_list_roundtrip() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request("POST", "/api/cues", Some(red_cue()), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().unwrap().to_string();
    assert_eq!(response.body["name"], "red");
    assert_eq!(response.body["type"], "color");
    assert_eq!(response.body["value"], "#ff0000");

    let response = app.request("GET", "/api/cues", None, None).await;
    let cues = response.body.as_array().unwrap();
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0]["id"], id.as_str());
}

#[tokio::test]
async fn test_create_rejects_unknown_type() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request(
            "POST",
            "/api/cues",
            Some(serde_json::json!({ "name": "strobe", "type": "strobe", "value": "fast" })),
            Some(&token),
        )
        .await;

    assert!(response.status.is_client_error());
}

#[tokio::test]
async fn test_update_cue() {
    let app = TestApp::new();
    let token = app.login().await;

    let created = app
        .request("POST", "/api/cues", Some(red_cue()), Some(&token))
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/cues/{id}"),
            Some(serde_json::json!({
                "name": "sunrise",
                "type": "animation",
                "value": "https://example.com/sunrise.json",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id.as_str());
    assert_eq!(response.body["name"], "sunrise");
    assert_eq!(response.body["type"], "animation");
}

#[tokio::test]
async fn test_update_unknown_id_is_404_and_unchanged() {
    let app = TestApp::new();
    let token = app.login().await;

    app.request("POST", "/api/cues", Some(red_cue()), Some(&token))
        .await;

    let response = app
        .request(
            "PUT",
            "/api/cues/no-such-id",
            Some(red_cue()),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/cues", None, None).await;
    let cues = response.body.as_array().unwrap();
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0]["name"], "red");
}

#[tokio::test]
async fn test_delete_cue() {
    let app = TestApp::new();
    let token = app.login().await;

    let created = app
        .request("POST", "/api/cues", Some(red_cue()), Some(&token))
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let response = app
        .request("DELETE", &format!("/api/cues/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", "/api/cues", None, None).await;
    assert_eq!(response.body, serde_json::json!([]));
}

#[tokio::test]
async fn test_delete_unknown_id_is_404() {
    let app = TestApp::new();
    let token = app.login().await;

    let response = app
        .request("DELETE", "/api/cues/no-such-id", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_mutations_reject_expired_style_tokens() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/cues", Some(red_cue()), Some("stale-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
