//! Integration tests for cue triggering and the connection count endpoint.

use std::sync::Arc;

use http::StatusCode;
use tokio::sync::mpsc;

use cuedeck_realtime::ConnectionHandle;

use crate::helpers::TestApp;

/// Register a spy viewer connection directly in the registry and return the
/// receiving end of its outbound queue.
fn register_spy(app: &TestApp) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(8);
    app.state.registry.register(Arc::new(ConnectionHandle::new(tx)));
    rx
}

#[tokio::test]
async fn test_trigger_broadcasts_to_viewers() {
    let app = TestApp::new();
    let token = app.login().await;
    let mut rx = register_spy(&app);

    let response = app
        .request("POST", "/api/cues/trigger/cue-42", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Cue cue-42 triggered");
    assert_eq!(rx.recv().await.unwrap(), "cue-42");
}

#[tokio::test]
async fn test_trigger_without_auth_never_broadcasts() {
    let app = TestApp::new();
    let mut rx = register_spy(&app);

    let response = app
        .request("POST", "/api/cues/trigger/cue-42", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(matches!(
        rx.try_recv(),
        Err(mpsc::error::TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn test_trigger_does_not_check_cue_exists() {
    // Triggering an id absent from the repository still broadcasts it.
    let app = TestApp::new();
    let token = app.login().await;
    let mut rx = register_spy(&app);

    let response = app
        .request("POST", "/api/cues/trigger/ghost-cue", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(rx.recv().await.unwrap(), "ghost-cue");
}

#[tokio::test]
async fn test_connection_count_tracks_registry() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/connections", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["connections"], 0);

    let _rx = register_spy(&app);
    let response = app.request("GET", "/api/connections", None, None).await;
    assert_eq!(response.body["connections"], 1);
}

#[tokio::test]
async fn test_dead_viewer_is_pruned_on_trigger() {
    let app = TestApp::new();
    let token = app.login().await;

    let mut rx_live = register_spy(&app);
    let rx_dead = register_spy(&app);
    drop(rx_dead);

    app.request("POST", "/api/cues/trigger/cue-9", None, Some(&token))
        .await;

    assert_eq!(rx_live.recv().await.unwrap(), "cue-9");
    assert_eq!(app.state.registry.count(), 1);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
