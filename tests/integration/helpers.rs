//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cuedeck_api::{build_router, AppState};
use cuedeck_core::config::auth::AuthConfig;
use cuedeck_core::config::AppConfig;
use cuedeck_store::memory::MemoryKvStore;
use cuedeck_store::StoreManager;

/// The admin password every test app is configured with.
pub const TEST_PASSWORD: &str = "test-password";

/// Test application context backed by an in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application state, for direct access to the registry and services.
    pub state: AppState,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body; `Null` when the body is empty.
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with the admin password configured.
    pub fn new() -> Self {
        Self::with_admin_password(Some(TEST_PASSWORD.to_string()))
    }

    /// Create a test application with an explicit (possibly absent) admin
    /// password.
    pub fn with_admin_password(admin_password: Option<String>) -> Self {
        let mut config = test_config();
        config.auth = AuthConfig {
            admin_password,
            session_ttl_seconds: 3600,
        };

        let store = StoreManager::from_provider(Arc::new(MemoryKvStore::new(&config.store.memory)));
        let state = AppState::new(config, store);
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Issue a request against the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Log in with the test password and return the session token.
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(serde_json::json!({ "password": TEST_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["token"].as_str().unwrap().to_string()
    }
}

/// Config for tests: in-memory store, defaults elsewhere.
fn test_config() -> AppConfig {
    let mut config: AppConfig = serde_json::from_value(serde_json::json!({})).unwrap();
    config.store.provider = "memory".to_string();
    config
}
