//! Auth handlers — login, verify, logout.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use crate::dto::request::LoginRequest;
use crate::dto::response::{TokenResponse, VerifyResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Pull the Authorization header as a string, if present and valid UTF-8.
fn auth_header(headers: &HeaderMap) -> Option<&str> {
    headers.get("authorization").and_then(|v| v.to_str().ok())
}

/// POST /api/login — exchange the admin password for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.session_gate.login(&req.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// GET /api/verify — check whether the supplied credential is active.
///
/// Never errors: malformed credentials and an unreachable store both report
/// `authenticated: false`.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Json<VerifyResponse> {
    let authenticated = state.session_gate.verify(auth_header(&headers)).await;
    Json(VerifyResponse { authenticated })
}

/// POST /api/logout — best-effort session invalidation, always 204.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    state.session_gate.logout(auth_header(&headers)).await;
    StatusCode::NO_CONTENT
}
