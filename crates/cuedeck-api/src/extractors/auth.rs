//! `AuthSession` extractor — pulls the bearer token from the Authorization
//! header and requires an active session before the handler runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

/// Proof of an active administrator session, available in handlers that
/// mutate cue state or trigger broadcasts.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The validated session token.
    pub token: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());

        let token = state.session_gate.require(header).await?;
        Ok(AuthSession { token })
    }
}
