//! Response payloads.

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The freshly minted session token.
    pub token: String,
}

/// Body of `GET /api/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Whether the supplied credential maps to an active session.
    pub authenticated: bool,
}

/// Generic message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Body of `GET /api/connections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionsResponse {
    /// Current live viewer connection count.
    pub connections: usize,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when the server is up.
    pub status: String,
}
