//! The session gate — login, verify, logout, and the `require` primitive
//! that protects mutation and trigger endpoints.
//!
//! Token state machine: unknown -> active (on login, TTL-bound in the
//! store) -> expired/revoked (terminal). Expiry is store-enforced; the
//! application never tracks deadlines itself.

use std::time::Duration;

use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use cuedeck_core::config::auth::AuthConfig;
use cuedeck_core::error::AppError;
use cuedeck_core::result::AppResult;
use cuedeck_core::traits::kv::KvStore;

use cuedeck_store::keys::session_key;
use cuedeck_store::StoreManager;

use crate::bearer::{parse_bearer, BearerError};
use crate::token::mint_token;

/// Marker value stored under `session:<token>` while a session is active.
const SESSION_MARKER: &str = "active";

/// Validates bearer credentials against the session store and manages the
/// session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionGate {
    /// Backing session store.
    store: StoreManager,
    /// Admin password and TTL settings.
    config: AuthConfig,
}

impl SessionGate {
    /// Create a new gate over the given store.
    pub fn new(store: StoreManager, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Session TTL from configuration.
    fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.config.session_ttl_seconds)
    }

    /// Log in with the administrator password and mint a session token.
    ///
    /// A missing server-side password is an operator mistake and surfaces as
    /// a configuration error, not an authentication failure. A store write
    /// failure surfaces as-is so the boundary can map it to 503.
    pub async fn login(&self, password: &str) -> AppResult<String> {
        let secret = self.config.admin_password.as_deref().ok_or_else(|| {
            AppError::configuration("Admin password is not configured on the server")
        })?;

        if !bool::from(password.as_bytes().ct_eq(secret.as_bytes())) {
            warn!("Login attempt with incorrect password");
            return Err(AppError::unauthorized("Incorrect password"));
        }

        let token = mint_token();
        self.store
            .set_with_ttl(&session_key(&token), SESSION_MARKER, self.session_ttl())
            .await?;

        info!("Administrator session created");
        Ok(token)
    }

    /// Check whether a credential header carries an active session.
    ///
    /// This is a predicate: malformed input, an unknown or expired token,
    /// and an unreachable store all resolve to `false`. Loss of the trust
    /// store must never upgrade a caller's privilege.
    pub async fn verify(&self, header: Option<&str>) -> bool {
        let token = match parse_bearer(header) {
            Ok(t) => t,
            Err(_) => return false,
        };

        match self.store.exists(&session_key(token)).await {
            Ok(active) => active,
            Err(e) => {
                warn!(error = %e, "Session store unreachable during verify, failing closed");
                false
            }
        }
    }

    /// Best-effort session deletion. Never fails the caller: the client is
    /// expected to discard its local credential regardless of the outcome.
    pub async fn logout(&self, header: Option<&str>) {
        let token = match parse_bearer(header) {
            Ok(t) => t,
            Err(_) => return,
        };

        if let Err(e) = self.store.delete(&session_key(token)).await {
            warn!(error = %e, "Could not delete session from store during logout");
        } else {
            info!("Administrator session ended");
        }
    }

    /// Require an active session; the gating primitive for protected
    /// endpoints.
    ///
    /// The three credential failure shapes are logged distinctly but all
    /// surface as Unauthorized. A store connectivity failure surfaces as a
    /// store error (503-class) since it is an infrastructure fault, not a
    /// credential fault.
    pub async fn require(&self, header: Option<&str>) -> AppResult<String> {
        let token = match parse_bearer(header) {
            Ok(t) => t,
            Err(cause @ BearerError::MissingHeader) => {
                debug!("Rejected request: no credential supplied");
                return Err(AppError::unauthorized(cause.to_string()));
            }
            Err(cause) => {
                debug!(cause = %cause, "Rejected request: malformed credential");
                return Err(AppError::unauthorized(cause.to_string()));
            }
        };

        let active = self.store.exists(&session_key(token)).await?;
        if !active {
            debug!("Rejected request: invalid or expired session token");
            return Err(AppError::unauthorized("Invalid token or session expired"));
        }

        Ok(token.to_string())
    }
}
