//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication settings.
///
/// The administrator password is deliberately optional at the schema level:
/// a missing password is an operator mistake surfaced at login time as a
/// server error, never a client error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The single administrator password. Usually supplied via the
    /// `CUEDECK__AUTH__ADMIN_PASSWORD` environment variable.
    #[serde(default)]
    pub admin_password: Option<String>,
    /// Session lifetime in seconds. Sessions expire in the store, not in
    /// the application.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_password: None,
            session_ttl_seconds: default_session_ttl(),
        }
    }
}

/// 8 hours.
fn default_session_ttl() -> u64 {
    28800
}
