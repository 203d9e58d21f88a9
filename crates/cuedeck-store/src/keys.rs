//! Canonical key builders for the Cuedeck key-value layout.

/// Key holding the serialized array of all cue definitions.
pub const CUES_KEY: &str = "cues_list";

/// Key for a session token marker. Present (with TTL) means the session is
/// active; absent means expired, revoked, or never issued.
pub fn session_key(token: &str) -> String {
    format!("session:{token}")
}
