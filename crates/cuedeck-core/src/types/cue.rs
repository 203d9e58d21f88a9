//! Cue domain types.
//!
//! A cue is a named stage-effect definition — a color or an animation —
//! identified by a server-assigned id. The full collection is persisted as a
//! single JSON array blob; these types define its wire and storage shape.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of effect a cue renders. Unknown kinds are rejected at
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CueKind {
    /// `value` is a hex color, e.g. `"#ff0000"`.
    Color,
    /// `value` is a URL to an animation asset.
    Animation,
}

/// A stage-effect definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cue {
    /// Server-assigned unique identifier.
    pub id: String,
    /// Display name shown in the control panel.
    pub name: String,
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: CueKind,
    /// Kind-dependent value.
    pub value: String,
}

impl Cue {
    /// Build a cue from a create payload, assigning a fresh id.
    pub fn from_payload(payload: CreateCuePayload) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            kind: payload.kind,
            value: payload.value,
        }
    }
}

/// Payload for creating a cue. Never carries an id; ids are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCuePayload {
    /// Display name.
    pub name: String,
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: CueKind,
    /// Kind-dependent value.
    pub value: String,
}

/// Payload for updating an existing cue. The target id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCuePayload {
    /// Display name.
    pub name: String,
    /// Effect kind.
    #[serde(rename = "type")]
    pub kind: CueKind,
    /// Kind-dependent value.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_serializes_kind_as_type() {
        let cue = Cue {
            id: "abc".to_string(),
            name: "red".to_string(),
            kind: CueKind::Color,
            value: "#ff0000".to_string(),
        };
        let json = serde_json::to_value(&cue).unwrap();
        assert_eq!(json["type"], "color");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result: Result<CreateCuePayload, _> = serde_json::from_str(
            r#"{"name": "strobe", "type": "strobe", "value": "fast"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn from_payload_assigns_unique_ids() {
        let payload = CreateCuePayload {
            name: "red".to_string(),
            kind: CueKind::Color,
            value: "#ff0000".to_string(),
        };
        let a = Cue::from_payload(payload.clone());
        let b = Cue::from_payload(payload);
        assert_ne!(a.id, b.id);
    }
}
