//! Rich-presence payload definition.

use serde::Serialize;

use super::sink::PresenceFields;

/// Payload for one rich-presence update.
///
/// All fields are optional. Equality is structural; the publish gate relies
/// on that to skip redundant broadcasts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PresencePayload {
    /// Current playing status, e.g. "Looking for Squad".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Current game details, e.g. faction and server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Epoch seconds since start ("elapsed" counter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    /// Epoch seconds until end ("remaining" counter).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

impl PresencePayload {
    /// Map of only the present fields, keyed by wire name. This is what a
    /// broadcaster client receives; absent fields are stripped here,
    /// independent of any transport.
    pub fn present_fields(&self) -> PresenceFields {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => PresenceFields::new(),
        }
    }

    /// Whether no field is present at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_fields_strips_absent_ones() {
        let payload = PresencePayload {
            details: Some("New Conglomerate (Emerald)".to_string()),
            large_image: Some("hossin".to_string()),
            ..Default::default()
        };

        let fields = payload.present_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields.get("details").and_then(|v| v.as_str()),
            Some("New Conglomerate (Emerald)")
        );
        assert!(!fields.contains_key("state"));
        assert!(!fields.contains_key("start"));
    }

    #[test]
    fn test_empty_payload_has_no_fields() {
        let payload = PresencePayload::default();
        assert!(payload.is_empty());
        assert!(payload.present_fields().is_empty());
    }

    #[test]
    fn test_equality_is_structural() {
        let a = PresencePayload {
            state: Some("Idling".to_string()),
            ..Default::default()
        };
        let b = PresencePayload {
            state: Some("Idling".to_string()),
            ..Default::default()
        };
        assert_eq!(a, b);

        let c = PresencePayload {
            state: Some("Playing Solo".to_string()),
            ..Default::default()
        };
        assert_ne!(a, c);
    }
}
