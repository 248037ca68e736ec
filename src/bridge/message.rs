//! Cross-window auth protocol messages.
//!
//! The protocol surface is closed: five `type`-discriminated messages, no
//! versioning, no correlation ids. Each message is independently actionable.

use serde::{Deserialize, Serialize};

/// A message exchanged between the embedded client and its parent window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthMessage {
    /// Parent pushes a token into the embedded client.
    SetAuthToken { token: String },
    /// Parent clears the embedded client's auth state.
    ClearAuthToken,
    /// Parent asks for the current auth state without changing it.
    CheckAuthStatus,
    /// Embedded client asks the parent to push auth state.
    RequestAuth,
    /// Reply reporting the auth state after handling a message.
    AuthStatus { authenticated: bool },
}

impl AuthMessage {
    /// Parse an untrusted payload into a protocol message.
    ///
    /// Returns `None` for anything outside the closed set -- unknown `type`
    /// values, missing fields, or non-object payloads. Never raises.
    pub fn parse(payload: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(payload.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_auth_token_wire_format() {
        let msg = AuthMessage::parse(&json!({"type": "SET_AUTH_TOKEN", "token": "abc"}));
        assert_eq!(msg, Some(AuthMessage::SetAuthToken { token: "abc".into() }));
    }

    #[test]
    fn test_auth_status_serializes_with_type_tag() {
        let value = serde_json::to_value(AuthMessage::AuthStatus { authenticated: true }).unwrap();
        assert_eq!(value, json!({"type": "AUTH_STATUS", "authenticated": true}));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert_eq!(AuthMessage::parse(&json!({"type": "PING"})), None);
    }

    #[test]
    fn test_missing_token_field_is_rejected() {
        assert_eq!(AuthMessage::parse(&json!({"type": "SET_AUTH_TOKEN"})), None);
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert_eq!(AuthMessage::parse(&json!("SET_AUTH_TOKEN")), None);
        assert_eq!(AuthMessage::parse(&json!(null)), None);
        assert_eq!(AuthMessage::parse(&json!(42)), None);
    }
}
