//! Wire types for the assistant HTTP API.

use serde::{Deserialize, Serialize};
use twin_common::SessionId;

use crate::Role;

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Omitted from the JSON until the server has assigned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

/// Successful reply to `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<SessionId>,
}

/// Reply to `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Server-side history returned by `GET /conversation/{session_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub session_id: SessionId,
    #[serde(default)]
    pub messages: Vec<RecordedMessage>,
}

/// One stored turn. The server writes timestamps without a zone, so they
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedMessage {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_session_omits_field() {
        let req = ChatRequest {
            message: "hi".into(),
            session_id: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"message": "hi"}));
    }

    #[test]
    fn request_with_session_includes_field() {
        let req = ChatRequest {
            message: "hi".into(),
            session_id: Some("abc123".into()),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "hi", "session_id": "abc123"})
        );
    }

    #[test]
    fn response_requires_response_field() {
        let err = serde_json::from_value::<ChatResponse>(json!({"session_id": "abc"}));
        assert!(err.is_err());
    }

    #[test]
    fn response_rejects_non_string_reply() {
        let err = serde_json::from_value::<ChatResponse>(json!({"response": 42}));
        assert!(err.is_err());
    }

    #[test]
    fn response_session_id_may_be_missing_or_null() {
        let a: ChatResponse = serde_json::from_value(json!({"response": "x"})).unwrap();
        assert_eq!(a.session_id, None);
        let b: ChatResponse =
            serde_json::from_value(json!({"response": "x", "session_id": null})).unwrap();
        assert_eq!(b.session_id, None);
    }

    #[test]
    fn conversation_record_parses_server_shape() {
        let record: ConversationRecord = serde_json::from_value(json!({
            "session_id": "abc123",
            "messages": [
                {"role": "user", "content": "hi", "timestamp": "2026-10-19T10:00:00.123456"},
                {"role": "assistant", "content": "hello", "timestamp": "2026-10-19T10:00:01.000001"}
            ]
        }))
        .unwrap();
        assert_eq!(record.session_id.as_str(), "abc123");
        assert_eq!(record.messages.len(), 2);
        assert_eq!(record.messages[1].role, Role::Assistant);
        assert_eq!(
            record.messages[0].timestamp.as_deref(),
            Some("2026-10-19T10:00:00.123456")
        );
    }

    #[test]
    fn health_status_ok() {
        let status: HealthStatus = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(status.is_ok());
        let status: HealthStatus = serde_json::from_value(json!({"status": "degraded"})).unwrap();
        assert!(!status.is_ok());
    }
}
