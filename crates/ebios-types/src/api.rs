//! REST wire bodies shared by the server handlers and the client transport.
//!
//! Field names follow the browser widget's camelCase JSON (`sessionId`).
//! Request fields are optional so that a missing field reaches validation
//! instead of failing JSON extraction.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            session_id: Some(session_id.into()),
        }
    }
}

/// Successful body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of `POST /api/clear-history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearHistoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Body returned by `POST /api/clear-history` (always `success: true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearHistoryResponse {
    pub success: bool,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    /// RFC 3339 timestamp of the response.
    pub timestamp: String,
}

impl HealthStatus {
    pub const ONLINE: &'static str = "online";

    pub fn is_online(&self) -> bool {
        self.status == Self::ONLINE
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_uses_camel_case_session_id() {
        let json = serde_json::to_value(ChatRequest::new("Hello", "abc")).unwrap();
        assert_eq!(json["message"], "Hello");
        assert_eq!(json["sessionId"], "abc");
    }

    #[test]
    fn test_chat_request_missing_fields_deserialize_as_none() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert_eq!(req.message.as_deref(), Some("hi"));
        assert!(req.session_id.is_none());
    }

    #[test]
    fn test_error_body_omits_missing_details() {
        let body = ErrorBody {
            error: "bad".to_string(),
            details: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"bad"}"#);
    }
}
