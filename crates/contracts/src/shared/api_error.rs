//! Error body returned by the company API on non-success responses

use serde::{Deserialize, Serialize};

/// `{"error": "..."}` as sent by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Extract a non-empty error message from a raw response body.
    ///
    /// Returns `None` for bodies that are not JSON objects, carry no `error`
    /// field, or carry a blank one.
    pub fn message_from(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let message = value.as_object()?.get("error")?.as_str()?;
        if message.trim().is_empty() {
            None
        } else {
            Some(message.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_error_body() {
        assert_eq!(
            ApiErrorBody::message_from(r#"{"error":"Vantagem não encontrada"}"#),
            Some("Vantagem não encontrada".to_string())
        );
    }

    #[test]
    fn test_message_from_body_without_error() {
        assert_eq!(ApiErrorBody::message_from(r#"{"message":"ok"}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":null}"#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":"  "}"#), None);
    }

    #[test]
    fn test_message_from_invalid_body() {
        assert_eq!(ApiErrorBody::message_from(""), None);
        assert_eq!(ApiErrorBody::message_from("<html>502</html>"), None);
        assert_eq!(ApiErrorBody::message_from(r#"["error"]"#), None);
    }

    #[test]
    fn test_message_from_non_object_json() {
        assert_eq!(ApiErrorBody::message_from(r#"["boom"]"#), None);
        assert_eq!(ApiErrorBody::message_from(r#""boom""#), None);
        assert_eq!(ApiErrorBody::message_from(r#"{"error":42}"#), None);
        assert_eq!(ApiErrorBody::message_from("null"), None);
    }
}
