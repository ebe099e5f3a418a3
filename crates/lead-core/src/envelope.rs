//! API Envelope
//!
//! The leads API answers success and business failures alike with a 2xx JSON
//! body; a failure is any object carrying an `error` string.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures of a leads API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Business-rule failure reported through the `error` field
    #[error("{0}")]
    Rejected(String),

    /// Non-2xx response without an `error` field
    #[error("Request failed with status {status}")]
    Status { status: u16 },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Extract the `error` message of a failure body, if any.
pub fn error_message(body: &Value) -> Option<&str> {
    body.as_object()?.get("error")?.as_str()
}

/// Decode a success payload, or turn an `error` body into [`ApiError::Rejected`].
pub fn decode_envelope<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if let Some(msg) = error_message(&body) {
        return Err(ApiError::Rejected(msg.to_string()));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a body whose only meaning is "done" (e.g. `{}` after a delete).
pub fn decode_ack(body: Value) -> ApiResult<()> {
    match error_message(&body) {
        Some(msg) => Err(ApiError::Rejected(msg.to_string())),
        None => Ok(()),
    }
}

/// Map an HTTP status and (possibly empty) body to a result.
///
/// A non-2xx status is a failure even when the body has no `error` field.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: Option<Value>) -> ApiResult<T> {
    if (200..300).contains(&status) {
        return decode_envelope(body.unwrap_or(Value::Null));
    }
    match body.as_ref().and_then(error_message) {
        Some(msg) => Err(ApiError::Rejected(msg.to_string())),
        None => Err(ApiError::Status { status }),
    }
}

/// Same as [`decode_response`] for calls with no payload.
pub fn decode_ack_response(status: u16, body: Option<Value>) -> ApiResult<()> {
    if (200..300).contains(&status) {
        return decode_ack(body.unwrap_or(Value::Null));
    }
    match body.as_ref().and_then(error_message) {
        Some(msg) => Err(ApiError::Rejected(msg.to_string())),
        None => Err(ApiError::Status { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lead, LeadStatus};
    use serde_json::json;

    #[test]
    fn test_created_lead_decodes() {
        let lead: Lead = decode_envelope(json!({
            "id": "1", "name": "Ada", "email": "ada@x.com", "status": "New"
        }))
        .unwrap();
        assert_eq!(lead.status, LeadStatus::New);
    }

    #[test]
    fn test_error_field_wins() {
        let res: ApiResult<Lead> = decode_envelope(json!({ "error": "Email already exists" }));
        let err = res.unwrap_err();
        assert_eq!(err, ApiError::Rejected("Email already exists".to_string()));
        assert_eq!(err.to_string(), "Email already exists");
    }

    #[test]
    fn test_list_decodes() {
        let leads: Vec<Lead> = decode_envelope(json!([
            { "id": "1", "name": "Ada", "email": "ada@x.com", "status": "New" },
            { "id": "2", "name": "Bob", "email": "bob@x.com", "status": "Closed-Won" }
        ]))
        .unwrap();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[1].status, LeadStatus::ClosedWon);
    }

    #[test]
    fn test_bad_shape_is_decode_error() {
        let res: ApiResult<Vec<Lead>> = decode_envelope(json!({ "leads": [] }));
        assert!(matches!(res, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_ack() {
        assert_eq!(decode_ack(json!({})), Ok(()));
        assert_eq!(decode_ack(json!({ "message": "deleted" })), Ok(()));
        assert_eq!(decode_ack(Value::Null), Ok(()));
        assert_eq!(
            decode_ack(json!({ "error": "Lead not found" })),
            Err(ApiError::Rejected("Lead not found".to_string()))
        );
    }

    #[test]
    fn test_non_string_error_is_not_a_failure_marker() {
        assert_eq!(decode_ack(json!({ "error": null })), Ok(()));
    }

    #[test]
    fn test_status_failures() {
        let res: ApiResult<Vec<Lead>> = decode_response(500, None);
        assert_eq!(res.unwrap_err().to_string(), "Request failed with status 500");

        let res = decode_ack_response(404, Some(json!({ "error": "Lead not found" })));
        assert_eq!(res, Err(ApiError::Rejected("Lead not found".to_string())));

        assert_eq!(decode_ack_response(204, None), Ok(()));
    }
}
