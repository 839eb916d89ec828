//! Shared HTTP response helpers.
//!
//! Centralizes status-code mapping (400/401/403/404 → dedicated variants,
//! any other non-success → [`ApiError::Api`]) and body decoding so the
//! endpoint modules stay focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. On failure the body is read
/// once and its `message` field (or trimmed text) becomes the error message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = extract_message(&body);
    tracing::debug!(status = status.as_u16(), %message, "backend returned an error");
    Err(match status.as_u16() {
        400 => ApiError::BadRequest { message },
        401 => ApiError::Unauthorized { message },
        403 => ApiError::Forbidden { message },
        404 => ApiError::NotFound { message },
        other => ApiError::Api {
            status: other,
            message,
        },
    })
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers `{"message": "..."}` for handled errors; proxies and
/// crashes produce plain text or HTML.
pub fn extract_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = map.get(key) {
                return text.trim().to_string();
            }
        }
    }
    body.trim().to_string()
}

/// Decode a JSON body into `T`.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decode a JSON array body into `Vec<T>`.
///
/// Some list endpoints answer with an object (e.g. `{"message": ...}`) when
/// there is nothing to show. Anything that is not an array reads as empty.
pub async fn read_list<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Vec<T>, ApiError> {
    let bytes = resp.bytes().await?;
    decode_list(&bytes)
}

pub(crate) fn decode_list<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| ApiError::Parse(e.to_string()))?;
    if value.is_array() {
        serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
    } else {
        tracing::warn!("expected a JSON array from the backend, treating as empty");
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cz_core::entities::Event;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn message_field_is_preferred() {
        assert_eq!(extract_message(r#"{"message":" Invalid event "}"#), "Invalid event");
        assert_eq!(extract_message(r#"{"error":"jwt malformed"}"#), "jwt malformed");
    }

    #[test]
    fn plain_text_body_is_trimmed() {
        assert_eq!(extract_message("  Bad Gateway\n"), "Bad Gateway");
        assert_eq!(extract_message(""), "");
        assert_eq!(extract_message(r#"{"status":"fail"}"#), r#"{"status":"fail"}"#);
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(mock_response(200, "[]")).await.unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn status_codes_map_to_variants() {
        let err = check_response(mock_response(400, r#"{"message":"Invalid eventId"}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { ref message } if message == "Invalid eventId"));

        let err = check_response(mock_response(401, "")).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));

        let err = check_response(mock_response(403, r#"{"message":"Not assigned"}"#))
            .await
            .unwrap_err();
        assert_eq!(err.notification("Operation failed"), "Not assigned");

        let err = check_response(mock_response(404, "missing")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref message } if message == "missing"));

        let err = check_response(mock_response(500, "oops")).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn list_body_that_is_not_an_array_reads_empty() {
        let events: Vec<Event> = read_list(mock_response(200, r#"{"message":"none"}"#))
            .await
            .unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn list_body_decodes_entities() {
        let events: Vec<Event> = read_list(mock_response(
            200,
            r#"[{"_id":"e1","name":"Summer Cup","isActive":false},{"_id":"e2","name":"Winter"}]"#,
        ))
        .await
        .unwrap();
        assert_eq!(events.len(), 2);
        assert!(!events[0].is_active);
        assert!(events[1].is_active);
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let err = read_json::<serde_json::Value>(mock_response(200, "<html>"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
