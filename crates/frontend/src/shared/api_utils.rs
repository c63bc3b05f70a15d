//! API utilities for frontend-backend communication
//!
//! Resolves the API base URL and turns raw HTTP responses into
//! [`ApiResponse`] envelopes.

use contracts::shared::query::{ApiResponse, RawApiResponse, STATUS_OK};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Compile-time override of the API base, e.g. `http://127.0.0.1:8844/api`
const API_BASE_OVERRIDE: Option<&str> = option_env!("DEVICE_CONSOLE_API_BASE");

/// Get the base URL for API requests
///
/// `DEVICE_CONSOLE_API_BASE` wins when set at build time; otherwise the API is
/// expected under `/api` of the origin that served the page.
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return "/api".to_string(),
    };
    let origin = window.location().origin().unwrap_or_default();
    format!("{}/api", origin)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/firmware/_query");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failures below the envelope level. A non-success `status` is not an error
/// here; callers inspect [`ApiResponse::is_success`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

pub async fn read_envelope<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    parse_envelope(status, &body)
}

/// Parse a response body into an envelope.
///
/// An undecodable body of a failed response becomes a non-success envelope
/// carrying the raw text, so the caller can still show it.
pub fn parse_envelope<T: DeserializeOwned>(
    http_status: u16,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    let transport_ok = (200..300).contains(&http_status);
    if body.trim().is_empty() {
        let status = if transport_ok { STATUS_OK } else { http_status };
        return Ok(ApiResponse::failed(status, None));
    }
    match serde_json::from_str::<RawApiResponse<T>>(body) {
        Ok(raw) => Ok(raw.into_response(http_status)),
        Err(_) if !transport_ok => Ok(ApiResponse::failed(http_status, Some(body.to_string()))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_status_from_body() {
        let resp: ApiResponse<String> =
            parse_envelope(200, r#"{"status": 200, "result": "ok"}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.result.as_deref(), Some("ok"));

        let resp: ApiResponse<String> =
            parse_envelope(200, r#"{"status": 400, "message": "name taken"}"#).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.failure_message(), "name taken");
    }

    #[test]
    fn test_plain_text_error_body_is_kept() {
        let resp: ApiResponse<String> = parse_envelope(502, "Bad Gateway").unwrap();
        assert_eq!(resp.status, 502);
        assert_eq!(resp.message.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_empty_body() {
        let resp: ApiResponse<String> = parse_envelope(204, "").unwrap();
        assert!(resp.is_success());
        assert!(resp.result.is_none());

        let resp: ApiResponse<String> = parse_envelope(404, "  ").unwrap();
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_garbage_on_success_is_decode_error() {
        let err = parse_envelope::<String>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
