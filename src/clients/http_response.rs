//! HTTP response types for the REST client.
//!
//! This module provides the [`ApiResponse`] type, an owned snapshot of an
//! HTTP response used both for successful resolution and inside error values.

use std::collections::HashMap;

/// An owned snapshot of an HTTP response.
///
/// Contains the status code, status text, headers, and the parsed JSON body.
/// The `Retry-After` header is parsed eagerly since the request executor
/// consults it when handling throttled responses.
///
/// Error values carry an `ApiResponse` so that callers can branch on the
/// status code and inspect the body without holding the underlying
/// transport response alive.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The canonical reason phrase for the status, if known.
    pub status_text: String,
    /// Response headers, lowercased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. `Value::Null` when the body was empty.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from the `Retry-After` header).
    pub retry_after: Option<f64>,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`, parsing throttling headers.
    ///
    /// `Retry-After` is honored only in its numeric form; HTTP-date values
    /// fall through to the backoff policy.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: String,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        let retry_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| *seconds >= 0.0);

        Self {
            status,
            status_text,
            headers,
            body,
            retry_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of the given header, if present.
    ///
    /// Header names are matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

// Verify ApiResponse is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponse>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with_header(status: u16, name: &str, value: &str) -> ApiResponse {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), vec![value.to_string()]);
        ApiResponse::new(status, String::new(), headers, json!({}))
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for status in [200, 201, 204, 299] {
            let response = ApiResponse::new(status, String::new(), HashMap::new(), json!({}));
            assert!(response.is_ok(), "expected is_ok() for status {status}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for status in [400, 404, 429, 500, 503] {
            let response = ApiResponse::new(status, String::new(), HashMap::new(), json!({}));
            assert!(!response.is_ok(), "expected !is_ok() for status {status}");
        }
    }

    #[test]
    fn test_retry_after_numeric_parsing() {
        let response = response_with_header(429, "retry-after", "2.5");
        assert!((response.retry_after.unwrap() - 2.5).abs() < f64::EPSILON);

        let response = response_with_header(429, "retry-after", "1");
        assert!((response.retry_after.unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_retry_after_http_date_is_ignored() {
        let response = response_with_header(429, "retry-after", "Wed, 21 Oct 2026 07:28:00 GMT");
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_retry_after_negative_is_ignored() {
        let response = response_with_header(429, "retry-after", "-3");
        assert!(response.retry_after.is_none());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = response_with_header(200, "x-request-id", "abc-123");
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
        assert_eq!(response.header("x-request-id"), Some("abc-123"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_body_is_preserved() {
        let body = json!({"items": [1, 2, 3]});
        let response = ApiResponse::new(200, "OK".to_string(), HashMap::new(), body.clone());
        assert_eq!(response.body, body);
        assert_eq!(response.status_text, "OK");
    }
}
