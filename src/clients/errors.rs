//! HTTP-specific error types for the REST client.
//!
//! This module contains the error taxonomy produced by the request
//! executor: response errors, retry exhaustion, cancellation, and
//! transport failures.
//!
//! # Error Handling
//!
//! Each failure scenario maps to a distinct type so callers can branch
//! without string matching:
//!
//! - [`ResponseError`]: Non-2xx responses that are not retried
//! - [`RetryLimitExceededError`]: When the 429 retry budget is exhausted
//! - [`ApiError`]: Unified error type encompassing all failures
//!
//! # Example
//!
//! ```rust,ignore
//! use restpath::ApiError;
//!
//! match handle.await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(ApiError::Response(e)) => {
//!         println!("API error {}: {}", e.status, e.body());
//!     }
//!     Err(ApiError::RetryLimit(e)) => {
//!         println!("Gave up after {} attempts", e.attempts);
//!     }
//!     Err(ApiError::Aborted) => println!("Cancelled"),
//!     Err(ApiError::Network(e)) => println!("Network failure: {e}"),
//!     Err(ApiError::Unknown { body }) => println!("Unclassified: {body}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_response::ApiResponse;

/// Error returned when a request receives a non-successful, non-retryable
/// response.
///
/// Carries the full [`ApiResponse`] snapshot so callers can branch on the
/// status code and inspect the parsed body.
#[derive(Debug, Error)]
#[error("API error {status} {status_text}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The reason phrase of the response.
    pub status_text: String,
    /// The full response snapshot.
    pub response: ApiResponse,
}

impl ResponseError {
    /// Creates a `ResponseError` from a response snapshot.
    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        Self {
            status: response.status,
            status_text: response.status_text.clone(),
            response,
        }
    }

    /// Returns the parsed response body.
    #[must_use]
    pub const fn body(&self) -> &serde_json::Value {
        &self.response.body
    }
}

/// Error returned when the retry budget for throttled responses is exhausted.
///
/// This error is raised when a request continues to receive 429 responses
/// after all configured retry attempts have been made. It carries the last
/// response's status line and body.
#[derive(Debug, Error)]
#[error("Exceeded retry limit after {attempts} attempts (last status {status} {status_text})")]
pub struct RetryLimitExceededError {
    /// The HTTP status code of the last response (429).
    pub status: u16,
    /// The reason phrase of the last response.
    pub status_text: String,
    /// The parsed body of the last response.
    pub body: serde_json::Value,
    /// The total number of network attempts made.
    pub attempts: u32,
}

/// Unified error type for all request failures.
///
/// Every failure surfaces as exactly one variant; nothing is caught and
/// silently recovered inside the executor. The only locally-handled
/// conditions are 429 within the retry budget and 404 when the client is
/// configured to resolve not-found as null.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-2xx response that is not subject to retry.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The 429 retry budget was exhausted.
    #[error(transparent)]
    RetryLimit(#[from] RetryLimitExceededError),

    /// The caller's cancellation token fired.
    #[error("Request aborted by cancellation token.")]
    Aborted,

    /// A transport-level failure (connection, TLS, DNS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An unclassified failure, carrying a stringified form of the cause.
    #[error("Unknown error: {body}")]
    Unknown {
        /// Stringified form of the raw failure.
        body: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code if this error carries one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status),
            Self::RetryLimit(e) => Some(e.status),
            _ => None,
        }
    }

    /// Returns the parsed response body if this error carries one.
    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Response(e) => Some(e.body()),
            Self::RetryLimit(e) => Some(&e.body),
            _ => None,
        }
    }

    /// Returns `true` if this error was caused by cancellation.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}
