//! HTTP client for REST API communication.
//!
//! This module provides the [`HttpClient`] type: the request executor that
//! owns the retry/backoff state machine and classifies failures into the
//! [`ApiError`] taxonomy.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::backoff::Backoff;
use crate::clients::cancel::CancelToken;
use crate::clients::errors::{ApiError, ResponseError, RetryLimitExceededError};
use crate::clients::http_response::ApiResponse;
use crate::config::ClientConfig;

/// Crate version, used in the User-Agent header.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making GET requests against a REST API.
///
/// The client handles:
/// - URL construction from the configured origin
/// - Default headers including the bearer token when configured
/// - Automatic retry with backoff for 429 responses
/// - Failure classification into [`ApiError`]
///
/// Each call to [`execute`](Self::execute) runs an independent retry loop:
/// the attempt counter and backoff state are per call, never shared across
/// concurrent requests. For a single call, network attempts are strictly
/// sequential; the loop suspends only while awaiting the HTTP response or
/// the backoff delay.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// API origin (e.g., `https://api.example.com`), no trailing slash.
    origin: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Whether 404 responses resolve to a null value.
    null_on_404: bool,
    /// Default retry budget for throttled responses.
    max_retries: u32,
    /// Backoff policy used when a 429 carries no usable Retry-After.
    backoff: Backoff,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_backoff(config, Backoff::new())
    }

    /// Creates a new HTTP client with an explicit backoff policy.
    ///
    /// Useful for tests that need deterministic delays
    /// (see [`Backoff::fixed`]).
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_backoff(config: &ClientConfig, backoff: Backoff) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}restpath v{CLIENT_VERSION}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.auth_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            origin: config.origin().as_ref().to_string(),
            default_headers,
            null_on_404: config.null_on_404(),
            max_retries: config.max_retries(),
            backoff,
        }
    }

    /// Returns the configured origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Issues a GET request with retry handling.
    ///
    /// The retry loop follows four states: attempting, waiting for backoff,
    /// succeeded, failed. Only 429 responses re-enter the attempting state;
    /// every other failure is terminal on first occurrence.
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the origin, no leading `/`
    /// * `query` - Pre-composed query string, without the leading `?`
    /// * `cancel` - Optional cancellation token raced against each suspend point
    /// * `max_retries` - Per-call override of the configured retry budget
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with the variant matching the failure:
    /// `Response` for non-retryable statuses, `RetryLimit` when the 429
    /// budget is exhausted, `Aborted` on cancellation, `Network` for
    /// transport failures, and `Unknown` for anything unclassified.
    pub async fn execute(
        &self,
        path: &str,
        query: &str,
        cancel: Option<&CancelToken>,
        max_retries: Option<u32>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = if query.is_empty() {
            format!("{}/{}", self.origin, path)
        } else {
            format!("{}/{}?{}", self.origin, path, query)
        };
        let budget = max_retries.unwrap_or(self.max_retries);

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;

            if cancel.is_some_and(CancelToken::is_cancelled) {
                return Err(ApiError::Aborted);
            }

            tracing::debug!(url = %url, attempt = attempts, "issuing request");

            let response = self.attempt(&url, cancel).await?;

            if response.is_ok() {
                return Ok(response.body);
            }

            if response.status == 404 && self.null_on_404 {
                tracing::debug!(url = %url, "resource not found, resolving as null");
                return Ok(serde_json::Value::Null);
            }

            if response.status != 429 {
                tracing::warn!(
                    url = %url,
                    status = response.status,
                    "request failed"
                );
                return Err(ResponseError::from_response(response).into());
            }

            // Throttled. Retry within budget, honoring Retry-After when the
            // server provides a numeric value.
            if attempts > budget {
                tracing::warn!(url = %url, attempts, "retry budget exhausted");
                return Err(RetryLimitExceededError {
                    status: response.status,
                    status_text: response.status_text,
                    body: response.body,
                    attempts,
                }
                .into());
            }

            let delay = response.retry_after.map_or_else(
                || self.backoff.delay_for_attempt(attempts),
                Duration::from_secs_f64,
            );

            tracing::warn!(
                url = %url,
                attempt = attempts,
                delay_ms = delay.as_millis(),
                "throttled, waiting before retry"
            );

            match cancel {
                Some(token) => {
                    tokio::select! {
                        () = token.cancelled() => return Err(ApiError::Aborted),
                        () = tokio::time::sleep(delay) => {}
                    }
                }
                None => tokio::time::sleep(delay).await,
            }
        }
    }

    /// Performs a single network attempt and snapshots the response.
    async fn attempt(
        &self,
        url: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<ApiResponse, ApiError> {
        let mut builder = self.client.get(url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        let send = builder.send();
        let result = match cancel {
            Some(token) => {
                tokio::select! {
                    () = token.cancelled() => return Err(ApiError::Aborted),
                    result = send => result,
                }
            }
            None => send.await,
        };

        let response = result.map_err(classify_send_failure)?;

        let status = response.status();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let headers = parse_response_headers(response.headers());

        let body_text = response.text().await.map_err(|e| ApiError::Unknown {
            body: e.to_string(),
        })?;
        let body = parse_body(&body_text);

        Ok(ApiResponse::new(status.as_u16(), status_text, headers, body))
    }
}

/// Classifies a failure raised by the transport during send.
fn classify_send_failure(error: reqwest::Error) -> ApiError {
    if error.is_builder() {
        ApiError::Unknown {
            body: error.to_string(),
        }
    } else {
        ApiError::Network(error)
    }
}

/// Parses response headers into a map of lowercased names.
fn parse_response_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        result.entry(key).or_default().push(value);
    }
    result
}

/// Parses a response body, falling back to the raw text for non-JSON payloads.
///
/// Empty bodies parse as `Value::Null` so that 204-style responses resolve
/// cleanly.
fn parse_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text)
        .unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
