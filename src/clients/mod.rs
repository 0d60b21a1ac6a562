//! HTTP client types for REST API communication.
//!
//! This module provides the request-execution layer: issuing GET requests,
//! retrying throttled responses with backoff, racing cancellation, and
//! classifying failures.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The request executor owning the retry state machine
//! - [`ApiResponse`]: An owned snapshot of an HTTP response
//! - [`ApiError`]: Unified error taxonomy for request failures
//! - [`Backoff`]: Exponential backoff policy for throttled responses
//! - [`CancelToken`]: Cooperative cancellation latch
//!
//! # Retry Behavior
//!
//! Only 429 responses are retried. The delay comes from a numeric
//! `Retry-After` header when present, otherwise from the exponential
//! [`Backoff`] policy (100ms to 20s per attempt). Every other failure is
//! terminal on first occurrence. The retry budget defaults to 10 and can
//! be overridden per call.

mod backoff;
mod cancel;
mod errors;
mod http_client;
mod http_response;

pub use backoff::Backoff;
pub use cancel::CancelToken;
pub use errors::{ApiError, ResponseError, RetryLimitExceededError};
pub use http_client::HttpClient;
pub use http_response::ApiResponse;
