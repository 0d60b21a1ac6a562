//! # restpath
//!
//! A typed, lazily-evaluated Rust client for paginated, filterable REST
//! APIs with nested sub-resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and validated newtypes
//! - A declarative query surface: pagination, sorting, and structured
//!   [`Filter`] expressions encoded into a canonical query string
//! - A request executor with automatic retry/backoff for throttled (429)
//!   responses, honoring `Retry-After`
//! - A typed error taxonomy ([`ApiError`]) for branching on failures
//! - Chainable, lazily-evaluated resource accessors that defer network I/O
//!   until explicitly awaited
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restpath::{
//!     ApiClient, Capabilities, ClientConfig, EndpointDescriptor, Filter, Origin,
//!     RequestOptions, Sort,
//! };
//!
//! // Declare the API's schema as const data.
//! const COMMENTS: EndpointDescriptor =
//!     EndpointDescriptor::new("comments", "Comment", Capabilities::paginated(), &[]);
//! const SCHEMA: &[EndpointDescriptor] = &[EndpointDescriptor::new(
//!     "posts",
//!     "Post",
//!     Capabilities::all(),
//!     &[COMMENTS],
//! )];
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .origin(Origin::new("https://api.example.com")?)
//!     .null_on_404(true)
//!     .build()?;
//! let api = ApiClient::new(&config, SCHEMA);
//!
//! // Collection query: GET /posts?limit=20&order=title:asc&author=gandhi
//! let posts = api.endpoint("posts")?.many(
//!     RequestOptions::new()
//!         .limit(20)
//!         .order(Sort::asc("title"))
//!         .filter("author", Filter::eq("gandhi")),
//! );
//! let body = posts.await?;
//!
//! // Chained request: GET /posts/123/comments — the parent is never fetched.
//! let comments = api.endpoint("posts")?.get("123").child("comments")?.all();
//! let body = comments.await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Laziness and Forcing
//!
//! Building a call chain performs no I/O. A [`PendingRequest`] fires its
//! network request only when first forced — by `await`ing it, or through
//! [`PendingRequest::force`], which memoizes the settled outcome so that
//! repeated observations never re-issue the request.
//!
//! ## Retry Behavior
//!
//! Only HTTP 429 responses are retried, up to `max_retries` (default 10,
//! overridable per call). The delay comes from a numeric `Retry-After`
//! header when present, otherwise from exponential backoff (100ms to 20s
//! per attempt). Every other failure — including cancellation and
//! transport errors — is terminal on first occurrence.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Runtime capability gating**: Undeclared query fields are dropped by
//!   the composer instead of relying on type-level prevention alone

pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;
pub mod schema;

// Re-export public types at crate root for convenience
pub use config::{AuthToken, ClientConfig, ClientConfigBuilder, Origin, DEFAULT_MAX_RETRIES};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, ApiResponse, Backoff, CancelToken, HttpClient, ResponseError,
    RetryLimitExceededError,
};

// Re-export query types
pub use query::{
    compose_query, encode_filters, Comparison, Filter, FilterMap, FilterValue, RequestOptions,
    Sort, SortDirection,
};

// Re-export schema and resource types
pub use rest::{ApiClient, Endpoint, EndpointError, PendingRequest};
pub use schema::{Capabilities, EndpointDescriptor};
