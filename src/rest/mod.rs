//! Lazily-evaluated resource accessors.
//!
//! This module composes the deferred, chainable call interface on top of
//! the request executor:
//!
//! - **[`ApiClient`]**: binds configuration and schema, hands out accessors
//! - **[`Endpoint`]**: an I/O-free accessor with the call-shape methods
//! - **[`PendingRequest`]**: a forceable handle with memoized, single-shot
//!   execution and child accessors for declared nested resources
//! - **[`EndpointError`]**: schema lookup and chaining violations
//!
//! # Example
//!
//! ```rust,ignore
//! let api = ApiClient::new(&config, SCHEMA);
//!
//! // Nothing below performs I/O until the final await.
//! let comments = api
//!     .endpoint("posts")?
//!     .get("123")
//!     .child("comments")?
//!     .many(RequestOptions::new().limit(20));
//!
//! let body = comments.await?;
//! ```

mod client;
mod endpoint;
mod errors;
mod handle;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use errors::EndpointError;
pub use handle::PendingRequest;
