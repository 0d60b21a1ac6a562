//! Schema-aware client entry point.
//!
//! [`ApiClient`] binds a configured [`HttpClient`] to a static endpoint
//! schema and hands out [`Endpoint`] accessors for root resources.

use crate::clients::{Backoff, HttpClient};
use crate::config::ClientConfig;
use crate::rest::endpoint::Endpoint;
use crate::rest::errors::EndpointError;
use crate::schema::{find_endpoint, EndpointDescriptor};

/// The schema-aware API client.
///
/// Construction performs no I/O. Accessors obtained from
/// [`endpoint`](Self::endpoint) build call chains lazily; the network is
/// touched only when a [`PendingRequest`](crate::PendingRequest) is forced.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,no_run
/// use restpath::{ApiClient, Capabilities, ClientConfig, EndpointDescriptor, Origin};
///
/// const SCHEMA: &[EndpointDescriptor] = &[EndpointDescriptor::new(
///     "posts",
///     "Post",
///     Capabilities::all(),
///     &[],
/// )];
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::builder()
///     .origin(Origin::new("https://api.example.com")?)
///     .build()?;
/// let api = ApiClient::new(&config, SCHEMA);
///
/// let body = api.endpoint("posts")?.get("123").await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    schema: &'static [EndpointDescriptor],
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a new client for the given configuration and schema.
    #[must_use]
    pub fn new(config: &ClientConfig, schema: &'static [EndpointDescriptor]) -> Self {
        Self {
            http: HttpClient::new(config),
            schema,
        }
    }

    /// Creates a new client with an explicit backoff policy.
    ///
    /// Useful for tests that need deterministic retry delays.
    #[must_use]
    pub fn with_backoff(
        config: &ClientConfig,
        schema: &'static [EndpointDescriptor],
        backoff: Backoff,
    ) -> Self {
        Self {
            http: HttpClient::with_backoff(config, backoff),
            schema,
        }
    }

    /// Returns the schema this client serves.
    #[must_use]
    pub const fn schema(&self) -> &'static [EndpointDescriptor] {
        self.schema
    }

    /// Resolves a root endpoint accessor by segment.
    ///
    /// Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointError::UnknownEndpoint`] when the schema declares
    /// no such root endpoint.
    pub fn endpoint(&self, segment: &str) -> Result<Endpoint<'_>, EndpointError> {
        let descriptor = find_endpoint(self.schema, segment).ok_or_else(|| {
            EndpointError::UnknownEndpoint {
                segment: segment.to_string(),
            }
        })?;
        Ok(Endpoint::new(
            &self.http,
            descriptor.segment.to_string(),
            descriptor,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Origin;
    use crate::schema::Capabilities;

    const COMMENTS: EndpointDescriptor =
        EndpointDescriptor::new("comments", "Comment", Capabilities::paginated(), &[]);

    const SCHEMA: &[EndpointDescriptor] = &[EndpointDescriptor::new(
        "posts",
        "Post",
        Capabilities::all(),
        &[COMMENTS],
    )];

    fn test_client() -> ApiClient {
        let config = ClientConfig::builder()
            .origin(Origin::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        ApiClient::new(&config, SCHEMA)
    }

    #[test]
    fn test_endpoint_resolves_known_segment() {
        let api = test_client();
        let posts = api.endpoint("posts").unwrap();
        assert_eq!(posts.path(), "posts");
        assert_eq!(posts.descriptor().shape, "Post");
    }

    #[test]
    fn test_endpoint_rejects_unknown_segment() {
        let api = test_client();
        let result = api.endpoint("missing");
        assert!(matches!(
            result,
            Err(EndpointError::UnknownEndpoint { segment }) if segment == "missing"
        ));
    }

    #[test]
    fn test_record_handle_paths() {
        let api = test_client();
        let posts = api.endpoint("posts").unwrap();

        assert_eq!(posts.all().path(), "posts");
        assert_eq!(posts.get("123").path(), "posts/123");
        assert_eq!(posts.get(42u64).path(), "posts/42");
    }

    #[test]
    fn test_chaining_builds_nested_path_without_io() {
        let api = test_client();
        let post = api.endpoint("posts").unwrap().get("123");

        let comments = post.child("comments").unwrap();
        assert_eq!(comments.path(), "posts/123/comments");
        assert!(!post.is_forced());
    }

    #[test]
    fn test_collection_handle_is_chainable() {
        let api = test_client();
        let posts = api.endpoint("posts").unwrap().all();
        assert!(posts.is_chainable());
        let comments = posts.child("comments").unwrap();
        assert_eq!(comments.path(), "posts/comments");
    }

    #[test]
    fn test_id_with_options_handle_refuses_chaining() {
        let api = test_client();
        let post = api
            .endpoint("posts")
            .unwrap()
            .get_with("123", crate::RequestOptions::new());

        assert!(!post.is_chainable());
        assert!(matches!(
            post.child("comments"),
            Err(EndpointError::NotChainable { shape: "Post" })
        ));
    }

    #[test]
    fn test_unknown_child_is_rejected() {
        let api = test_client();
        let post = api.endpoint("posts").unwrap().get("123");
        assert!(matches!(
            post.child("likes"),
            Err(EndpointError::UnknownChild { parent: "posts", segment }) if segment == "likes"
        ));
    }
}
