//! Static endpoint schema consumed by the resource layer.
//!
//! A schema is a `const` table of [`EndpointDescriptor`] values declaring,
//! for each resource: its path segment, a shape tag, the capabilities its
//! query surface supports, and any nested child endpoints. The core only
//! reads descriptors; concrete schemas are declared by the embedding
//! application.
//!
//! # Example
//!
//! ```rust
//! use restpath::{Capabilities, EndpointDescriptor};
//!
//! const COMMENTS: EndpointDescriptor = EndpointDescriptor::new(
//!     "comments",
//!     "Comment",
//!     Capabilities::paginated(),
//!     &[],
//! );
//!
//! const SCHEMA: &[EndpointDescriptor] = &[EndpointDescriptor::new(
//!     "posts",
//!     "Post",
//!     Capabilities::all(),
//!     &[COMMENTS],
//! )];
//!
//! let posts = restpath::schema::find_endpoint(SCHEMA, "posts").unwrap();
//! assert!(posts.has_children());
//! assert!(posts.child("comments").is_some());
//! ```

/// Capability flags declared per endpoint.
///
/// The query composer consults these at runtime and drops request fields
/// the endpoint does not declare, rather than relying on type-level
/// prevention alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// The endpoint accepts `limit`, `page` and `offset`.
    pub pagination: bool,
    /// The endpoint accepts field filters.
    pub filtering: bool,
    /// The endpoint accepts an `order` field.
    pub sortable: bool,
}

impl Capabilities {
    /// No query capabilities.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            pagination: false,
            filtering: false,
            sortable: false,
        }
    }

    /// All query capabilities.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            pagination: true,
            filtering: true,
            sortable: true,
        }
    }

    /// Pagination only.
    #[must_use]
    pub const fn paginated() -> Self {
        Self {
            pagination: true,
            filtering: false,
            sortable: false,
        }
    }
}

/// Static declaration of one resource endpoint.
///
/// Descriptors are immutable, `const`-constructible, and owned by the
/// schema table for the lifetime of the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// The path segment for this endpoint (e.g., `posts`).
    pub segment: &'static str,
    /// The resource shape tag (e.g., `Post`), used for diagnostics.
    pub shape: &'static str,
    /// Declared query capabilities.
    pub capabilities: Capabilities,
    /// Nested child endpoints, possibly empty.
    pub children: &'static [EndpointDescriptor],
}

impl EndpointDescriptor {
    /// Creates a new descriptor.
    ///
    /// This is a `const fn` to allow schemas to be defined as constants.
    #[must_use]
    pub const fn new(
        segment: &'static str,
        shape: &'static str,
        capabilities: Capabilities,
        children: &'static [EndpointDescriptor],
    ) -> Self {
        Self {
            segment,
            shape,
            capabilities,
            children,
        }
    }

    /// Returns `true` if this endpoint declares nested resources.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Looks up a child endpoint by segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&'static EndpointDescriptor> {
        self.children.iter().find(|child| child.segment == segment)
    }
}

/// Looks up a root endpoint by segment in a schema table.
#[must_use]
pub fn find_endpoint(
    schema: &'static [EndpointDescriptor],
    segment: &str,
) -> Option<&'static EndpointDescriptor> {
    schema.iter().find(|endpoint| endpoint.segment == segment)
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Capabilities>();
    assert_send_sync::<EndpointDescriptor>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const COMMENTS: EndpointDescriptor =
        EndpointDescriptor::new("comments", "Comment", Capabilities::paginated(), &[]);

    const SCHEMA: &[EndpointDescriptor] = &[
        EndpointDescriptor::new("posts", "Post", Capabilities::all(), &[COMMENTS]),
        EndpointDescriptor::new("authors", "Author", Capabilities::none(), &[]),
    ];

    #[test]
    fn test_find_endpoint_by_segment() {
        let posts = find_endpoint(SCHEMA, "posts").unwrap();
        assert_eq!(posts.segment, "posts");
        assert_eq!(posts.shape, "Post");
        assert_eq!(posts.capabilities, Capabilities::all());
    }

    #[test]
    fn test_find_endpoint_unknown_segment() {
        assert!(find_endpoint(SCHEMA, "missing").is_none());
    }

    #[test]
    fn test_child_lookup() {
        let posts = find_endpoint(SCHEMA, "posts").unwrap();
        assert!(posts.has_children());

        let comments = posts.child("comments").unwrap();
        assert_eq!(comments.segment, "comments");
        assert!(comments.capabilities.pagination);
        assert!(!comments.capabilities.filtering);
    }

    #[test]
    fn test_child_lookup_unknown_segment() {
        let posts = find_endpoint(SCHEMA, "posts").unwrap();
        assert!(posts.child("likes").is_none());
    }

    #[test]
    fn test_leaf_endpoint_has_no_children() {
        let authors = find_endpoint(SCHEMA, "authors").unwrap();
        assert!(!authors.has_children());
        assert!(authors.child("anything").is_none());
    }

    #[test]
    fn test_capability_presets() {
        assert!(!Capabilities::none().pagination);
        assert!(Capabilities::all().filtering);
        let paginated = Capabilities::paginated();
        assert!(paginated.pagination && !paginated.sortable && !paginated.filtering);
    }
}
