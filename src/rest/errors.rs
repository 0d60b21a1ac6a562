//! Schema-layer error types for the resource accessors.
//!
//! These errors are raised while composing a call chain, before any network
//! I/O happens: looking up an unknown endpoint, or chaining from a handle
//! whose call shape forbids it.

use thiserror::Error;

/// Error type for endpoint resolution and chaining.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// No root endpoint with the given segment exists in the schema.
    #[error("Unknown endpoint '{segment}'")]
    UnknownEndpoint {
        /// The segment that was requested.
        segment: String,
    },

    /// The parent endpoint declares no child endpoint with the given segment.
    #[error("Endpoint '{parent}' declares no child endpoint '{segment}'")]
    UnknownChild {
        /// The parent endpoint's segment.
        parent: &'static str,
        /// The child segment that was requested.
        segment: String,
    },

    /// The handle was built with the id-plus-options call shape, which
    /// forbids further chaining.
    #[error("Handle for '{shape}' was built with id and options and does not support chaining")]
    NotChainable {
        /// The resource shape tag of the handle's endpoint.
        shape: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_endpoint_message() {
        let error = EndpointError::UnknownEndpoint {
            segment: "missing".to_string(),
        };
        assert!(error.to_string().contains("missing"));
    }

    #[test]
    fn test_unknown_child_message_names_parent() {
        let error = EndpointError::UnknownChild {
            parent: "posts",
            segment: "likes".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("posts"));
        assert!(message.contains("likes"));
    }

    #[test]
    fn test_not_chainable_message() {
        let error = EndpointError::NotChainable { shape: "Post" };
        assert!(error.to_string().contains("chaining"));
    }

    #[test]
    fn test_implements_std_error() {
        let error: &dyn std::error::Error = &EndpointError::NotChainable { shape: "Post" };
        let _ = error;
    }
}
