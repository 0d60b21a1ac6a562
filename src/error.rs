//! Error types for client configuration.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use restpath::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Authentication token cannot be empty.
    #[error("Authentication token cannot be empty. Omit the token for unauthenticated access.")]
    EmptyAuthToken,

    /// Origin URL is invalid.
    #[error("Invalid origin '{origin}'. Expected an absolute URL with an http or https scheme (e.g., 'https://api.example.com').")]
    InvalidOrigin {
        /// The invalid origin that was provided.
        origin: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
