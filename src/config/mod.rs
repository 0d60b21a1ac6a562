//! Configuration types for the REST client.
//!
//! This module provides the core configuration types used to initialize
//! and configure a client for API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The main configuration struct holding all client settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`Origin`]: A validated API origin newtype
//! - [`AuthToken`]: A validated bearer token newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use restpath::{ClientConfig, Origin, AuthToken};
//!
//! let config = ClientConfig::builder()
//!     .origin(Origin::new("https://api.example.com").unwrap())
//!     .auth_token(AuthToken::new("my-token").unwrap())
//!     .null_on_404(true)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AuthToken, Origin};

use crate::error::ConfigError;

/// Default retry budget for throttled (429) responses.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Configuration for the REST client.
///
/// This struct holds all construction-time settings: the API origin, the
/// optional bearer token, the not-found handling mode, and the default
/// retry budget. Per-call overrides live in
/// [`RequestOptions`](crate::RequestOptions).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use restpath::{ClientConfig, Origin};
///
/// let config = ClientConfig::builder()
///     .origin(Origin::new("https://api.example.com").unwrap())
///     .max_retries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_retries(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    origin: Origin,
    auth_token: Option<AuthToken>,
    null_on_404: bool,
    max_retries: u32,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the API origin.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Returns the authentication token, if configured.
    #[must_use]
    pub const fn auth_token(&self) -> Option<&AuthToken> {
        self.auth_token.as_ref()
    }

    /// Returns whether 404 responses resolve to a null value instead of an error.
    #[must_use]
    pub const fn null_on_404(&self) -> bool {
        self.null_on_404
    }

    /// Returns the default retry budget for throttled responses.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// The only required field is `origin`. All other fields have defaults.
///
/// # Defaults
///
/// - `auth_token`: `None` (unauthenticated)
/// - `null_on_404`: `false`
/// - `max_retries`: [`DEFAULT_MAX_RETRIES`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use restpath::{ClientConfig, Origin, AuthToken};
///
/// let config = ClientConfig::builder()
///     .origin(Origin::new("https://api.example.com").unwrap())
///     .auth_token(AuthToken::new("token").unwrap())
///     .null_on_404(true)
///     .max_retries(5)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    origin: Option<Origin>,
    auth_token: Option<AuthToken>,
    null_on_404: Option<bool>,
    max_retries: Option<u32>,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API origin (required).
    #[must_use]
    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Sets the bearer token used for the `Authorization` header.
    #[must_use]
    pub fn auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Sets whether 404 responses resolve to a null value instead of an error.
    #[must_use]
    pub const fn null_on_404(mut self, enabled: bool) -> Self {
        self.null_on_404 = Some(enabled);
        self
    }

    /// Sets the default retry budget for throttled responses.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no origin was set.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let origin = self
            .origin
            .ok_or(ConfigError::MissingRequiredField { field: "origin" })?;

        Ok(ClientConfig {
            origin,
            auth_token: self.auth_token,
            null_on_404: self.null_on_404.unwrap_or(false),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_origin() -> Origin {
        Origin::new("https://api.example.com").unwrap()
    }

    #[test]
    fn test_build_with_only_origin_uses_defaults() {
        let config = ClientConfig::builder()
            .origin(test_origin())
            .build()
            .unwrap();

        assert_eq!(config.origin().as_ref(), "https://api.example.com");
        assert!(config.auth_token().is_none());
        assert!(!config.null_on_404());
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_build_without_origin_fails() {
        let result = ClientConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "origin" })
        ));
    }

    #[test]
    fn test_build_with_all_fields() {
        let config = ClientConfig::builder()
            .origin(test_origin())
            .auth_token(AuthToken::new("token").unwrap())
            .null_on_404(true)
            .max_retries(3)
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.auth_token().unwrap().as_ref(), "token");
        assert!(config.null_on_404());
        assert_eq!(config.max_retries(), 3);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_max_retries_zero_is_allowed() {
        let config = ClientConfig::builder()
            .origin(test_origin())
            .max_retries(0)
            .build()
            .unwrap();
        assert_eq!(config.max_retries(), 0);
    }
}
