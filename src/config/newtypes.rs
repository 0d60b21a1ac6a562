//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated API origin.
///
/// This newtype validates that the origin is an absolute `http://` or
/// `https://` URL and normalizes it by trimming any trailing slashes, so
/// that request paths can always be appended with a single `/`.
///
/// # Serialization
///
/// `Origin` serializes to its normalized string form and re-validates on
/// deserialization:
///
/// ```rust
/// use restpath::Origin;
///
/// let origin = Origin::new("https://api.example.com/").unwrap();
/// let json = serde_json::to_string(&origin).unwrap();
/// assert_eq!(json, r#""https://api.example.com""#);
/// ```
///
/// # Example
///
/// ```rust
/// use restpath::Origin;
///
/// let origin = Origin::new("https://api.example.com/").unwrap();
/// assert_eq!(origin.as_ref(), "https://api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Creates a new validated origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] if the value is empty, has a
    /// non-HTTP scheme, or has no host part.
    pub fn new(origin: impl Into<String>) -> Result<Self, ConfigError> {
        let origin = origin.into();
        let trimmed = origin.trim();

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.trim_end_matches('/').to_string()))
            }
            _ => Err(ConfigError::InvalidOrigin { origin }),
        }
    }
}

impl AsRef<str> for Origin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Origin {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Origin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated bearer token for API authentication.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use restpath::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated authentication token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

impl Serialize for AuthToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AuthToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
