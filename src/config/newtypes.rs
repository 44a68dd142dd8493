//! Validated newtype wrappers for configuration and credential values.
//!
//! These wrappers validate their contents on construction so that invalid
//! values are rejected with clear error messages before any request is made.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default base URL of the admin backend.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8002";

/// A validated base URL for the admin REST API.
///
/// The URL must carry a scheme and a host. A trailing slash is stripped so
/// that endpoint paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use shop_admin::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("http://127.0.0.1:8002/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8002");
/// assert_eq!(url.join("/api/items/"), "http://127.0.0.1:8002/api/items/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl(String);

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let Some((scheme, rest)) = url.split_once("://") else {
            return Err(ConfigError::InvalidBaseUrl { url });
        };
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        // Host ends at port, path, query, or end of string
        let host = rest.split([':', '/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }

    /// Appends an endpoint path to the base URL.
    ///
    /// A missing leading slash on `endpoint` is added.
    #[must_use]
    pub fn join(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.0)
        } else {
            format!("{}/{endpoint}", self.0)
        }
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(DEFAULT_API_BASE_URL.to_string())
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An opaque bearer credential issued by the backend at login.
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use shop_admin::BearerToken;
///
/// let token = BearerToken::new("eyJhbGciOi").unwrap();
/// assert_eq!(token.as_ref(), "eyJhbGciOi");
/// assert_eq!(token.header_value(), "Bearer eyJhbGciOi");
/// assert_eq!(format!("{:?}", token), "BearerToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Creates a new bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBearerToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyBearerToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(*****)")
    }
}

impl Serialize for BearerToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BearerToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
