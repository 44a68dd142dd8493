//! Configuration error types for the shop admin client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected when the client is set up, not on the first request.
//!
//! # Example
//!
//! ```rust
//! use shop_admin::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::new("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API base URL is malformed.
    #[error("Invalid API base URL '{url}'. Please provide a URL with scheme (e.g., 'http://127.0.0.1:8002').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A bearer token cannot be empty.
    #[error("Bearer token cannot be empty.")]
    EmptyBearerToken,

    /// The sign-in page name is empty.
    #[error("Sign-in page cannot be empty.")]
    EmptySignInPage,

    /// The sign-in page must be reachable without a token.
    #[error("Sign-in page '{page}' is not in the public page set; unauthenticated users would be redirected in a loop.")]
    SignInPageNotPublic {
        /// The configured sign-in page.
        page: String,
    },
}
