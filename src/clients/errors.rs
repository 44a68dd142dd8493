//! Error types for admin API calls.
//!
//! Every client call fails with the single [`ApiError`] type. Callers that only
//! care about the broad class of failure use [`ApiError::kind`]:
//!
//! - [`ErrorKind::Unauthorized`]: the backend answered 401; the session was
//!   torn down and a sign-in redirect issued
//! - [`ErrorKind::RequestFailed`]: any other non-2xx answer, carrying the
//!   backend's message normalized into one string
//! - [`ErrorKind::Transport`]: the request never produced a usable answer
//!   (network, decoding, or local storage failure)
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_admin::{ApiError, ErrorKind};
//!
//! match api.get_customers().await {
//!     Ok(customers) => render(customers),
//!     Err(e) if e.kind() == ErrorKind::Unauthorized => { /* already redirected */ }
//!     Err(e) => alert(&format!("Failed to load customers: {e}")),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;
use crate::storage::StorageError;

/// Error returned for a non-2xx, non-401 response.
///
/// `message` is the backend's error envelope reduced to one line; see
/// [`ErrorEnvelope`](crate::clients::ErrorEnvelope).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailedError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Human-readable message built from the error envelope.
    pub message: String,
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A multipart upload was built without any file content.
    #[error("Cannot upload an empty file '{file_name}'.")]
    EmptyUpload {
        /// The name of the empty file.
        file_name: String,
    },
}

/// Broad classification of an [`ApiError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The session was rejected by the backend.
    Unauthorized,
    /// The backend (or local validation) refused the request.
    RequestFailed,
    /// No usable response was obtained.
    Transport,
}

/// Unified error type for all admin API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The stored token has been removed.
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend answered with a non-2xx status other than 401.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailedError),

    /// A resource looked up on the client side does not exist.
    #[error("{resource} {id} not found")]
    NotFound {
        /// The kind of resource that was looked up.
        resource: &'static str,
        /// The database id that was searched for.
        id: i64,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A success response did not contain the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The token or cart store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A value returned by the backend failed local validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns the broad class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::RequestFailed(_) | Self::NotFound { .. } | Self::InvalidRequest(_) => {
                ErrorKind::RequestFailed
            }
            Self::Network(_) | Self::Decode(_) | Self::Storage(_) | Self::Config(_) => {
                ErrorKind::Transport
            }
        }
    }

    /// Returns the HTTP status code when the backend produced one.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RequestFailed(e) => Some(e.code),
            _ => None,
        }
    }
}
