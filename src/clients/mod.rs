//! HTTP client types for admin API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: sends one request, injects the bearer token, applies the
//!   401 session-expiry policy
//! - [`HttpRequest`]: a request descriptor (method, path, body, headers)
//! - [`ApiResponse`]: a parsed JSON body or the 204 no-content marker
//! - [`ErrorEnvelope`]: the backend's `{"detail": ...}` error shape
//! - [`ApiError`]: the single error type of every call
//!
//! Calls are fire-once: no retries, no deduplication, and no timeout beyond
//! what [`AdminConfig`](crate::AdminConfig) configures on the transport.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, ErrorKind, InvalidHttpRequestError, RequestFailedError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, MultipartFile, RequestBody};
pub use http_response::{
    ApiResponse, ErrorDetail, ErrorEnvelope, FieldError, DETAIL_SEPARATOR,
    FALLBACK_ERROR_MESSAGE,
};
