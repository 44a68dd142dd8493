//! HTTP client for admin API communication.
//!
//! This module provides the [`HttpClient`] type, which turns an
//! [`HttpRequest`] into one HTTP call and applies the session-expiry policy
//! to every response.

use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{Navigator, TokenManager};
use crate::clients::errors::{ApiError, RequestFailedError};
use crate::clients::http_request::{HttpMethod, HttpRequest, MultipartFile, RequestBody};
use crate::clients::http_response::{ApiResponse, ErrorEnvelope};
use crate::config::{AdminConfig, ApiBaseUrl};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

/// HTTP client for making requests to the admin API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Content-Type`, `Accept`, `User-Agent`) merged with
///   caller headers, which win on conflict
/// - `Authorization: Bearer <token>` injection when a token is stored
/// - Session expiry: a 401 removes the token and redirects to sign-in
/// - Error envelope normalization and the 204 no-content marker
///
/// Every call is sent exactly once. There are no retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use shop_admin::{AdminConfig, LoggingNavigator, TokenManager};
/// use shop_admin::clients::{HttpClient, HttpMethod, HttpRequest};
/// use shop_admin::storage::MemoryStore;
///
/// let tokens = TokenManager::new(Arc::new(MemoryStore::new()));
/// let client = HttpClient::new(&AdminConfig::default(), tokens, Arc::new(LoggingNavigator))?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/customers/").build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    base_url: ApiBaseUrl,
    sign_in_page: String,
    /// Default headers included in all requests.
    default_headers: HashMap<String, String>,
    tokens: TokenManager,
    navigator: Arc<dyn Navigator>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Base URL, sign-in page, user agent prefix, and timeout
    /// * `tokens` - Source of the bearer token; cleared on 401
    /// * `navigator` - Receives the sign-in redirect on 401
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the TLS backend cannot be initialized.
    pub fn new(
        config: &AdminConfig,
        tokens: TokenManager,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shop Admin Client v{CLIENT_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            sign_in_page: config.sign_in_page().to_string(),
            default_headers,
            tokens,
            navigator,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the token manager used for credential injection.
    #[must_use]
    pub const fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Sends a request to the admin API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The token store cannot be read (`Storage`)
    /// - A network error occurs (`Network`)
    /// - The backend answers 401 (`Unauthorized`, after the token is removed
    ///   and the sign-in redirect issued)
    /// - Any other non-2xx response is received (`RequestFailed`)
    /// - A success body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let headers = self.merge_headers(&request)?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        match &request.body {
            Some(RequestBody::Json(body)) => req_builder = req_builder.body(body.to_string()),
            Some(RequestBody::Multipart(file)) => {
                req_builder = req_builder.multipart(Self::multipart_form(file)?);
            }
            None => {}
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            code,
            "admin API response"
        );

        if code == 401 {
            return Err(self.expire_session(&request.path));
        }

        let body_text = res.text().await?;

        if !(200..300).contains(&code) {
            let message = ErrorEnvelope::message(&body_text);
            tracing::warn!(path = %request.path, code, %message, "admin API request failed");
            return Err(RequestFailedError { code, message }.into());
        }

        if code == 204 {
            return Ok(ApiResponse::NoContent);
        }

        Ok(ApiResponse::Json(serde_json::from_str(&body_text)?))
    }

    /// Builds the final header set for `request`.
    ///
    /// Caller headers replace defaults case-insensitively. Multipart requests
    /// carry no `Content-Type` so the transport can add the boundary.
    fn merge_headers(&self, request: &HttpRequest) -> Result<HashMap<String, String>, ApiError> {
        let mut headers = self.default_headers.clone();

        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.retain(|existing, _| !existing.eq_ignore_ascii_case(key));
                headers.insert(key.clone(), value.clone());
            }
        }

        if request.is_multipart() {
            headers.retain(|key, _| !key.eq_ignore_ascii_case(CONTENT_TYPE));
        }

        if let Some(token) = self.tokens.get()? {
            headers.retain(|key, _| !key.eq_ignore_ascii_case(AUTHORIZATION));
            headers.insert(AUTHORIZATION.to_string(), token.header_value());
        }

        Ok(headers)
    }

    /// Tears down the session after a 401 and returns the error to report.
    fn expire_session(&self, path: &str) -> ApiError {
        tracing::warn!(path, "session rejected by backend, signing out");
        if let Err(error) = self.tokens.remove() {
            tracing::warn!(%error, "failed to remove rejected token");
        }
        self.navigator.redirect(&self.sign_in_page);
        ApiError::Unauthorized
    }

    fn multipart_form(file: &MultipartFile) -> Result<reqwest::multipart::Form, ApiError> {
        let mut part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone());
        if let Some(mime_type) = &file.mime_type {
            part = part.mime_str(mime_type)?;
        }
        Ok(reqwest::multipart::Form::new().part(file.field_name.clone(), part))
    }
}
