//! Configuration types for the shop admin client.
//!
//! # Overview
//!
//! - [`AdminConfig`]: all client settings
//! - [`AdminConfigBuilder`]: builder for [`AdminConfig`]
//! - [`ApiBaseUrl`]: a validated backend base URL
//! - [`BearerToken`]: a masked bearer credential
//!
//! # Example
//!
//! ```rust
//! use shop_admin::{AdminConfig, ApiBaseUrl};
//!
//! let config = AdminConfig::builder()
//!     .base_url(ApiBaseUrl::new("http://127.0.0.1:8002").unwrap())
//!     .user_agent_prefix("AdminDashboard/1.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.sign_in_page(), "Sign-In.html");
//! ```

mod newtypes;

pub use newtypes::{ApiBaseUrl, BearerToken, DEFAULT_API_BASE_URL};

use std::time::Duration;

use crate::error::ConfigError;

/// Page that unauthenticated users are sent to.
pub const DEFAULT_SIGN_IN_PAGE: &str = "Sign-In.html";

/// Pages reachable without a bearer token. The empty name is the site root.
pub const DEFAULT_PUBLIC_PAGES: &[&str] = &["Sign-In.html", "Sign-Up.html", "index.html", ""];

/// Configuration for the shop admin client.
///
/// `AdminConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    base_url: ApiBaseUrl,
    sign_in_page: String,
    public_pages: Vec<String>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AdminConfig {
    /// Creates a new builder for constructing an `AdminConfig`.
    #[must_use]
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::new()
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the page name used for sign-in redirects.
    #[must_use]
    pub fn sign_in_page(&self) -> &str {
        &self.sign_in_page
    }

    /// Returns the pages that do not require a token.
    #[must_use]
    pub fn public_pages(&self) -> &[String] {
        &self.public_pages
    }

    /// Returns whether `page` is reachable without a token.
    #[must_use]
    pub fn is_public_page(&self, page: &str) -> bool {
        self.public_pages.iter().any(|p| p == page)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    ///
    /// When unset, the HTTP transport's own defaults apply.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            base_url: ApiBaseUrl::default(),
            sign_in_page: DEFAULT_SIGN_IN_PAGE.to_string(),
            public_pages: DEFAULT_PUBLIC_PAGES.iter().map(ToString::to_string).collect(),
            user_agent_prefix: None,
            timeout: None,
        }
    }
}

// Verify AdminConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminConfig>();
};

/// Builder for constructing [`AdminConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_API_BASE_URL`]
/// - `sign_in_page`: [`DEFAULT_SIGN_IN_PAGE`]
/// - `public_pages`: [`DEFAULT_PUBLIC_PAGES`]
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    base_url: Option<ApiBaseUrl>,
    sign_in_page: Option<String>,
    public_pages: Option<Vec<String>>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl AdminConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the backend base URL.
    #[must_use]
    pub fn base_url(mut self, url: ApiBaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the sign-in page name.
    #[must_use]
    pub fn sign_in_page(mut self, page: impl Into<String>) -> Self {
        self.sign_in_page = Some(page.into());
        self
    }

    /// Replaces the public page set.
    #[must_use]
    pub fn public_pages<I, S>(mut self, pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_pages = Some(pages.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a transport timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`AdminConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySignInPage`] if the sign-in page is empty, or
    /// [`ConfigError::SignInPageNotPublic`] if it is missing from the public set.
    pub fn build(self) -> Result<AdminConfig, ConfigError> {
        let defaults = AdminConfig::default();

        let sign_in_page = self.sign_in_page.unwrap_or(defaults.sign_in_page);
        if sign_in_page.trim().is_empty() {
            return Err(ConfigError::EmptySignInPage);
        }

        let public_pages = self.public_pages.unwrap_or(defaults.public_pages);
        if !public_pages.iter().any(|p| *p == sign_in_page) {
            return Err(ConfigError::SignInPageNotPublic { page: sign_in_page });
        }

        Ok(AdminConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            sign_in_page,
            public_pages,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
