//! Redirect seam and the per-navigation access gate.
//!
//! The client core never renders anything. When a session ends (a 401 from the
//! backend) or an unauthenticated user opens a protected page, it asks a
//! [`Navigator`] to move the user to the sign-in page. Front ends implement
//! [`Navigator`] for their own routing; [`LoggingNavigator`] only records the
//! request in the log.

use std::fmt::Debug;
use std::sync::Arc;

use crate::auth::TokenManager;
use crate::config::AdminConfig;
use crate::storage::StorageError;

/// Receives redirect requests from the client core.
pub trait Navigator: Debug + Send + Sync {
    /// Moves the user to `page`.
    fn redirect(&self, page: &str);
}

/// A [`Navigator`] that only logs redirect requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, page: &str) {
        tracing::info!(page, "redirect requested");
    }
}

/// Outcome of an [`AccessGate`] check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// The page may be shown.
    Allow,
    /// No token is present on a protected page; a redirect was issued.
    RedirectToSignIn,
}

/// Decides, once per navigation, whether the current page may be shown.
///
/// Public pages are always allowed. Any other page requires a stored token;
/// without one the gate redirects to the configured sign-in page.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use shop_admin::{AccessGate, AdminConfig, GateDecision, LoggingNavigator, TokenManager};
/// use shop_admin::storage::MemoryStore;
///
/// let gate = AccessGate::new(
///     &AdminConfig::default(),
///     TokenManager::new(Arc::new(MemoryStore::new())),
///     Arc::new(LoggingNavigator),
/// );
///
/// assert_eq!(gate.check("/admin/Sign-In.html").unwrap(), GateDecision::Allow);
/// assert_eq!(gate.check("/admin/orders.html").unwrap(), GateDecision::RedirectToSignIn);
/// ```
#[derive(Clone, Debug)]
pub struct AccessGate {
    public_pages: Vec<String>,
    sign_in_page: String,
    tokens: TokenManager,
    navigator: Arc<dyn Navigator>,
}

impl AccessGate {
    /// Creates a gate from the configured public pages and sign-in page.
    #[must_use]
    pub fn new(
        config: &AdminConfig,
        tokens: TokenManager,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            public_pages: config.public_pages().to_vec(),
            sign_in_page: config.sign_in_page().to_string(),
            tokens,
            navigator,
        }
    }

    /// Checks the page at `path`, redirecting when access is denied.
    ///
    /// Only the last path segment is compared against the public set, so
    /// `/site/Sign-In.html` and `Sign-In.html` are equivalent and `/site/` is
    /// the root page.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the token cannot be read.
    pub fn check(&self, path: &str) -> Result<GateDecision, StorageError> {
        let page = page_name(path);
        if self.public_pages.iter().any(|p| p == page) {
            return Ok(GateDecision::Allow);
        }

        if self.tokens.is_authenticated()? {
            return Ok(GateDecision::Allow);
        }

        tracing::debug!(page, "protected page opened without a token");
        self.navigator.redirect(&self.sign_in_page);
        Ok(GateDecision::RedirectToSignIn)
    }
}

/// Returns the last `/`-separated segment of `path`.
fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}
