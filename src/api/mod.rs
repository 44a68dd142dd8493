//! Typed resource methods for the shop admin backend.
//!
//! [`AdminApi`] wraps an [`HttpClient`] and exposes one async method per
//! backend action. Each method is a fixed mapping of HTTP method, path and
//! body shape onto [`HttpClient::request`]; two methods carry client-side
//! logic of their own:
//!
//! - [`AdminApi::update_payment_status`] finds the caller's payment for an
//!   order, or creates one from the order when none exists
//! - [`AdminApi::checkout_cart`] places one checkout per cart line
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_admin::{AdminApi, AdminConfig, LoggingNavigator, TokenManager};
//! use shop_admin::storage::FileStore;
//!
//! let store = Arc::new(FileStore::new("admin-state.json"));
//! let api = AdminApi::new(
//!     &AdminConfig::default(),
//!     TokenManager::new(store),
//!     Arc::new(LoggingNavigator),
//! )?;
//!
//! api.login("admin", "secret").await?;
//! for customer in api.get_customers().await? {
//!     println!("{} <{}>", customer.name, customer.email);
//! }
//! ```

mod auth;
mod customers;
mod dashboard;
mod items;
mod orders;
mod payments;
mod reviews;
mod rewards;
mod shipping;

pub use auth::{TokenResponse, User};
pub use customers::{Customer, CustomerStatus, CustomerUpdate, NewCustomer};
pub use dashboard::{AverageRating, DashboardStats, RecentReview, TopItem};
pub use items::{ImageUpload, Item, ItemUpdate, ItemVariant, NewItem};
pub use orders::{
    CheckoutRequest, MyOrderUpdate, NewOrder, Order, OrderDetail, OrderStatus, OrderUpdate,
    PaymentMethod,
};
pub use payments::{NewPayment, Payment, PaymentStatus, PaymentUpdate};
pub use reviews::{NewReview, Review, ReviewedItem};
pub use rewards::{NewReward, Reward, RewardStatus, RewardUpdate, RewardValidation};
pub use shipping::{NewShipping, ShippingRecord, ShippingStatus, ShippingUpdate};

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::{Navigator, TokenManager};
use crate::clients::{ApiError, ApiResponse, HttpClient, HttpMethod, HttpRequest};
use crate::config::AdminConfig;

/// Reference to an order as the backend reports it.
///
/// List endpoints for shipping and payments report the human-facing order
/// code (e.g. `ORD-0001`); single-record endpoints report the database id.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OrderRef {
    /// Database id of the order.
    Id(i64),
    /// Human-facing order code.
    Code(String),
}

impl OrderRef {
    /// Returns the database id, if this reference carries one.
    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Code(_) => None,
        }
    }
}

impl fmt::Display for OrderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Code(code) => f.write_str(code),
        }
    }
}

/// Client for the shop admin REST API.
///
/// `AdminApi` is `Send + Sync`; share it behind an `Arc` across tasks.
#[derive(Debug)]
pub struct AdminApi {
    client: HttpClient,
}

// Verify AdminApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AdminApi>();
};

impl AdminApi {
    /// Creates a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP transport cannot be built.
    pub fn new(
        config: &AdminConfig,
        tokens: TokenManager,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            client: HttpClient::new(config, tokens, navigator)?,
        })
    }

    /// Wraps an existing [`HttpClient`].
    #[must_use]
    pub const fn from_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the token manager shared with the HTTP client.
    #[must_use]
    pub const fn tokens(&self) -> &TokenManager {
        self.client.tokens()
    }

    /// Sends a raw request for endpoints without a typed method.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, ApiError> {
        self.client.request(request).await
    }

    async fn get<T: DeserializeOwned>(&self, path: impl Into<String>) -> Result<T, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, path).build()?;
        self.fetch(request).await
    }

    /// GET with an optional `limit` query parameter.
    async fn get_limited<T: DeserializeOwned>(
        &self,
        path: impl Into<String>,
        limit: Option<u32>,
    ) -> Result<T, ApiError> {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(limit) = limit {
            builder = builder.query_param("limit", limit.to_string());
        }
        self.fetch(builder.build()?).await
    }

    async fn fetch<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        Ok(self.client.request(request).await?.into_model()?)
    }

    async fn send<B, T>(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = HttpRequest::builder(method, path)
            .json(serde_json::to_value(body)?)
            .build()?;
        Ok(self.client.request(request).await?.into_model()?)
    }

    /// Deletes a resource; any success body is discarded.
    async fn delete(&self, path: impl Into<String>) -> Result<(), ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build()?;
        self.client.request(request).await?;
        Ok(())
    }
}
