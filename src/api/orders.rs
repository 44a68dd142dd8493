//! Order endpoints, the customer-facing "my orders" endpoints, and checkout.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdminApi;
use crate::cart::CartManager;
use crate::clients::{ApiError, HttpMethod};

/// Lifecycle state of an order.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Pending,
    Paid,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment methods accepted by the backend.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum PaymentMethod {
    GCash,
    Maya,
    #[serde(rename = "COD")]
    Cod,
    Card,
    PayPal,
}

impl PaymentMethod {
    /// Returns the wire name of the method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GCash => "GCash",
            Self::Maya => "Maya",
            Self::Cod => "COD",
            Self::Card => "Card",
            Self::PayPal => "PayPal",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order as returned by single-order, create, update, checkout and
/// "my orders" endpoints.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Order {
    /// Database id.
    pub id: i64,
    /// Human-facing order code (e.g. `ORD-0001`).
    pub order_id: String,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub quantity: Option<u32>,
    pub payment_method: String,
    pub status: String,
    #[serde(
        default,
        alias = "total_amount",
        deserialize_with = "crate::decimal::deserialize_option"
    )]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An order row of the admin order list, joined with customer and item names.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct OrderDetail {
    pub id: i64,
    pub order_id: String,
    pub customer_name: String,
    pub item_name: String,
    #[serde(default)]
    pub customer_address: Option<String>,
    pub payment_method: String,
    pub status: String,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewOrder {
    pub order_id: String,
    /// Database id of the customer.
    pub customer_id: i64,
    /// Database id of the item.
    pub item_id: i64,
    pub payment_method: String,
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

/// Changes a customer may make to one of their own orders.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct MyOrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
}

/// Body of one checkout call: a single item line.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub item_id: i64,
    pub quantity: u32,
    pub payment_method: String,
    pub shipping_method: String,
}

impl AdminApi {
    /// Lists all orders with customer and item names.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_orders(&self) -> Result<Vec<OrderDetail>, ApiError> {
        self.get("/api/orders/").await
    }

    /// Fetches one order by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 for an unknown id.
    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        self.get(format!("/api/orders/{id}")).await
    }

    /// Creates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.send(HttpMethod::Post, "/api/orders/", order).await
    }

    /// Updates an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_order(&self, id: i64, update: &OrderUpdate) -> Result<Order, ApiError> {
        self.send(HttpMethod::Put, format!("/api/orders/{id}"), update)
            .await
    }

    /// Deletes an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_order(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/orders/{id}")).await
    }

    /// Lists the orders of the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/api/orders/my-orders").await
    }

    /// Places an order for one item line.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn checkout(&self, checkout: &CheckoutRequest) -> Result<Order, ApiError> {
        self.send(HttpMethod::Post, "/api/orders/checkout", checkout)
            .await
    }

    /// Cancels one of the signed-in account's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn cancel_my_order(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/orders/my-orders/{id}")).await
    }

    /// Edits one of the signed-in account's orders.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_my_order(
        &self,
        id: i64,
        update: &MyOrderUpdate,
    ) -> Result<Order, ApiError> {
        self.send(HttpMethod::Put, format!("/api/orders/my-orders/{id}"), update)
            .await
    }

    /// Checks out every line of `cart`, one order per line, in cart order.
    ///
    /// Each line is removed from the cart once its order is placed. The first
    /// failure stops the run; that line and every later one stay in the cart.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] encountered. Orders placed before it are
    /// not rolled back.
    pub async fn checkout_cart(
        &self,
        cart: &CartManager,
        payment_method: &str,
        shipping_method: &str,
    ) -> Result<Vec<Order>, ApiError> {
        let mut placed = Vec::new();

        for entry in cart.get_cart()? {
            let checkout = CheckoutRequest {
                item_id: entry.item.id,
                quantity: entry.quantity,
                payment_method: payment_method.to_string(),
                shipping_method: shipping_method.to_string(),
            };

            let order = match self.checkout(&checkout).await {
                Ok(order) => order,
                Err(error) => {
                    tracing::warn!(
                        item_id = entry.item.id,
                        placed = placed.len(),
                        %error,
                        "checkout stopped"
                    );
                    return Err(error);
                }
            };

            cart.remove_item(entry.item.id)?;
            placed.push(order);
        }

        Ok(placed)
    }
}
