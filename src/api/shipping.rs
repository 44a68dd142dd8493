//! Shipping endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AdminApi, OrderRef};
use crate::clients::{ApiError, HttpMethod};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ShippingStatus {
    Preparing,
    Shipped,
    Delivered,
    Cancelled,
}

impl ShippingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preparing => "preparing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shipment. `order_id` is the order code in list responses and the
/// order's database id in single-record responses.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShippingRecord {
    pub id: i64,
    pub shipping_id: String,
    pub order_id: OrderRef,
    #[serde(default)]
    pub courier: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub status: String,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewShipping {
    pub shipping_id: String,
    /// Database id of the shipped order.
    pub order_id: i64,
    pub courier: String,
    pub address: String,
}

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ShippingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShippingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl AdminApi {
    /// Lists all shipments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_shipping(&self) -> Result<Vec<ShippingRecord>, ApiError> {
        self.get("/api/shipping/").await
    }

    /// Lists the shipments of the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_my_shipping(&self) -> Result<Vec<ShippingRecord>, ApiError> {
        self.get("/api/shipping/my-shipping").await
    }

    /// Fetches one shipment by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 if the shipment
    /// does not exist.
    pub async fn get_shipping_record(&self, id: i64) -> Result<ShippingRecord, ApiError> {
        self.get(format!("/api/shipping/{id}")).await
    }

    /// Creates a shipment for an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] if the order is unknown or the
    /// shipping code is taken.
    pub async fn create_shipping(
        &self,
        shipping: &NewShipping,
    ) -> Result<ShippingRecord, ApiError> {
        self.send(HttpMethod::Post, "/api/shipping/", shipping).await
    }

    /// Updates a shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_shipping(
        &self,
        id: i64,
        update: &ShippingUpdate,
    ) -> Result<ShippingRecord, ApiError> {
        self.send(HttpMethod::Put, format!("/api/shipping/{id}"), update)
            .await
    }

    /// Sets only the status of a shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_shipping_status(
        &self,
        id: i64,
        status: ShippingStatus,
    ) -> Result<ShippingRecord, ApiError> {
        let update = ShippingUpdate {
            status: Some(status),
            ..ShippingUpdate::default()
        };
        self.update_shipping(id, &update).await
    }

    /// Deletes a shipment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_shipping(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/shipping/{id}")).await
    }
}
