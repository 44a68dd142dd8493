//! Payment endpoints and the payment-status find-or-create flow.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AdminApi, OrderRef};
use crate::clients::{ApiError, HttpMethod};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment record.
///
/// List responses report `order_id` as the order code and add the customer's
/// name and email; `order_db_id` is the order's database id where the
/// endpoint provides it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub payment_id: String,
    pub order_id: OrderRef,
    #[serde(default)]
    pub order_db_id: Option<i64>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub payment_method: String,
    pub status: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub amount: f64,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewPayment {
    pub payment_id: String,
    /// Database id of the order being paid.
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PaymentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

/// Generates a payment code from the current time, e.g. `PAY-1718000000000`.
fn generate_payment_id() -> String {
    format!("PAY-{}", Utc::now().timestamp_millis())
}

impl AdminApi {
    /// Lists all payments.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/api/payments/").await
    }

    /// Lists the payments of the signed-in account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_my_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get("/api/payments/my-payments").await
    }

    /// Fetches one payment by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 if the payment does
    /// not exist.
    pub async fn get_payment(&self, id: i64) -> Result<Payment, ApiError> {
        self.get(format!("/api/payments/{id}")).await
    }

    /// Creates a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] if the payment code already exists
    /// or the order is unknown.
    pub async fn create_payment(&self, payment: &NewPayment) -> Result<Payment, ApiError> {
        self.send(HttpMethod::Post, "/api/payments/", payment).await
    }

    /// Updates a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_payment(
        &self,
        id: i64,
        update: &PaymentUpdate,
    ) -> Result<Payment, ApiError> {
        self.send(HttpMethod::Put, format!("/api/payments/{id}"), update)
            .await
    }

    /// Deletes a payment.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_payment(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/payments/{id}")).await
    }

    /// Sets the payment status of an order, creating the payment if needed.
    ///
    /// The caller's payments are searched by `order_db_id`, the order's
    /// database id. A match is updated in place. Otherwise the order is looked
    /// up among the caller's orders and a new payment is created from its
    /// amount and payment method.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if neither a payment nor an order exists
    /// for `order_db_id`, otherwise [`ApiError`] if any request fails.
    pub async fn update_payment_status(
        &self,
        order_db_id: i64,
        status: PaymentStatus,
    ) -> Result<Payment, ApiError> {
        let payments = self.get_my_payments().await?;
        if let Some(payment) = payments
            .iter()
            .find(|payment| payment.order_db_id == Some(order_db_id))
        {
            let update = PaymentUpdate {
                status: Some(status),
            };
            return self.update_payment(payment.id, &update).await;
        }

        let orders = self.get_my_orders().await?;
        let order = orders
            .into_iter()
            .find(|order| order.id == order_db_id)
            .ok_or(ApiError::NotFound {
                resource: "Order",
                id: order_db_id,
            })?;

        tracing::debug!(order_db_id, "no payment for order, creating one");
        let payment = NewPayment {
            payment_id: generate_payment_id(),
            order_id: order_db_id,
            amount: order.amount,
            payment_method: order.payment_method,
            status: Some(status),
        };
        self.create_payment(&payment).await
    }
}
