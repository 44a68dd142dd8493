//! Customer endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdminApi;
use crate::clients::{ApiError, HttpMethod};

/// Account state of a customer.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    /// Human-facing customer code (e.g. `CUST-001`).
    pub customer_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: String,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
}

impl AdminApi {
    /// Lists all customers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get("/api/customers/").await
    }

    /// Fetches one customer by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 for an unknown id.
    pub async fn get_customer(&self, id: i64) -> Result<Customer, ApiError> {
        self.get(format!("/api/customers/{id}")).await
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] if the customer code or email is
    /// already in use.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        self.send(HttpMethod::Post, "/api/customers/", customer).await
    }

    /// Updates a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_customer(
        &self,
        id: i64,
        update: &CustomerUpdate,
    ) -> Result<Customer, ApiError> {
        self.send(HttpMethod::Put, format!("/api/customers/{id}"), update)
            .await
    }

    /// Deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_customer(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/customers/{id}")).await
    }
}
