//! Dashboard endpoints.
//!
//! The sales report, rating distribution and top-items chart payloads are
//! shaped for the front end's chart widgets and returned as raw JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AdminApi;
use crate::clients::ApiError;

/// Headline counters for the dashboard.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DashboardStats {
    pub total_orders: u64,
    /// Orders not yet delivered, completed or cancelled.
    pub active_orders: u64,
    pub to_ship: u64,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub total_revenue: f64,
    pub total_customers: u64,
    pub total_items: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TopItem {
    pub name: String,
    /// Number of orders placed for the item.
    pub count: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RecentReview {
    pub item_name: String,
    pub customer_name: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AverageRating {
    /// Mean rating rounded to one decimal; 0 when there are no reviews.
    pub average_rating: f64,
    pub review_count: u64,
}

impl AdminApi {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/dashboard/stats").await
    }

    /// Best-selling items by order count. `None` uses the backend's limit of 5.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_top_items(&self, limit: Option<u32>) -> Result<Vec<TopItem>, ApiError> {
        self.get_limited("/api/dashboard/top-items", limit).await
    }

    /// Newest reviews first. `None` uses the backend's limit of 5.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_recent_reviews(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<RecentReview>, ApiError> {
        self.get_limited("/api/dashboard/recent-reviews", limit)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_average_rating(&self) -> Result<AverageRating, ApiError> {
        self.get("/api/dashboard/average-rating").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_sales_report(&self) -> Result<Value, ApiError> {
        self.get("/api/dashboard/sales-report").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_rating_distribution(&self) -> Result<Value, ApiError> {
        self.get("/api/dashboard/rating-distribution").await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_top_items_chart(&self) -> Result<Value, ApiError> {
        self.get("/api/dashboard/top-items-chart").await
    }
}
