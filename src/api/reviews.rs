//! Review endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdminApi;
use crate::clients::{ApiError, HttpMethod};

/// A review. Listing endpoints join in `item_name`; per-item listings omit
/// `item_id`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Review {
    pub id: i64,
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub item_name: Option<String>,
    pub customer_name: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An item that has at least one review.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ReviewedItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(
        default,
        alias = "rating",
        deserialize_with = "crate::decimal::deserialize_option"
    )]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u64>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewReview {
    /// Database id of the reviewed item.
    pub item_id: i64,
    pub customer_name: String,
    /// Rating from 0 to 5.
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AdminApi {
    /// Lists all reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get("/api/reviews/").await
    }

    /// Fetches one review by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 if the review does
    /// not exist.
    pub async fn get_review(&self, id: i64) -> Result<Review, ApiError> {
        self.get(format!("/api/reviews/{id}")).await
    }

    /// Lists the reviews of one item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_reviews_by_item(&self, item_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get(format!("/api/reviews/item/{item_id}")).await
    }

    /// Lists items that have reviews.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_items_with_reviews(&self) -> Result<Vec<ReviewedItem>, ApiError> {
        self.get("/api/reviews/items-with-reviews").await
    }

    /// Creates a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] for an unknown item or a rating
    /// outside 0 to 5.
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        self.send(HttpMethod::Post, "/api/reviews/", review).await
    }

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_review(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/reviews/{id}")).await
    }
}
