//! Catalog item endpoints, including image upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdminApi;
use crate::clients::{ApiError, HttpMethod, HttpRequest, MultipartFile};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Item {
    pub id: i64,
    /// Human-facing item code (e.g. `ITM-001`).
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Average review rating, 0 to 5.
    #[serde(default, deserialize_with = "crate::decimal::deserialize_option")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ItemVariant {
    pub id: i64,
    pub variant_name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewItem {
    pub item_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Variant names created alongside the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Result of an image upload.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ImageUpload {
    /// Where the stored image is served from.
    pub image_url: String,
}

impl AdminApi {
    /// Lists all items.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_items(&self) -> Result<Vec<Item>, ApiError> {
        self.get("/api/items/").await
    }

    /// Fetches one item by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 for an unknown id.
    pub async fn get_item(&self, id: i64) -> Result<Item, ApiError> {
        self.get(format!("/api/items/{id}")).await
    }

    /// Creates an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_item(&self, item: &NewItem) -> Result<Item, ApiError> {
        self.send(HttpMethod::Post, "/api/items/", item).await
    }

    /// Updates an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_item(&self, id: i64, update: &ItemUpdate) -> Result<Item, ApiError> {
        self.send(HttpMethod::Put, format!("/api/items/{id}"), update)
            .await
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_item(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/items/{id}")).await
    }

    /// Lists the variants of an item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_item_variants(&self, id: i64) -> Result<Vec<ItemVariant>, ApiError> {
        self.get(format!("/api/items/{id}/variants")).await
    }

    /// Uploads an image for an item as a multipart form.
    ///
    /// The request carries the bearer token but no JSON `Content-Type`, so the
    /// transport sets the multipart boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an empty file, otherwise
    /// [`ApiError`] if the request fails.
    pub async fn upload_item_image(
        &self,
        id: i64,
        file: MultipartFile,
    ) -> Result<ImageUpload, ApiError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("/api/items/{id}/upload-image"))
                .multipart(file)
                .build()?;
        Ok(self.request(request).await?.into_model()?)
    }
}
