//! Reward (discount code) endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::AdminApi;
use crate::clients::{ApiError, HttpMethod};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    Valid,
    Expired,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Reward {
    pub id: i64,
    pub reward_id: String,
    #[serde(rename = "type")]
    pub reward_type: String,
    pub code: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub discount: f64,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub validity_period: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewReward {
    pub reward_id: String,
    #[serde(rename = "type")]
    pub reward_type: String,
    pub code: String,
    pub discount: f64,
    /// Last day the code can be redeemed.
    pub validity_period: NaiveDate,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct RewardUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub reward_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RewardStatus>,
}

/// Outcome of checking a reward code.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RewardValidation {
    pub valid: bool,
    pub reward_id: String,
    #[serde(rename = "type")]
    pub reward_type: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub discount: f64,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub validity_period: Option<DateTime<Utc>>,
}

impl AdminApi {
    /// Lists all rewards.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_rewards(&self) -> Result<Vec<Reward>, ApiError> {
        self.get("/api/rewards/").await
    }

    /// Fetches one reward by database id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 for an unknown id.
    pub async fn get_reward(&self, id: i64) -> Result<Reward, ApiError> {
        self.get(format!("/api/rewards/{id}")).await
    }

    /// Creates a reward.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] if the reward id or code is taken.
    pub async fn create_reward(&self, reward: &NewReward) -> Result<Reward, ApiError> {
        self.send(HttpMethod::Post, "/api/rewards/", reward).await
    }

    /// Updates a reward.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_reward(&self, id: i64, update: &RewardUpdate) -> Result<Reward, ApiError> {
        self.send(HttpMethod::Put, format!("/api/rewards/{id}"), update)
            .await
    }

    /// Deletes a reward.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_reward(&self, id: i64) -> Result<(), ApiError> {
        self.delete(format!("/api/rewards/{id}")).await
    }

    /// Checks whether a reward code can be redeemed.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with code 404 for an unknown code.
    pub async fn validate_reward_code(&self, code: &str) -> Result<RewardValidation, ApiError> {
        self.get(format!("/api/rewards/validate/{}", urlencoding::encode(code)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_reward_wire_shape() {
        let reward = NewReward {
            reward_id: "RWD-001".to_string(),
            reward_type: "Percentage".to_string(),
            code: "SAVE10".to_string(),
            discount: 10.0,
            validity_period: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        };

        assert_eq!(
            serde_json::to_value(&reward).unwrap(),
            json!({
                "reward_id": "RWD-001",
                "type": "Percentage",
                "code": "SAVE10",
                "discount": 10.0,
                "validity_period": "2025-12-31"
            })
        );
    }

    #[test]
    fn test_reward_reads_type_and_decimal_discount() {
        let reward: Reward = serde_json::from_value(json!({
            "id": 1,
            "reward_id": "RWD-001",
            "type": "Fixed",
            "code": "LESS50",
            "discount": "50.00",
            "validity_period": "2025-12-31T00:00:00",
            "status": "valid",
            "created_at": "2025-01-01T09:00:00"
        }))
        .unwrap();

        assert_eq!(reward.reward_type, "Fixed");
        assert!((reward.discount - 50.0).abs() < f64::EPSILON);
        assert!(reward.validity_period.is_some());
    }

    #[test]
    fn test_validation_accepts_bare_date() {
        let validation: RewardValidation = serde_json::from_value(json!({
            "valid": false,
            "reward_id": "RWD-002",
            "type": "Percentage",
            "discount": 15.0,
            "validity_period": "2024-01-31"
        }))
        .unwrap();

        assert!(!validation.valid);
        assert!(validation.validity_period.is_some());
    }
}
