//! Account endpoints: signup, login, and the current user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AdminApi;
use crate::clients::{ApiError, HttpMethod};
use crate::config::BearerToken;

/// A shop account.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Credential issued by a successful login.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"*****")
            .field("token_type", &self.token_type)
            .finish()
    }
}

impl AdminApi {
    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] when the username or email is taken
    /// or fails validation.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = json!({ "username": username, "email": email, "password": password });
        self.send(HttpMethod::Post, "/api/auth/signup", &body).await
    }

    /// Logs in and stores the issued token for subsequent calls.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] for bad credentials, and
    /// [`ApiError::Config`] if the backend issues an empty token.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = json!({ "username": username, "password": password });
        let response: TokenResponse = self
            .send(HttpMethod::Post, "/api/auth/login/json", &body)
            .await?;

        let token = BearerToken::new(response.access_token.clone())?;
        self.tokens().set(&token)?;
        tracing::info!(username, "signed in");
        Ok(response)
    }

    /// Forgets the stored token. The backend keeps no session to end.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Storage`] if the token store fails.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.tokens().remove()?;
        Ok(())
    }

    /// Returns the account behind the stored token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when no valid token is stored.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.get("/api/auth/me").await
    }
}
