//! Response types for the admin API.
//!
//! Successful calls yield an [`ApiResponse`]: either a parsed JSON body or an
//! explicit [`ApiResponse::NoContent`] marker for 204 answers. Failed calls
//! carry the backend's [`ErrorEnvelope`], reduced to one message by
//! [`ErrorEnvelope::message`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Message used when an error response carries nothing usable.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// Separator placed between field-level messages.
pub const DETAIL_SEPARATOR: &str = ", ";

/// A successful response from the admin API.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The backend answered 204 No Content.
    NoContent,
    /// The parsed JSON body.
    Json(Value),
}

impl ApiResponse {
    /// Returns whether this is the no-content marker.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        matches!(self, Self::NoContent)
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::NoContent => None,
            Self::Json(value) => Some(value),
        }
    }

    /// Deserializes the body into `T`.
    ///
    /// A no-content response deserializes from `null`, which suits `()` and
    /// `Option<_>` targets.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body does not match `T`.
    pub fn into_model<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            Self::NoContent => serde_json::from_value(Value::Null),
            Self::Json(value) => serde_json::from_value(value),
        }
    }
}

/// One field-level entry of a list-shaped error detail.
///
/// The backend's validation errors carry `msg`; other producers use
/// `message`. Entries with neither render as JSON text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FieldError(pub Value);

impl FieldError {
    /// Returns the first non-empty of `msg` and `message`, else the entry's
    /// JSON text.
    #[must_use]
    pub fn message(&self) -> String {
        ["msg", "message"]
            .iter()
            .find_map(|key| {
                self.0
                    .get(key)
                    .and_then(Value::as_str)
                    .filter(|text| !text.is_empty())
            })
            .map_or_else(|| self.0.to_string(), str::to_string)
    }
}

/// The `detail` member of an error envelope.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// A single message.
    Message(String),
    /// A list of field-level messages.
    List(Vec<FieldError>),
    /// Anything else; rendered as JSON text.
    Other(Value),
}

impl ErrorDetail {
    /// Reduces the detail to one line, or `None` when it is empty.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let message = match self {
            Self::Message(message) => message.clone(),
            Self::List(entries) => entries
                .iter()
                .map(FieldError::message)
                .collect::<Vec<_>>()
                .join(DETAIL_SEPARATOR),
            Self::Other(value) => value.to_string(),
        };
        (!message.is_empty()).then_some(message)
    }
}

/// The backend's error body: `{"detail": ...}`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

impl ErrorEnvelope {
    /// Builds the human-readable message for an error response body.
    ///
    /// In order of preference:
    /// 1. the `detail` member (lists joined with `", "`)
    /// 2. the whole body as JSON text
    /// 3. [`FALLBACK_ERROR_MESSAGE`] for an empty, non-JSON, `null` or `{}` body
    ///
    /// # Example
    ///
    /// ```rust
    /// use shop_admin::clients::ErrorEnvelope;
    ///
    /// let body = r#"{"detail": [{"msg": "a"}, {"msg": "b"}]}"#;
    /// assert_eq!(ErrorEnvelope::message(body), "a, b");
    ///
    /// assert_eq!(ErrorEnvelope::message(r#"{"detail": "Item not found"}"#), "Item not found");
    /// assert_eq!(ErrorEnvelope::message("<html>oops</html>"), "Request failed");
    /// ```
    #[must_use]
    pub fn message(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<Value>(body) else {
            return FALLBACK_ERROR_MESSAGE.to_string();
        };

        if let Ok(envelope) = Self::deserialize(&value) {
            if let Some(message) = envelope.detail.as_ref().and_then(ErrorDetail::message) {
                return message;
            }
        }

        match &value {
            Value::Null => FALLBACK_ERROR_MESSAGE.to_string(),
            Value::Object(map) if map.is_empty() => FALLBACK_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
