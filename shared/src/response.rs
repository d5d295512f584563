//! API Response types
//!
//! Standardized response envelope for every endpoint:
//! ```json
//! {
//!     "message": "ok",
//!     "data": { ... },
//!     "total": 2
//! }
//! ```
//! `data` and `total` are omitted when absent. Errors carry only `message`.

use serde::{Deserialize, Serialize};

/// Message used by every successful response
pub const MESSAGE_OK: &str = "ok";

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Human-readable message
    pub message: String,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Number of items in `data` for list responses (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            message: MESSAGE_OK.to_string(),
            data: Some(data),
            total: None,
        }
    }

    /// Attach a total count
    pub fn with_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Create a list response; `total` is the number of returned items
    pub fn list(items: Vec<T>) -> Self {
        let total = items.len() as i64;
        Self::ok(items).with_total(total)
    }
}

impl ApiResponse<()> {
    /// Create a response carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            total: None,
        }
    }

    /// Create a successful response without data
    pub fn empty() -> Self {
        Self::message(MESSAGE_OK)
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (http::StatusCode::OK, axum::Json(self)).into_response()
    }
}
