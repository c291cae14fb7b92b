//! Tidemark platform REST API client.
//!
//! The platform owns all business logic: authentication, persistence, stock
//! calculations, and state transition enforcement. Every module here is a
//! thin, typed wrapper over one group of endpoints. The contract is always
//! the same: send JSON, receive a `{success, message, data}` envelope.

mod analytics;
mod auth;
mod client;
mod customers;
mod notifications;
mod orders;
mod products;
mod shipments;

pub use analytics::{DashboardStats, StatusCount};
pub use auth::LoginData;
pub use client::PlatformClient;
pub use customers::{Customer, CustomerInput};
pub use notifications::{Notification, NotificationInput, ProductNotification};
pub use orders::{Order, OrderCustomer, OrderLineItem, PaymentInfo, ShippingInfo};
pub use products::{InventoryLine, Product, ProductInput};
pub use shipments::Shipment;

use serde::Deserialize;
use thiserror::Error;

/// Fallback message when the platform gives us nothing usable.
pub const GENERIC_ERROR_MESSAGE: &str = "The platform request failed. Please try again.";

/// Errors from the platform API client.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Network or transport failure talking to the platform.
    #[error("platform request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured platform base URL is not a valid URL.
    #[error("invalid platform URL: {0}")]
    Url(#[from] url::ParseError),

    /// The platform rejected the bearer token (HTTP 401).
    #[error("platform rejected the access token")]
    TokenRejected,

    /// The platform is rate limiting us (HTTP 429).
    #[error("rate limited by platform, retry after {0}s")]
    RateLimited(u64),

    /// The platform returned an error envelope or non-success status.
    #[error("platform error ({status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message from the response envelope, or a generic fallback.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("failed to parse platform response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The envelope reported success but carried no data.
    #[error("platform response contained no data")]
    MissingData,
}

impl PlatformError {
    /// The message to surface to the admin user for this error.
    ///
    /// Uses the platform-provided message where one exists and a generic
    /// fallback otherwise. Never exposes transport internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::TokenRejected => "Your session has expired. Please sign in again.".to_string(),
            Self::RateLimited(_) => {
                "The platform is busy right now. Please try again shortly.".to_string()
            }
            Self::Http(_) | Self::Url(_) | Self::Parse(_) | Self::MissingData => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// Standard platform response envelope.
///
/// Every endpoint wraps its payload the same way; `data` is absent on
/// acknowledgement-only responses (deletes, status updates).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable message, mostly present on failure.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload, when the endpoint returns one.
    #[serde(default)]
    pub data: Option<T>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let json = r#"{"success": true, "data": [1, 2, 3]}"#;
        let envelope: Envelope<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert_eq!(envelope.data.unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_failure_message() {
        let json = r#"{"success": false, "message": "Out of stock"}"#;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Out of stock"));
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_user_message_prefers_api_message() {
        let err = PlatformError::Api {
            status: 422,
            message: "Tracking number already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Tracking number already exists");
    }

    #[test]
    fn test_user_message_generic_fallback() {
        let err = PlatformError::MissingData;
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
