//! Notification endpoints.
//!
//! Admin notifications live under `/api/admin/notifications`; stock alerts
//! raised by storefront customers come from the client-side endpoint and are
//! read-only here.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::{NotificationId, NotificationKind, ProductId};

use super::PlatformError;
use super::client::PlatformClient;

/// An admin notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    /// Platform notification ID.
    pub id: NotificationId,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Category.
    pub kind: NotificationKind,
    /// Whether the notification has been read.
    #[serde(default)]
    pub read: bool,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A customer-raised product notification (e.g., back-in-stock request).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductNotification {
    /// Platform notification ID.
    pub id: NotificationId,
    /// Product the request refers to.
    pub product_id: ProductId,
    /// Requesting customer email.
    pub email: String,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Payload for creating an admin notification.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationInput {
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Category.
    pub kind: NotificationKind,
}

impl PlatformClient {
    /// Fetch all admin notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_notifications(&self, token: &str) -> Result<Vec<Notification>, PlatformError> {
        self.get(token, "/api/admin/notifications").await
    }

    /// Create an admin notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the platform rejects
    /// the payload.
    #[instrument(skip(self, token, input), fields(title = %input.title))]
    pub async fn create_notification(
        &self,
        token: &str,
        input: &NotificationInput,
    ) -> Result<(), PlatformError> {
        self.post_ack(token, "/api/admin/notifications", input).await
    }

    /// Mark a notification as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the notification is
    /// unknown.
    #[instrument(skip(self, token), fields(notification_id = %id))]
    pub async fn mark_notification_read(
        &self,
        token: &str,
        id: NotificationId,
    ) -> Result<(), PlatformError> {
        self.put_ack(
            token,
            &format!("/api/admin/notifications/{id}/read"),
            &serde_json::json!({}),
        )
        .await
    }

    /// Delete a notification.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the notification is
    /// unknown.
    #[instrument(skip(self, token), fields(notification_id = %id))]
    pub async fn delete_notification(
        &self,
        token: &str,
        id: NotificationId,
    ) -> Result<(), PlatformError> {
        self.delete_ack(token, &format!("/api/admin/notifications/{id}"))
            .await
    }

    /// Fetch customer-raised product notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_product_notifications(
        &self,
        token: &str,
    ) -> Result<Vec<ProductNotification>, PlatformError> {
        self.get(token, "/api/client/product/notifications").await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_parsing() {
        let json = r#"{
            "id": 5,
            "title": "Low stock",
            "message": "Trail Bottle 750ml (Moss) is below threshold",
            "kind": "stock",
            "read": false,
            "created_at": "2026-04-01T07:00:00Z"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id, NotificationId::new(5));
        assert_eq!(notification.kind, NotificationKind::Stock);
        assert!(!notification.read);
    }

    #[test]
    fn test_product_notification_parsing() {
        let json = r#"{
            "id": 8,
            "product_id": 12,
            "email": "june@example.com"
        }"#;
        let notification: ProductNotification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.product_id, ProductId::new(12));
    }
}
