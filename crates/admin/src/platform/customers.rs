//! Platform user and customer endpoints.
//!
//! The platform exposes its user directory through the legacy `getusers`
//! routes; both storefront customers and panel staff live in the same
//! collection, distinguished by role.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::{CustomerId, UserRole};

use super::PlatformError;
use super::client::PlatformClient;

/// A platform user as mirrored from the directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Platform user ID.
    pub id: CustomerId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number, when on file.
    #[serde(default)]
    pub phone: Option<String>,
    /// Directory role.
    pub role: UserRole,
    /// Number of orders placed.
    #[serde(default)]
    pub orders_count: i64,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Customer {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Payload for creating a platform user.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerInput {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Directory role.
    pub role: UserRole,
}

impl PlatformClient {
    /// Fetch the full user directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_users(&self, token: &str) -> Result<Vec<Customer>, PlatformError> {
        self.get(token, "/api/admin/getusers").await
    }

    /// Create a new platform user.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the platform rejects
    /// the payload (e.g., duplicate email).
    #[instrument(skip(self, token, input), fields(email = %input.email))]
    pub async fn create_user(
        &self,
        token: &str,
        input: &CustomerInput,
    ) -> Result<(), PlatformError> {
        self.post_ack(token, "/api/admin/getusers", input).await
    }

    /// Delete a platform user.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the user is unknown.
    #[instrument(skip(self, token), fields(user_id = %id))]
    pub async fn delete_user(&self, token: &str, id: CustomerId) -> Result<(), PlatformError> {
        self.delete_ack(token, &format!("/api/admin/getusers/{id}"))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_parsing() {
        let json = r#"{
            "id": 9,
            "first_name": "June",
            "last_name": "Park",
            "email": "june@example.com",
            "phone": "+1 555 0100",
            "role": "customer",
            "orders_count": 4,
            "created_at": "2026-01-15T09:30:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, CustomerId::new(9));
        assert_eq!(customer.role, UserRole::Customer);
        assert_eq!(customer.display_name(), "June Park");
    }

    #[test]
    fn test_customer_optional_fields() {
        let json = r#"{
            "id": 1,
            "first_name": "Sam",
            "last_name": "Ortiz",
            "email": "sam@tidemark.dev",
            "role": "staff"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert!(customer.phone.is_none());
        assert_eq!(customer.orders_count, 0);
    }
}
