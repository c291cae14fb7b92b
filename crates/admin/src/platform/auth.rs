//! Platform authentication.
//!
//! The platform issues a bearer token and a role on login; the admin panel
//! stores both in the server-side session. There is no client-side expiry
//! tracking - a rejected token surfaces as `PlatformError::TokenRejected`
//! and sends the admin back to the login page.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::UserRole;

use super::PlatformError;
use super::client::PlatformClient;

/// Login request body for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    /// Bearer token for subsequent API calls.
    pub token: String,
    /// Role of the authenticated user.
    pub role: UserRole,
    /// Display name, when the platform provides one.
    #[serde(default)]
    pub name: Option<String>,
}

impl PlatformClient {
    /// Authenticate against the platform with email and password.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Api` with the platform's message when the
    /// credentials are rejected, or a transport error if the platform is
    /// unreachable.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, PlatformError> {
        let body = LoginRequest { email, password };
        self.send(Method::POST, "/api/auth/login", None, Some(&body))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_data_parsing() {
        let json = r#"{"token": "abc123", "role": "admin", "name": "Dana"}"#;
        let data: LoginData = serde_json::from_str(json).unwrap();
        assert_eq!(data.token, "abc123");
        assert_eq!(data.role, UserRole::Admin);
        assert_eq!(data.name.as_deref(), Some("Dana"));
    }

    #[test]
    fn test_login_data_without_name() {
        let json = r#"{"token": "abc123", "role": "customer"}"#;
        let data: LoginData = serde_json::from_str(json).unwrap();
        assert_eq!(data.role, UserRole::Customer);
        assert!(data.name.is_none());
    }

    #[test]
    fn test_login_request_shape() {
        let body = LoginRequest {
            email: "admin@tidemark.dev",
            password: "hunter2",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["email"], "admin@tidemark.dev");
        assert_eq!(json["password"], "hunter2");
    }
}
