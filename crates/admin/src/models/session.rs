//! Session-related types for admin authentication.
//!
//! The original client kept the platform token and role in browser-local
//! storage, readable from anywhere. Here both live in the server-side
//! session and are handed to handlers explicitly through extractors.

use serde::{Deserialize, Serialize};

use tidemark_core::UserRole;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin and
/// authenticate platform calls on their behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Email the admin signed in with.
    pub email: String,
    /// Display name (falls back to the email's local part at login).
    pub name: String,
    /// Role returned by the platform at login.
    pub role: UserRole,
    /// Platform bearer token for this session.
    pub token: String,
}

/// Session keys for admin authentication data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_admin_roundtrip() {
        let admin = CurrentAdmin {
            email: "dana@tidemark.dev".to_string(),
            name: "Dana".to_string(),
            role: UserRole::Staff,
            token: "abc123".to_string(),
        };

        let json = serde_json::to_string(&admin).unwrap();
        let parsed: CurrentAdmin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.email, admin.email);
        assert_eq!(parsed.role, UserRole::Staff);
        assert_eq!(parsed.token, "abc123");
    }
}
