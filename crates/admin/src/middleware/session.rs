//! Session middleware configuration for the admin panel.
//!
//! Sets up in-memory sessions using tower-sessions with strict security
//! settings (SameSite=Strict, 24hr expiry). The admin keeps no database, so
//! sessions do not survive a restart - admins simply sign in again.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name for the admin panel.
pub const SESSION_COOKIE_NAME: &str = "tidemark_admin_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with the in-memory store.
///
/// `base_url` decides whether the cookie is marked Secure (HTTPS deploys).
#[must_use]
pub fn create_session_layer(base_url: &str) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    let is_secure = base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        // SameSite=Strict - the panel has no cross-site entry points
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
