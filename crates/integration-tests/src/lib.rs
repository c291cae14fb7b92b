//! Integration tests for Tidemark Admin.
//!
//! # Running Tests
//!
//! These tests drive a running admin instance over HTTP, which in turn needs
//! a reachable platform backend with seeded fixtures. Everything is
//! `#[ignore]`d by default:
//!
//! ```bash
//! ADMIN_BASE_URL=http://localhost:4000 \
//! TEST_ADMIN_EMAIL=admin@tidemark.dev \
//! TEST_ADMIN_PASSWORD=... \
//! cargo test -p tidemark-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `admin_auth` - Login flow and route guard behavior
//! - `admin_products` - Product CRUD and validation
//! - `admin_shipments` - Shipment transition workflow

use reqwest::Client;

pub use tidemark_admin::middleware::session::SESSION_COOKIE_NAME;

/// Base URL for the admin panel (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Admin test credentials from the environment.
#[must_use]
pub fn test_credentials() -> (String, String) {
    let email =
        std::env::var("TEST_ADMIN_EMAIL").unwrap_or_else(|_| "admin@tidemark.dev".to_string());
    let password = std::env::var("TEST_ADMIN_PASSWORD").unwrap_or_default();
    (email, password)
}

/// Create a client with a cookie store and no redirect following, so tests
/// can assert on Location headers directly.
///
/// # Panics
///
/// Panics if the HTTP client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Sign in through the login form, leaving the session cookie in the client.
///
/// # Panics
///
/// Panics if the login request cannot be sent or is not accepted.
pub async fn sign_in(client: &Client) {
    let (email, password) = test_credentials();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("email", email.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to send login request");

    assert!(
        resp.status().is_redirection(),
        "login should redirect to the dashboard"
    );

    let set_cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        set_cookie.contains(SESSION_COOKIE_NAME),
        "login should set the session cookie"
    );
}
