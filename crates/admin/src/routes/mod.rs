//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Login page (redirects to /dashboard when signed in)
//! POST /login                    - Login action
//! POST /logout                   - Logout action
//!
//! # Dashboard
//! GET  /dashboard                - Dashboard overview
//!
//! # Products
//! GET  /products                 - Product listing
//! GET  /products/new             - New product form
//! POST /products                 - Create product
//! GET  /products/{id}/edit       - Edit product form
//! POST /products/{id}            - Update product
//! POST /products/{id}/delete     - Delete product
//!
//! # Users / Customers
//! GET  /customers                - User directory listing
//! POST /customers                - Create user (admin role only)
//! POST /customers/{id}/delete    - Delete user (admin role only)
//!
//! # Orders
//! GET  /orders                   - Order listing
//! GET  /orders/{id}              - Order detail
//! POST /orders/{id}/status       - Update order status
//!
//! # Shipments
//! GET  /shipments                - Shipment listing with transition actions
//! POST /shipments/{id}/status    - Move shipment through its lifecycle
//!
//! # Notifications
//! GET  /notifications            - Notification listing
//! POST /notifications            - Create notification
//! POST /notifications/{id}/read  - Mark notification read
//! POST /notifications/{id}/delete - Delete notification
//! ```

pub mod auth;
pub mod customers;
pub mod dashboard;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod shipments;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::services::listing::ListParams;
use crate::state::AppState;

/// Query parameters for transient banner messages.
///
/// Mutations redirect back to their list page with one of these set; the
/// page renders it once and the next navigation drops it.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

/// Redirect to `path` with a confirmation banner.
pub(crate) fn redirect_with_notice(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", urlencoding::encode(message)))
}

/// Redirect to `path` with an error banner.
pub(crate) fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{path}?error={}", urlencoding::encode(message)))
}

/// Format a decimal amount as a display price.
pub(crate) fn format_money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Build a list-page URL preserving the current query, pointing at `page`.
pub(crate) fn list_page_url(base: &str, params: &ListParams, page: usize) -> String {
    let mut parts = vec![format!("page={page}")];
    if let Some(q) = params.q.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(format!("q={}", urlencoding::encode(q)));
    }
    if let Some(status) = params.status_filter() {
        parts.push(format!("status={}", urlencoding::encode(status)));
    }
    if let Some(sort) = params.sort.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("sort={}", urlencoding::encode(sort)));
    }
    if let Some(dir) = params.dir {
        parts.push(format!("dir={}", dir.as_str()));
    }
    format!("{base}?{}", parts.join("&"))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/", get(auth::login_page))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Dashboard
        .route("/dashboard", get(dashboard::index))
        // Products
        .nest("/products", product_routes())
        // Users / customers
        .nest("/customers", customer_routes())
        // Orders
        .nest("/orders", order_routes())
        // Shipments
        .nest("/shipments", shipment_routes())
        // Notifications
        .nest("/notifications", notification_routes())
}

/// Create the product routes router.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_page))
        .route("/{id}/edit", get(products::edit_page))
        .route("/{id}", post(products::update))
        .route("/{id}/delete", post(products::delete))
}

/// Create the customer routes router.
fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::index).post(customers::create))
        .route("/{id}/delete", post(customers::delete))
}

/// Create the order routes router.
fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/{id}/status", post(orders::update_status))
}

/// Create the shipment routes router.
fn shipment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(shipments::index))
        .route("/{id}/status", post(shipments::update_status))
}

/// Create the notification routes router.
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::index).post(notifications::create))
        .route("/{id}/read", post(notifications::mark_read))
        .route("/{id}/delete", post(notifications::delete))
}
