//! Dashboard analytics endpoint.
//!
//! All aggregation happens platform-side; the dashboard only renders the
//! summary it gets back.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::OrderStatus;

use super::PlatformError;
use super::client::PlatformClient;

/// Platform-computed dashboard summary.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardStats {
    /// Total orders, all time.
    pub total_orders: i64,
    /// Total revenue, all time.
    pub total_revenue: Decimal,
    /// Orders per status.
    #[serde(default)]
    pub orders_by_status: Vec<StatusCount>,
    /// Shipments still in `preparing`.
    #[serde(default)]
    pub pending_shipments: i64,
    /// Unread admin notifications.
    #[serde(default)]
    pub unread_notifications: i64,
    /// Products at or below their stock threshold.
    #[serde(default)]
    pub low_stock_products: i64,
}

/// Order count for one status bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCount {
    /// The status bucket.
    pub status: OrderStatus,
    /// Number of orders in it.
    pub count: i64,
}

impl PlatformClient {
    /// Fetch the dashboard summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_dashboard_stats(&self, token: &str) -> Result<DashboardStats, PlatformError> {
        self.get(token, "/api/admin/analytics/summary").await
    }
}
