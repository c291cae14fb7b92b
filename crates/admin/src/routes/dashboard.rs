//! Dashboard overview route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::models::CurrentAdmin;
use crate::platform::DashboardStats;
use crate::state::AppState;

use super::format_money;

/// Admin identity view for the shared layout.
#[derive(Debug, Clone)]
pub struct AdminUserView {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&CurrentAdmin> for AdminUserView {
    fn from(admin: &CurrentAdmin) -> Self {
        Self {
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role.label().to_string(),
        }
    }
}

/// Stat card values for the dashboard.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub total_orders: i64,
    pub total_revenue: String,
    pub pending_shipments: i64,
    pub unread_notifications: i64,
    pub low_stock_products: i64,
}

impl StatsView {
    fn zero() -> Self {
        Self {
            total_orders: 0,
            total_revenue: "$0.00".to_string(),
            pending_shipments: 0,
            unread_notifications: 0,
            low_stock_products: 0,
        }
    }
}

impl From<&DashboardStats> for StatsView {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_orders: stats.total_orders,
            total_revenue: format_money(stats.total_revenue),
            pending_shipments: stats.pending_shipments,
            unread_notifications: stats.unread_notifications,
            low_stock_products: stats.low_stock_products,
        }
    }
}

/// Per-status order count row.
#[derive(Debug, Clone)]
pub struct StatusCountView {
    pub label: String,
    pub count: i64,
}

/// Recent order row.
#[derive(Debug, Clone)]
pub struct RecentOrderView {
    pub id: String,
    pub number: String,
    pub customer: String,
    pub total: String,
    pub status: String,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub stats: StatsView,
    pub status_counts: Vec<StatusCountView>,
    pub recent_orders: Vec<RecentOrderView>,
}

/// How many recent orders the dashboard shows.
const RECENT_ORDER_COUNT: usize = 5;

/// Dashboard page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Response {
    let mut error = String::new();

    let (stats, status_counts) = match state.platform().get_dashboard_stats(&admin.token).await {
        Ok(stats) => {
            let counts = stats
                .orders_by_status
                .iter()
                .map(|bucket| StatusCountView {
                    label: bucket.status.label().to_string(),
                    count: bucket.count,
                })
                .collect();
            (StatsView::from(&stats), counts)
        }
        Err(e) => {
            tracing::error!("Failed to fetch dashboard stats: {e}");
            error = e.user_message();
            (StatsView::zero(), vec![])
        }
    };

    // The platform returns orders newest-first; take the top of the list.
    let recent_orders = match state.platform().get_orders(&admin.token).await {
        Ok(orders) => orders
            .iter()
            .take(RECENT_ORDER_COUNT)
            .map(|order| RecentOrderView {
                id: order.id.to_string(),
                number: order.number.clone(),
                customer: order.customer.name.clone(),
                total: format_money(order.total),
                status: order.status.label().to_string(),
            })
            .collect(),
        Err(e) => {
            tracing::error!("Failed to fetch recent orders: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    DashboardTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/dashboard".to_string(),
        notice: String::new(),
        error,
        stats,
        status_counts,
        recent_orders,
    }
    .into_response()
}
