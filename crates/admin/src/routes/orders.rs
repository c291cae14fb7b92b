//! Order tracking route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::{OrderId, OrderStatus};

use crate::components::data_table::{DataTableConfig, FilterOption, orders_table_config};
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::platform::Order;
use crate::services::listing::{self, ListParams, Listable, SortValue};
use crate::state::AppState;

use super::dashboard::AdminUserView;
use super::{MessageQuery, format_money, list_page_url, redirect_with_error, redirect_with_notice};

// =============================================================================
// Views
// =============================================================================

/// Order row for the listing table.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub number: String,
    pub customer: String,
    pub total: String,
    pub status_label: String,
    pub created_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            number: order.number.clone(),
            customer: order.customer.name.clone(),
            total: format_money(order.total),
            status_label: order.status.label().to_string(),
            created_at: order.created_at.clone().unwrap_or_default(),
        }
    }
}

impl Listable for Order {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.number, self.customer.name)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.to_string())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "number" => SortValue::text(&self.number),
            "customer" => SortValue::text(&self.customer.name),
            "total" => SortValue::Number(self.total),
            _ => SortValue::Missing,
        }
    }
}

/// Line item row for the order detail page.
#[derive(Debug, Clone)]
pub struct LineItemView {
    pub name: String,
    pub variant: String,
    pub quantity: i64,
    pub price: String,
}

/// Order detail view.
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub id: String,
    pub number: String,
    pub status_label: String,
    pub status_key: String,
    pub total: String,
    pub customer_name: String,
    pub customer_email: String,
    pub payment_method: String,
    pub payment_state: String,
    pub shipping_address: String,
    pub created_at: String,
    pub line_items: Vec<LineItemView>,
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        let (payment_method, payment_state) = order.payment.as_ref().map_or_else(
            || ("-".to_string(), "-".to_string()),
            |payment| {
                (
                    payment.method.clone(),
                    if payment.paid { "Paid" } else { "Unpaid" }.to_string(),
                )
            },
        );

        let shipping_address = order.shipping.as_ref().map_or_else(
            || "-".to_string(),
            |shipping| {
                let mut parts = vec![shipping.address.clone()];
                if let Some(city) = &shipping.city {
                    parts.push(city.clone());
                }
                if let Some(postal_code) = &shipping.postal_code {
                    parts.push(postal_code.clone());
                }
                if let Some(country) = &shipping.country {
                    parts.push(country.clone());
                }
                parts.join(", ")
            },
        );

        Self {
            id: order.id.to_string(),
            number: order.number.clone(),
            status_label: order.status.label().to_string(),
            status_key: order.status.to_string(),
            total: format_money(order.total),
            customer_name: order.customer.name.clone(),
            customer_email: order.customer.email.clone().unwrap_or_default(),
            payment_method,
            payment_state,
            shipping_address,
            created_at: order.created_at.clone().unwrap_or_default(),
            line_items: order
                .line_items
                .iter()
                .map(|item| LineItemView {
                    name: item.name.clone(),
                    variant: item.variant.clone().unwrap_or_default(),
                    quantity: item.quantity,
                    price: format_money(item.price),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Order listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub table: DataTableConfig,
    pub rows: Vec<OrderRow>,
    pub query: String,
    pub status_filter: String,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
}

/// Order detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/detail.html")]
pub struct OrderDetailTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub order: OrderDetailView,
    pub status_options: Vec<FilterOption>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Order listing page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let mut error = message.error.unwrap_or_default();

    let orders = match state.platform().get_orders(&admin.token).await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let page = listing::apply(orders, &params);
    let rows: Vec<OrderRow> = page.items.iter().map(OrderRow::from).collect();

    let prev_url = if page.page > 1 {
        list_page_url("/orders", &params, page.page - 1)
    } else {
        String::new()
    };
    let next_url = if page.page < page.total_pages {
        list_page_url("/orders", &params, page.page + 1)
    } else {
        String::new()
    };

    OrdersIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/orders".to_string(),
        notice: message.notice.unwrap_or_default(),
        error,
        table: orders_table_config(),
        rows,
        query: params.q.clone().unwrap_or_default(),
        status_filter: params.status.clone().unwrap_or_default(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        prev_url,
        next_url,
    }
    .into_response()
}

/// Order detail page handler.
#[instrument(skip(admin, state), fields(order_id = %id))]
pub async fn show(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let orders = match state.platform().get_orders(&admin.token).await {
        Ok(orders) => orders,
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            return redirect_with_error("/orders", &e.user_message()).into_response();
        }
    };

    let Some(order) = orders.iter().find(|o| o.id == id) else {
        return redirect_with_error("/orders", "Order not found.").into_response();
    };

    OrderDetailTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/orders".to_string(),
        notice: message.notice.unwrap_or_default(),
        error: message.error.unwrap_or_default(),
        order: OrderDetailView::from(order),
        status_options: orders_table_config().status_options,
    }
    .into_response()
}

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Update order status handler.
#[instrument(skip(admin, state, form), fields(order_id = %id))]
pub async fn update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Form(form): Form<StatusForm>,
) -> Response {
    let detail_path = format!("/orders/{id}");

    let Ok(status) = form.status.parse::<OrderStatus>() else {
        return redirect_with_error(&detail_path, "Unknown order status.").into_response();
    };

    match state
        .platform()
        .update_order_status(&admin.token, id, status)
        .await
    {
        Ok(()) => redirect_with_notice(
            &detail_path,
            &format!("Order marked {}.", status.label().to_lowercase()),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to update order status: {e}");
            redirect_with_error(&detail_path, &e.user_message()).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::platform::{OrderCustomer, PaymentInfo, ShippingInfo};
    use rust_decimal::Decimal;

    fn order() -> Order {
        Order {
            id: OrderId::new(1042),
            number: "TM-1042".to_string(),
            status: OrderStatus::Paid,
            total: Decimal::new(6400, 2),
            customer: OrderCustomer {
                name: "June Park".to_string(),
                email: Some("june@example.com".to_string()),
            },
            line_items: vec![],
            payment: Some(PaymentInfo {
                method: "card".to_string(),
                paid: true,
            }),
            shipping: Some(ShippingInfo {
                address: "12 Quay St".to_string(),
                city: Some("Portsmouth".to_string()),
                country: Some("GB".to_string()),
                postal_code: None,
            }),
            created_at: None,
        }
    }

    #[test]
    fn test_detail_view_formats_payment_and_shipping() {
        let view = OrderDetailView::from(&order());
        assert_eq!(view.payment_state, "Paid");
        assert_eq!(view.shipping_address, "12 Quay St, Portsmouth, GB");
        assert_eq!(view.total, "$64.00");
    }

    #[test]
    fn test_detail_view_handles_missing_subrecords() {
        let mut o = order();
        o.payment = None;
        o.shipping = None;
        let view = OrderDetailView::from(&o);
        assert_eq!(view.payment_method, "-");
        assert_eq!(view.shipping_address, "-");
    }

    #[test]
    fn test_order_search_covers_number_and_customer() {
        let o = order();
        let haystack = o.search_haystack().to_lowercase();
        assert!(haystack.contains("tm-1042"));
        assert!(haystack.contains("june park"));
    }
}
