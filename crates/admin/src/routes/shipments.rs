//! Shipment workflow route handlers.
//!
//! The list page renders exactly one action button per allowed transition of
//! each shipment's current status; terminal shipments render none. The
//! update handler re-checks the table against freshly fetched state before
//! calling the platform, which remains the final authority.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::{ShipmentId, ShipmentStatus};

use crate::components::data_table::{DataTableConfig, shipments_table_config};
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::platform::Shipment;
use crate::services::listing::{self, ListParams, Listable, SortValue};
use crate::state::AppState;

use super::dashboard::AdminUserView;
use super::{MessageQuery, list_page_url, redirect_with_error, redirect_with_notice};

// =============================================================================
// Views
// =============================================================================

/// One transition button on a shipment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionAction {
    /// Target status, as submitted in the form.
    pub value: String,
    /// Button label.
    pub label: String,
}

/// The action buttons offered for a shipment in `status`.
///
/// This is a direct rendering of the transition table: one button per
/// allowed next status, none for terminal statuses.
#[must_use]
pub fn transition_actions(status: ShipmentStatus) -> Vec<TransitionAction> {
    status
        .allowed_transitions()
        .iter()
        .map(|next| TransitionAction {
            value: next.to_string(),
            label: match next {
                ShipmentStatus::Shipped => "Mark shipped".to_string(),
                ShipmentStatus::Delivered => "Mark delivered".to_string(),
                ShipmentStatus::Cancelled => "Cancel".to_string(),
                ShipmentStatus::Preparing => "Mark preparing".to_string(),
            },
        })
        .collect()
}

/// Shipment row for the listing table.
#[derive(Debug, Clone)]
pub struct ShipmentRow {
    pub id: String,
    pub tracking_number: String,
    pub order_id: String,
    pub carrier: String,
    pub status_label: String,
    pub status_key: String,
    pub updated_at: String,
    pub actions: Vec<TransitionAction>,
}

impl From<&Shipment> for ShipmentRow {
    fn from(shipment: &Shipment) -> Self {
        Self {
            id: shipment.id.to_string(),
            tracking_number: shipment.tracking_number.clone(),
            order_id: shipment.order_id.to_string(),
            carrier: shipment.carrier.clone().unwrap_or_default(),
            status_label: shipment.status.label().to_string(),
            status_key: shipment.status.to_string(),
            updated_at: shipment.updated_at.clone().unwrap_or_default(),
            actions: transition_actions(shipment.status),
        }
    }
}

impl Listable for Shipment {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.tracking_number, self.order_id)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.to_string())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "tracking" => SortValue::text(&self.tracking_number),
            "order" => SortValue::text(&self.order_id.to_string()),
            _ => SortValue::Missing,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Shipment listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shipments/index.html")]
pub struct ShipmentsIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub table: DataTableConfig,
    pub rows: Vec<ShipmentRow>,
    pub query: String,
    pub status_filter: String,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Shipment listing page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let mut error = message.error.unwrap_or_default();

    let shipments = match state.platform().get_shipments(&admin.token).await {
        Ok(shipments) => shipments,
        Err(e) => {
            tracing::error!("Failed to fetch shipments: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let page = listing::apply(shipments, &params);
    let rows: Vec<ShipmentRow> = page.items.iter().map(ShipmentRow::from).collect();

    let prev_url = if page.page > 1 {
        list_page_url("/shipments", &params, page.page - 1)
    } else {
        String::new()
    };
    let next_url = if page.page < page.total_pages {
        list_page_url("/shipments", &params, page.page + 1)
    } else {
        String::new()
    };

    ShipmentsIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/shipments".to_string(),
        notice: message.notice.unwrap_or_default(),
        error,
        table: shipments_table_config(),
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

/// Status update form data.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Move a shipment through its lifecycle.
///
/// One attempt per user action; no retry. Success redirects back to the
/// refreshed list with a confirmation banner, failure with the platform's
/// message or a generic fallback.
#[instrument(skip(admin, state, form), fields(shipment_id = %id))]
pub async fn update_status(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ShipmentId>,
    Form(form): Form<StatusForm>,
) -> Response {
    let Ok(next) = form.status.parse::<ShipmentStatus>() else {
        return redirect_with_error("/shipments", "Unknown shipment status.").into_response();
    };

    // Re-check the transition against current platform state. The buttons
    // already encode the table, but a second admin may have moved the
    // shipment since this page was rendered.
    let shipments = match state.platform().get_shipments(&admin.token).await {
        Ok(shipments) => shipments,
        Err(e) => {
            tracing::error!("Failed to fetch shipments: {e}");
            return redirect_with_error("/shipments", &e.user_message()).into_response();
        }
    };

    let Some(shipment) = shipments.iter().find(|s| s.id == id) else {
        return redirect_with_error("/shipments", "Shipment not found.").into_response();
    };

    if !shipment.status.can_transition_to(next) {
        return redirect_with_error(
            "/shipments",
            &format!(
                "A {} shipment cannot be marked {next}.",
                shipment.status.label().to_lowercase()
            ),
        )
        .into_response();
    }

    match state
        .platform()
        .update_shipment_status(&admin.token, id, next)
        .await
    {
        Ok(()) => redirect_with_notice(
            "/shipments",
            &format!(
                "Shipment {} marked {}.",
                shipment.tracking_number,
                next.label().to_lowercase()
            ),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to update shipment status: {e}");
            redirect_with_error("/shipments", &e.user_message()).into_response()
        }
    }
}
