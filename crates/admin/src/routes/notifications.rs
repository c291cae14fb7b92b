//! Notification route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::{NotificationId, NotificationKind};

use crate::components::data_table::{DataTableConfig, notifications_table_config};
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::platform::{Notification, NotificationInput, ProductNotification};
use crate::services::listing::{self, ListParams, Listable, SortValue};
use crate::state::AppState;

use super::dashboard::AdminUserView;
use super::{MessageQuery, redirect_with_error, redirect_with_notice};

// =============================================================================
// Views
// =============================================================================

/// Notification row for the listing table.
#[derive(Debug, Clone)]
pub struct NotificationRow {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind_label: String,
    pub kind_key: String,
    pub read: bool,
    pub created_at: String,
}

impl From<&Notification> for NotificationRow {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            kind_label: notification.kind.label().to_string(),
            kind_key: notification.kind.to_string(),
            read: notification.read,
            created_at: notification.created_at.clone().unwrap_or_default(),
        }
    }
}

impl Listable for Notification {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.message)
    }

    fn status_key(&self) -> Option<String> {
        // The notification list filters on kind
        Some(self.kind.to_string())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "title" => SortValue::text(&self.title),
            _ => SortValue::Missing,
        }
    }
}

/// Customer stock-request row.
#[derive(Debug, Clone)]
pub struct ProductNotificationRow {
    pub product_id: String,
    pub email: String,
    pub created_at: String,
}

impl From<&ProductNotification> for ProductNotificationRow {
    fn from(notification: &ProductNotification) -> Self {
        Self {
            product_id: notification.product_id.to_string(),
            email: notification.email.clone(),
            created_at: notification.created_at.clone().unwrap_or_default(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Notification creation form data.
#[derive(Debug, Deserialize)]
pub struct NotificationForm {
    pub title: String,
    pub message: String,
    pub kind: String,
}

/// Validate a notification form before any platform call is made.
pub(crate) fn validate_notification_form(
    form: &NotificationForm,
) -> Result<NotificationInput, String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Title is required.".to_string());
    }

    let message = form.message.trim();
    if message.is_empty() {
        return Err("Message is required.".to_string());
    }

    let kind = form
        .kind
        .parse::<NotificationKind>()
        .map_err(|_| "Unknown notification kind.".to_string())?;

    Ok(NotificationInput {
        title: title.to_string(),
        message: message.to_string(),
        kind,
    })
}

// =============================================================================
// Templates
// =============================================================================

/// Notification listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "notifications/index.html")]
pub struct NotificationsIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub table: DataTableConfig,
    pub rows: Vec<NotificationRow>,
    pub stock_requests: Vec<ProductNotificationRow>,
    pub query: String,
    pub status_filter: String,
    pub total: usize,
}

// =============================================================================
// Handlers
// =============================================================================

/// Notification listing page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let mut error = message.error.unwrap_or_default();

    let notifications = match state.platform().get_notifications(&admin.token).await {
        Ok(notifications) => notifications,
        Err(e) => {
            tracing::error!("Failed to fetch notifications: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let stock_requests = match state
        .platform()
        .get_product_notifications(&admin.token)
        .await
    {
        Ok(requests) => requests
            .iter()
            .map(ProductNotificationRow::from)
            .collect(),
        Err(e) => {
            tracing::error!("Failed to fetch product notifications: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let page = listing::apply(notifications, &params);
    let rows: Vec<NotificationRow> = page.items.iter().map(NotificationRow::from).collect();

    NotificationsIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/notifications".to_string(),
        notice: message.notice.unwrap_or_default(),
        error,
        table: notifications_table_config(),
        rows,
        stock_requests,
        query: params.q.clone().unwrap_or_default(),
        status_filter: params.status.clone().unwrap_or_default(),
        total: page.total,
    }
    .into_response()
}

/// Create notification handler.
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<NotificationForm>,
) -> Response {
    // Validation failures never reach the platform
    let input = match validate_notification_form(&form) {
        Ok(input) => input,
        Err(message) => return redirect_with_error("/notifications", &message).into_response(),
    };

    match state
        .platform()
        .create_notification(&admin.token, &input)
        .await
    {
        Ok(()) => redirect_with_notice("/notifications", "Notification created.").into_response(),
        Err(e) => {
            tracing::error!("Failed to create notification: {e}");
            redirect_with_error("/notifications", &e.user_message()).into_response()
        }
    }
}

/// Mark notification read handler.
#[instrument(skip(admin, state), fields(notification_id = %id))]
pub async fn mark_read(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Response {
    match state
        .platform()
        .mark_notification_read(&admin.token, id)
        .await
    {
        Ok(()) => redirect_with_notice("/notifications", "Notification marked read.").into_response(),
        Err(e) => {
            tracing::error!("Failed to mark notification read: {e}");
            redirect_with_error("/notifications", &e.user_message()).into_response()
        }
    }
}

/// Delete notification handler.
#[instrument(skip(admin, state), fields(notification_id = %id))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Response {
    match state
        .platform()
        .delete_notification(&admin.token, id)
        .await
    {
        Ok(()) => redirect_with_notice("/notifications", "Notification deleted.").into_response(),
        Err(e) => {
            tracing::error!("Failed to delete notification: {e}");
            redirect_with_error("/notifications", &e.user_message()).into_response()
        }
    }
}
