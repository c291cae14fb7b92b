//! User directory route handlers.
//!
//! Viewing the directory is open to all panel roles; creating and deleting
//! users stays admin-only.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use tidemark_core::{CustomerId, Email, UserRole};

use crate::components::data_table::{DataTableConfig, customers_table_config};
use crate::filters;
use crate::middleware::auth::{RequireAdminAuth, RequireAdminRole};
use crate::platform::{Customer, CustomerInput};
use crate::services::listing::{self, ListParams, Listable, SortValue};
use crate::state::AppState;

use super::dashboard::AdminUserView;
use super::{MessageQuery, list_page_url, redirect_with_error, redirect_with_notice};

// =============================================================================
// Views
// =============================================================================

/// User row for the directory table.
#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role_label: String,
    pub orders_count: i64,
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.display_name(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
            role_label: customer.role.label().to_string(),
            orders_count: customer.orders_count,
        }
    }
}

impl Listable for Customer {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.display_name(), self.email)
    }

    fn status_key(&self) -> Option<String> {
        // The directory filters on role rather than a status field
        Some(self.role.to_string())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::text(&self.display_name()),
            "email" => SortValue::text(&self.email),
            "orders" => SortValue::Number(Decimal::from(self.orders_count)),
            _ => SortValue::Missing,
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// User creation form data.
#[derive(Debug, Deserialize)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Validate a user form before any platform call is made.
pub(crate) fn validate_customer_form(form: &CustomerForm) -> Result<CustomerInput, String> {
    let first_name = form.first_name.trim();
    if first_name.is_empty() {
        return Err("First name is required.".to_string());
    }

    let email = Email::parse(form.email.trim()).map_err(|e| e.to_string())?;

    let role = form
        .role
        .parse::<UserRole>()
        .map_err(|_| "Unknown role.".to_string())?;

    Ok(CustomerInput {
        first_name: first_name.to_string(),
        last_name: form.last_name.trim().to_string(),
        email: email.into_inner(),
        role,
    })
}

// =============================================================================
// Templates
// =============================================================================

/// User directory page template.
#[derive(Template, WebTemplate)]
#[template(path = "customers/index.html")]
pub struct CustomersIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub table: DataTableConfig,
    pub rows: Vec<CustomerRow>,
    pub query: String,
    pub status_filter: String,
    pub can_manage: bool,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// User directory page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let mut error = message.error.unwrap_or_default();

    let customers = match state.platform().get_users(&admin.token).await {
        Ok(customers) => customers,
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let page = listing::apply(customers, &params);
    let rows: Vec<CustomerRow> = page.items.iter().map(CustomerRow::from).collect();

    let prev_url = if page.page > 1 {
        list_page_url("/customers", &params, page.page - 1)
    } else {
        String::new()
    };
    let next_url = if page.page < page.total_pages {
        list_page_url("/customers", &params, page.page + 1)
    } else {
        String::new()
    };

    CustomersIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/customers".to_string(),
        notice: message.notice.unwrap_or_default(),
        error,
        table: customers_table_config(),
        rows,
        query: params.q.clone().unwrap_or_default(),
        status_filter: params.status.clone().unwrap_or_default(),
        can_manage: admin.role.can_manage_users(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        prev_url,
        next_url,
    }
    .into_response()
}

/// Create user handler (admin role only).
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdminRole(admin): RequireAdminRole,
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Response {
    // Validation failures never reach the platform
    let input = match validate_customer_form(&form) {
        Ok(input) => input,
        Err(message) => return redirect_with_error("/customers", &message).into_response(),
    };

    match state.platform().create_user(&admin.token, &input).await {
        Ok(()) => redirect_with_notice(
            "/customers",
            &format!("User {} created.", input.email),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to create user: {e}");
            redirect_with_error("/customers", &e.user_message()).into_response()
        }
    }
}

/// Delete user handler (admin role only).
#[instrument(skip(admin, state), fields(user_id = %id))]
pub async fn delete(
    RequireAdminRole(admin): RequireAdminRole,
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Response {
    match state.platform().delete_user(&admin.token, id).await {
        Ok(()) => redirect_with_notice("/customers", "User deleted.").into_response(),
        Err(e) => {
            tracing::error!("Failed to delete user: {e}");
            redirect_with_error("/customers", &e.user_message()).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CustomerForm {
        CustomerForm {
            first_name: "June".to_string(),
            last_name: "Park".to_string(),
            email: "june@example.com".to_string(),
            role: "customer".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let input = validate_customer_form(&valid_form()).unwrap();
        assert_eq!(input.first_name, "June");
        assert_eq!(input.role, UserRole::Customer);
    }

    #[test]
    fn test_empty_first_name_rejected() {
        let mut form = valid_form();
        form.first_name = " ".to_string();
        assert_eq!(
            validate_customer_form(&form).unwrap_err(),
            "First name is required."
        );
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut form = valid_form();
        form.email = "june-at-example".to_string();
        assert!(validate_customer_form(&form).is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut form = valid_form();
        form.role = "wizard".to_string();
        assert_eq!(validate_customer_form(&form).unwrap_err(), "Unknown role.");
    }

    #[test]
    fn test_customer_filters_on_role() {
        let customer = Customer {
            id: CustomerId::new(1),
            first_name: "Sam".to_string(),
            last_name: "Ortiz".to_string(),
            email: "sam@tidemark.dev".to_string(),
            phone: None,
            role: UserRole::Staff,
            orders_count: 0,
            created_at: None,
        };
        assert_eq!(customer.status_key().as_deref(), Some("staff"));
    }
}
