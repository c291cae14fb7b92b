//! Product management route handlers.

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

use tidemark_core::{ProductId, ProductStatus};

use crate::components::data_table::{DataTableConfig, FilterOption, products_table_config};
use crate::filters;
use crate::middleware::auth::RequireAdminAuth;
use crate::platform::{Product, ProductInput};
use crate::services::listing::{self, ListParams, Listable, SortValue};
use crate::state::AppState;

use super::dashboard::AdminUserView;
use super::{MessageQuery, format_money, list_page_url, redirect_with_error, redirect_with_notice};

// =============================================================================
// Views
// =============================================================================

/// Product row for the listing table.
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: String,
    pub stock: i64,
    pub status_label: String,
    pub status_key: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            price: format_money(product.price),
            stock: product.total_stock(),
            status_label: product.status.label().to_string(),
            status_key: product.status.to_string(),
        }
    }
}

impl Listable for Product {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.name, self.brand)
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.to_string())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "name" => SortValue::text(&self.name),
            "brand" => SortValue::text(&self.brand),
            "price" => SortValue::Number(self.price),
            "stock" => SortValue::Number(Decimal::from(self.total_stock())),
            _ => SortValue::Missing,
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Product create/update form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub brand: String,
    pub description: Option<String>,
    pub price: String,
    pub status: String,
}

/// Validate a product form before any platform call is made.
///
/// Mirrors the required-field checks the storefront applies: a product needs
/// a name and a numeric, non-negative price.
pub(crate) fn validate_product_form(form: &ProductForm) -> Result<ProductInput, String> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Product name is required.".to_string());
    }

    let price = form
        .price
        .trim()
        .parse::<Decimal>()
        .map_err(|_| "Price must be a number.".to_string())?;
    if price < Decimal::ZERO {
        return Err("Price cannot be negative.".to_string());
    }

    let status = form
        .status
        .parse::<ProductStatus>()
        .map_err(|_| "Unknown product status.".to_string())?;

    let description = form
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(ProductInput {
        name: name.to_string(),
        brand: form.brand.trim().to_string(),
        description,
        price,
        status,
    })
}

// =============================================================================
// Templates
// =============================================================================

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub table: DataTableConfig,
    pub rows: Vec<ProductRow>,
    pub query: String,
    pub status_filter: String,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub prev_url: String,
    pub next_url: String,
}

/// Product create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/form.html")]
pub struct ProductFormTemplate {
    pub admin_user: AdminUserView,
    pub current_path: String,
    pub notice: String,
    pub error: String,
    pub heading: String,
    pub action: String,
    pub submit_label: String,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub price: String,
    pub status: String,
    pub status_options: Vec<FilterOption>,
}

impl ProductFormTemplate {
    fn blank(admin: &AdminUserView) -> Self {
        Self {
            admin_user: admin.clone(),
            current_path: "/products".to_string(),
            notice: String::new(),
            error: String::new(),
            heading: "New product".to_string(),
            action: "/products".to_string(),
            submit_label: "Create product".to_string(),
            name: String::new(),
            brand: String::new(),
            description: String::new(),
            price: String::new(),
            status: ProductStatus::Active.to_string(),
            status_options: products_table_config().status_options,
        }
    }

    fn from_form(admin: &AdminUserView, action: &str, heading: &str, form: &ProductForm) -> Self {
        Self {
            admin_user: admin.clone(),
            current_path: "/products".to_string(),
            notice: String::new(),
            error: String::new(),
            heading: heading.to_string(),
            action: action.to_string(),
            submit_label: if action == "/products" {
                "Create product".to_string()
            } else {
                "Save changes".to_string()
            },
            name: form.name.clone(),
            brand: form.brand.clone(),
            description: form.description.clone().unwrap_or_default(),
            price: form.price.clone(),
            status: form.status.clone(),
            status_options: products_table_config().status_options,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Product listing page handler.
#[instrument(skip(admin, state))]
pub async fn index(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
    Query(message): Query<MessageQuery>,
) -> Response {
    let mut error = message.error.unwrap_or_default();

    let products = match state.platform().get_products(&admin.token).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            if error.is_empty() {
                error = e.user_message();
            }
            vec![]
        }
    };

    let page = listing::apply(products, &params);
    let rows: Vec<ProductRow> = page.items.iter().map(ProductRow::from).collect();

    let prev_url = if page.page > 1 {
        list_page_url("/products", &params, page.page - 1)
    } else {
        String::new()
    };
    let next_url = if page.page < page.total_pages {
        list_page_url("/products", &params, page.page + 1)
    } else {
        String::new()
    };

    ProductsIndexTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/products".to_string(),
        notice: message.notice.unwrap_or_default(),
        error,
        table: products_table_config(),
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

/// New product form page handler.
#[instrument(skip(admin))]
pub async fn new_page(RequireAdminAuth(admin): RequireAdminAuth) -> Response {
    ProductFormTemplate::blank(&AdminUserView::from(&admin)).into_response()
}

/// Create product handler.
#[instrument(skip(admin, state, form))]
pub async fn create(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Response {
    let admin_view = AdminUserView::from(&admin);

    // Validation failures never reach the platform
    let input = match validate_product_form(&form) {
        Ok(input) => input,
        Err(message) => {
            let mut template =
                ProductFormTemplate::from_form(&admin_view, "/products", "New product", &form);
            template.error = message;
            return template.into_response();
        }
    };

    match state.platform().create_product(&admin.token, &input).await {
        Ok(()) => {
            redirect_with_notice("/products", &format!("Product \"{}\" created.", input.name))
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            let mut template =
                ProductFormTemplate::from_form(&admin_view, "/products", "New product", &form);
            template.error = e.user_message();
            template.into_response()
        }
    }
}

/// Edit product form page handler.
#[instrument(skip(admin, state), fields(product_id = %id))]
pub async fn edit_page(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    let products = match state.platform().get_products(&admin.token).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            return redirect_with_error("/products", &e.user_message()).into_response();
        }
    };

    let Some(product) = products.iter().find(|p| p.id == id) else {
        return redirect_with_error("/products", "Product not found.").into_response();
    };

    ProductFormTemplate {
        admin_user: AdminUserView::from(&admin),
        current_path: "/products".to_string(),
        notice: String::new(),
        error: String::new(),
        heading: format!("Edit \"{}\"", product.name),
        action: format!("/products/{id}"),
        submit_label: "Save changes".to_string(),
        name: product.name.clone(),
        brand: product.brand.clone(),
        description: product.description.clone().unwrap_or_default(),
        price: product.price.to_string(),
        status: product.status.to_string(),
        status_options: products_table_config().status_options,
    }
    .into_response()
}

/// Update product handler.
#[instrument(skip(admin, state, form), fields(product_id = %id))]
pub async fn update(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Form(form): Form<ProductForm>,
) -> Response {
    let admin_view = AdminUserView::from(&admin);
    let action = format!("/products/{id}");

    let input = match validate_product_form(&form) {
        Ok(input) => input,
        Err(message) => {
            let mut template =
                ProductFormTemplate::from_form(&admin_view, &action, "Edit product", &form);
            template.error = message;
            return template.into_response();
        }
    };

    match state
        .platform()
        .update_product(&admin.token, id, &input)
        .await
    {
        Ok(()) => {
            redirect_with_notice("/products", &format!("Product \"{}\" updated.", input.name))
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update product: {e}");
            let mut template =
                ProductFormTemplate::from_form(&admin_view, &action, "Edit product", &form);
            template.error = e.user_message();
            template.into_response()
        }
    }
}

/// Delete product handler.
#[instrument(skip(admin, state), fields(product_id = %id))]
pub async fn delete(
    RequireAdminAuth(admin): RequireAdminAuth,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    match state.platform().delete_product(&admin.token, id).await {
        Ok(()) => redirect_with_notice("/products", "Product deleted.").into_response(),
        Err(e) => {
            tracing::error!("Failed to delete product: {e}");
            redirect_with_error("/products", &e.user_message()).into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> ProductForm {
        ProductForm {
            name: "Trail Bottle 750ml".to_string(),
            brand: "Northwind".to_string(),
            description: Some("  Vacuum insulated.  ".to_string()),
            price: "18.50".to_string(),
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        let input = validate_product_form(&valid_form()).unwrap();
        assert_eq!(input.name, "Trail Bottle 750ml");
        assert_eq!(input.price, Decimal::new(1850, 2));
        assert_eq!(input.status, ProductStatus::Active);
        assert_eq!(input.description.as_deref(), Some("Vacuum insulated."));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        let err = validate_product_form(&form).unwrap_err();
        assert_eq!(err, "Product name is required.");
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut form = valid_form();
        form.price = "free".to_string();
        let err = validate_product_form(&form).unwrap_err();
        assert_eq!(err, "Price must be a number.");
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut form = valid_form();
        form.price = "-1.00".to_string();
        let err = validate_product_form(&form).unwrap_err();
        assert_eq!(err, "Price cannot be negative.");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let mut form = valid_form();
        form.status = "retired".to_string();
        assert!(validate_product_form(&form).is_err());
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let mut form = valid_form();
        form.description = Some("   ".to_string());
        let input = validate_product_form(&form).unwrap();
        assert!(input.description.is_none());
    }

    #[test]
    fn test_product_sort_values() {
        let product = Product {
            id: ProductId::new(1),
            name: "Trail Bottle".to_string(),
            brand: "Northwind".to_string(),
            description: None,
            price: Decimal::new(1850, 2),
            status: ProductStatus::Active,
            inventory: vec![],
            created_at: None,
        };

        assert_eq!(
            product.sort_value("name"),
            SortValue::Text("trail bottle".to_string())
        );
        assert_eq!(
            product.sort_value("price"),
            SortValue::Number(Decimal::new(1850, 2))
        );
        assert_eq!(product.sort_value("nonsense"), SortValue::Missing);
    }
}
