//! Data table component types.
//!
//! These types define the configuration for the data tables in the admin
//! panel: which columns render, which filters the toolbar offers, and what
//! the empty state says. The per-entity configs at the bottom are the single
//! source of truth for each list page.

use serde::{Deserialize, Serialize};

use tidemark_core::{NotificationKind, OrderStatus, ProductStatus, ShipmentStatus, UserRole};

/// Column definition for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Unique key for the column (doubles as the sort key when sortable).
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
        }
    }
}

/// Option for a select filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOption {
    /// Option value, as sent in the query string.
    pub value: String,
    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Create a new filter option.
    #[must_use]
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Options for the status select filter (empty = no status filter).
    pub status_options: Vec<FilterOption>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for the empty state.
    pub empty_title: String,
    /// Description for the empty state.
    pub empty_description: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            status_options: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            empty_description: String::new(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add a status filter option.
    #[must_use]
    pub fn status_option(mut self, option: FilterOption) -> Self {
        self.status_options.push(option);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: &str) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.to_string();
        self
    }

    /// Whether the table offers a status filter.
    #[must_use]
    pub fn has_status_filter(&self) -> bool {
        !self.status_options.is_empty()
    }
}

/// Build the products table configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    let mut config = DataTableConfig::new("products")
        .column(TableColumn::sortable("name", "Product"))
        .column(TableColumn::sortable("brand", "Brand"))
        .column(TableColumn::sortable("price", "Price"))
        .column(TableColumn::sortable("stock", "Stock"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("actions", "Actions"))
        .search_placeholder("Search products by name or brand...")
        .empty_state("No products found", "Try adjusting your search or filters");

    for status in ProductStatus::ALL {
        config = config.status_option(FilterOption::new(&status.to_string(), status.label()));
    }
    config
}

/// Build the customers table configuration.
#[must_use]
pub fn customers_table_config() -> DataTableConfig {
    let mut config = DataTableConfig::new("customers")
        .column(TableColumn::sortable("name", "Name"))
        .column(TableColumn::sortable("email", "Email"))
        .column(TableColumn::new("phone", "Phone"))
        .column(TableColumn::new("role", "Role"))
        .column(TableColumn::sortable("orders", "Orders"))
        .column(TableColumn::new("actions", "Actions"))
        .search_placeholder("Search users by name or email...")
        .empty_state("No users found", "Try adjusting your search or filters");

    for role in [UserRole::Admin, UserRole::Staff, UserRole::Customer] {
        config = config.status_option(FilterOption::new(&role.to_string(), role.label()));
    }
    config
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    let mut config = DataTableConfig::new("orders")
        .column(TableColumn::sortable("number", "Order"))
        .column(TableColumn::sortable("customer", "Customer"))
        .column(TableColumn::sortable("total", "Total"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("actions", "Actions"))
        .search_placeholder("Search orders by number or customer...")
        .empty_state("No orders found", "Try adjusting your search or filters");

    for status in OrderStatus::ALL {
        config = config.status_option(FilterOption::new(&status.to_string(), status.label()));
    }
    config
}

/// Build the shipments table configuration.
#[must_use]
pub fn shipments_table_config() -> DataTableConfig {
    let mut config = DataTableConfig::new("shipments")
        .column(TableColumn::sortable("tracking", "Tracking #"))
        .column(TableColumn::sortable("order", "Order"))
        .column(TableColumn::new("carrier", "Carrier"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("actions", "Actions"))
        .search_placeholder("Search shipments by tracking number...")
        .empty_state("No shipments found", "Try adjusting your search or filters");

    for status in ShipmentStatus::ALL {
        config = config.status_option(FilterOption::new(&status.to_string(), status.label()));
    }
    config
}

/// Build the notifications table configuration.
#[must_use]
pub fn notifications_table_config() -> DataTableConfig {
    let mut config = DataTableConfig::new("notifications")
        .column(TableColumn::sortable("title", "Title"))
        .column(TableColumn::new("kind", "Kind"))
        .column(TableColumn::new("read", "Read"))
        .column(TableColumn::new("actions", "Actions"))
        .search_placeholder("Search notifications...")
        .empty_state("No notifications", "You're all caught up");

    for kind in NotificationKind::ALL {
        config = config.status_option(FilterOption::new(&kind.to_string(), kind.label()));
    }
    config
}
