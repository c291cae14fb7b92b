//! Order endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::{OrderId, OrderStatus, ProductId};

use super::PlatformError;
use super::client::PlatformClient;

/// An order as mirrored from the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Platform order ID.
    pub id: OrderId,
    /// Human-facing order number (e.g., "TM-1042").
    pub number: String,
    /// Current order status.
    pub status: OrderStatus,
    /// Order total in the store currency.
    pub total: Decimal,
    /// Customer summary.
    pub customer: OrderCustomer,
    /// Line items in the order.
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    /// Payment sub-record.
    #[serde(default)]
    pub payment: Option<PaymentInfo>,
    /// Shipping sub-record.
    #[serde(default)]
    pub shipping: Option<ShippingInfo>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Customer summary embedded in an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCustomer {
    /// Display name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// A line item in an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderLineItem {
    /// Product referenced by this line.
    pub product_id: ProductId,
    /// Product name at time of purchase.
    pub name: String,
    /// Variant label.
    #[serde(default)]
    pub variant: Option<String>,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of purchase.
    pub price: Decimal,
}

/// Payment information for an order.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInfo {
    /// Payment method label (e.g., "card", "paypal").
    pub method: String,
    /// Whether payment has been captured.
    pub paid: bool,
}

/// Shipping information for an order.
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingInfo {
    /// Destination address, single line.
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// Country.
    #[serde(default)]
    pub country: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// Body for `PUT /api/admin/orders/{id}/status`.
#[derive(Debug, Serialize)]
struct OrderStatusUpdate {
    status: OrderStatus,
}

impl PlatformClient {
    /// Fetch the full order collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_orders(&self, token: &str) -> Result<Vec<Order>, PlatformError> {
        self.get(token, "/api/admin/orders").await
    }

    /// Update an order's status.
    ///
    /// The platform enforces its own order state rules; this is a thin call.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the platform rejects
    /// the transition.
    #[instrument(skip(self, token), fields(order_id = %id, status = %status))]
    pub async fn update_order_status(
        &self,
        token: &str,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), PlatformError> {
        let body = OrderStatusUpdate { status };
        self.put_ack(token, &format!("/api/admin/orders/{id}/status"), &body)
            .await
    }
}
