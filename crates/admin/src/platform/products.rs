//! Product catalog endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use tidemark_core::{ProductId, ProductStatus};

use super::PlatformError;
use super::client::PlatformClient;

/// A product as mirrored from the platform catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Platform product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Listing status.
    pub status: ProductStatus,
    /// Per-variant stock levels.
    #[serde(default)]
    pub inventory: Vec<InventoryLine>,
    /// Creation timestamp (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Total units in stock across all variants.
    #[must_use]
    pub fn total_stock(&self) -> i64 {
        self.inventory.iter().map(|line| line.quantity).sum()
    }
}

/// Stock level for one product variant.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryLine {
    /// Variant label (e.g., size or colorway).
    pub variant: String,
    /// Units in stock.
    pub quantity: i64,
}

/// Payload for creating or updating a product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductInput {
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Long-form description.
    pub description: Option<String>,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Listing status.
    pub status: ProductStatus,
}

impl PlatformClient {
    /// Fetch the full product collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self, token))]
    pub async fn get_products(&self, token: &str) -> Result<Vec<Product>, PlatformError> {
        self.get(token, "/api/admin/products").await
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the platform rejects
    /// the payload.
    #[instrument(skip(self, token, input), fields(name = %input.name))]
    pub async fn create_product(
        &self,
        token: &str,
        input: &ProductInput,
    ) -> Result<(), PlatformError> {
        self.post_ack(token, "/api/admin/products/create", input)
            .await
    }

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the product is unknown.
    #[instrument(skip(self, token, input), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        token: &str,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<(), PlatformError> {
        self.put_ack(token, &format!("/api/admin/products/{id}"), input)
            .await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the product is unknown.
    #[instrument(skip(self, token), fields(product_id = %id))]
    pub async fn delete_product(&self, token: &str, id: ProductId) -> Result<(), PlatformError> {
        self.delete_ack(token, &format!("/api/admin/products/{id}"))
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_parsing() {
        let json = r#"{
            "id": 12,
            "name": "Trail Bottle 750ml",
            "brand": "Northwind",
            "price": "18.50",
            "status": "active",
            "inventory": [
                {"variant": "Slate", "quantity": 40},
                {"variant": "Moss", "quantity": 2}
            ],
            "created_at": "2026-03-01T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.inventory.len(), 2);
        assert_eq!(product.total_stock(), 42);
    }

    #[test]
    fn test_product_defaults() {
        // Inventory and description are optional in the payload
        let json = r#"{
            "id": 1,
            "name": "Gift Card",
            "brand": "Tidemark",
            "price": "25.00",
            "status": "draft"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.inventory.is_empty());
        assert!(product.description.is_none());
        assert_eq!(product.total_stock(), 0);
    }

    #[test]
    fn test_product_input_shape() {
        let input = ProductInput {
            name: "Trail Bottle 750ml".to_string(),
            brand: "Northwind".to_string(),
            description: None,
            price: Decimal::new(1850, 2),
            status: ProductStatus::Active,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["name"], "Trail Bottle 750ml");
        assert_eq!(json["price"], "18.50");
        assert_eq!(json["status"], "active");
    }
}
