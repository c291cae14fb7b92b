//! Integration tests for product management.
//!
//! These tests require:
//! - A running admin instance (cargo run -p tidemark-admin)
//! - A reachable platform backend with the test admin account seeded
//!
//! Run with: cargo test -p tidemark-integration-tests -- --ignored

use reqwest::StatusCode;

use tidemark_integration_tests::{admin_base_url, client, sign_in};

// ============================================================================
// List & Filter Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin instance and platform backend"]
async fn test_product_list_renders_table() {
    let client = client();
    let base_url = admin_base_url();

    sign_in(&client).await;

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products list");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("data-table"));
}

#[tokio::test]
#[ignore = "Requires running admin instance and platform backend"]
async fn test_product_list_filters_by_status() {
    let client = client();
    let base_url = admin_base_url();

    sign_in(&client).await;

    // Filtering on a status that no fixture uses must render the empty state
    let resp = client
        .get(format!("{base_url}/products?status=archived&q=zzz-no-such"))
        .send()
        .await
        .expect("Failed to get filtered products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("No products found"));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin instance and platform backend"]
async fn test_create_with_empty_name_is_rejected_client_side() {
    let client = client();
    let base_url = admin_base_url();

    sign_in(&client).await;

    let resp = client
        .post(format!("{base_url}/products"))
        .form(&[
            ("name", ""),
            ("brand", "Northwind"),
            ("price", "18.50"),
            ("status", "active"),
        ])
        .send()
        .await
        .expect("Failed to send create request");

    // Validation failures re-render the form with an inline error
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Product name is required."));
}

#[tokio::test]
#[ignore = "Requires running admin instance and platform backend"]
async fn test_create_with_non_numeric_price_is_rejected_client_side() {
    let client = client();
    let base_url = admin_base_url();

    sign_in(&client).await;

    let resp = client
        .post(format!("{base_url}/products"))
        .form(&[
            ("name", "Trail Bottle 750ml"),
            ("brand", "Northwind"),
            ("price", "free"),
            ("status", "active"),
        ])
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Price must be a number."));
}

// ============================================================================
// Delete Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin instance, platform backend, and a disposable product fixture"]
async fn test_deleted_product_disappears_from_refetched_list() {
    let client = client();
    let base_url = admin_base_url();

    sign_in(&client).await;

    let disposable_id =
        std::env::var("TEST_DISPOSABLE_PRODUCT_ID").expect("TEST_DISPOSABLE_PRODUCT_ID not set");

    let resp = client
        .post(format!("{base_url}/products/{disposable_id}/delete"))
        .send()
        .await
        .expect("Failed to send delete request");
    assert!(resp.status().is_redirection());

    // The list page re-fetches from the platform; the id must be gone
    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get products list");
    let body = resp.text().await.expect("Failed to read response");
    assert!(!body.contains(&format!("/products/{disposable_id}/edit")));
}
