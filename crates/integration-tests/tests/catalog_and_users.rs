//! Integration tests for the catalog, order, and user read surfaces.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p cartwright-server)
//!
//! Run with: cargo test -p cartwright-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use cartwright_integration_tests::{
    TEST_PASSWORD, base_url, client, insert_test_product, register_user, test_pool,
    unique_username,
};

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get readiness");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Product Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_show_and_category_filter() {
    let client = client();
    let pool = test_pool().await;
    let base_url = base_url();

    // A category unique to this run keeps the filter assertion exact.
    let category = format!("Cat{}", &Uuid::new_v4().simple().to_string()[..8]);
    let product_id = insert_test_product(&pool, "Catalog Widget", "7.25", &category).await;

    let resp = client
        .get(format!("{base_url}/products/{product_id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    let product: Value = resp.json().await.expect("Failed to parse product");
    assert_eq!(
        product.get("name"),
        Some(&Value::String("Catalog Widget".to_string()))
    );
    assert_eq!(
        product.get("price"),
        Some(&Value::String("7.25".to_string()))
    );

    // Category lookup is case-normalised on the way in.
    let resp = client
        .get(format!("{base_url}/products/category/{}", category.to_lowercase()))
        .send()
        .await
        .expect("Failed to get category");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Value> = resp.json().await.expect("Failed to parse product list");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].get("id"), Some(&Value::from(product_id)));

    // Unknown category is an empty list, not an error.
    let resp = client
        .get(format!("{base_url}/products/category/no-such-category"))
        .send()
        .await
        .expect("Failed to get category");
    assert_eq!(resp.status(), StatusCode::OK);

    let products: Vec<Value> = resp.json().await.expect("Failed to parse product list");
    assert!(products.is_empty());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_unknown_id_not_found() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/products/999999999"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Malformed IDs are rejected by the path extractor.
    let resp = client
        .get(format!("{base_url}/products/not-a-number"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Order Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_order_status_filter() {
    let client = client();
    let pool = test_pool().await;
    let base_url = base_url();

    let user = register_user(&client, &unique_username()).await;
    let user_id = user.get("id").and_then(Value::as_i64).expect("user id");

    let order_id: i32 = sqlx::query_scalar(
        r"
        INSERT INTO orders (user_id, status, total)
        VALUES ($1, 'shipped', 42.00)
        RETURNING id
        ",
    )
    .bind(i32::try_from(user_id).expect("user id fits i32"))
    .fetch_one(&pool)
    .await
    .expect("Failed to insert test order");

    let resp = client
        .get(format!("{base_url}/orders/{order_id}"))
        .send()
        .await
        .expect("Failed to get order");
    assert_eq!(resp.status(), StatusCode::OK);

    let order: Value = resp.json().await.expect("Failed to parse order");
    assert_eq!(
        order.get("status"),
        Some(&Value::String("shipped".to_string()))
    );
    assert_eq!(order.get("total"), Some(&Value::String("42.00".to_string())));

    // Status lookup is case-insensitive and matches the stored lowercase form.
    let resp = client
        .get(format!("{base_url}/orders/status/SHIPPED"))
        .send()
        .await
        .expect("Failed to get orders by status");
    assert_eq!(resp.status(), StatusCode::OK);

    let orders: Vec<Value> = resp.json().await.expect("Failed to parse order list");
    assert!(
        orders
            .iter()
            .any(|o| o.get("id") == Some(&Value::from(order_id)))
    );
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_user_list_and_show() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    let user = register_user(&client, &username).await;
    let user_id = user.get("id").and_then(Value::as_i64).expect("user id");

    let resp = client
        .get(format!("{base_url}/users/{user_id}"))
        .send()
        .await
        .expect("Failed to get user");
    assert_eq!(resp.status(), StatusCode::OK);

    let fetched: Value = resp.json().await.expect("Failed to parse user");
    assert_eq!(fetched.get("username"), Some(&Value::String(username.clone())));

    let resp = client
        .get(format!("{base_url}/users"))
        .send()
        .await
        .expect("Failed to list users");
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<Value> = resp.json().await.expect("Failed to parse user list");
    assert!(
        users
            .iter()
            .any(|u| u.get("username") == Some(&Value::String(username.clone())))
    );
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_user_delete_requires_session() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    let user = register_user(&client, &username).await;
    let user_id = user.get("id").and_then(Value::as_i64).expect("user id");

    // Anonymous delete is refused.
    let resp = client
        .delete(format!("{base_url}/users/{user_id}"))
        .send()
        .await
        .expect("Failed to attempt delete");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // After login the same request succeeds.
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .delete(format!("{base_url}/users/{user_id}"))
        .send()
        .await
        .expect("Failed to delete user");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/users/{user_id}"))
        .send()
        .await
        .expect("Failed to get user");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
