//! Integration test helpers for Cartwright.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p cartwright-cli -- migrate
//!
//! # Start the server
//! cargo run -p cartwright-server
//!
//! # Run the ignored integration tests
//! cargo test -p cartwright-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running server over HTTP (`CARTWRIGHT_BASE_URL`,
//! defaulting to `http://localhost:5500`) and reach into the database
//! directly (`CARTWRIGHT_DATABASE_URL` / `DATABASE_URL`) to plant catalog
//! fixtures, since the HTTP surface has no product-creation endpoint.

use reqwest::Client;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::PgPool;
use uuid::Uuid;

/// Password used for every test account.
pub const TEST_PASSWORD: &str = "integration-test-pw";

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CARTWRIGHT_BASE_URL").unwrap_or_else(|_| "http://localhost:5500".to_string())
}

/// Build an HTTP client with a cookie store, so login sessions persist
/// across requests.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Generate a username unique to this test run.
#[must_use]
pub fn unique_username() -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(12).collect();
    format!("it-{suffix}")
}

/// Connect to the test database.
///
/// # Panics
///
/// Panics if no database URL is configured or the connection fails.
pub async fn test_pool() -> PgPool {
    let url = std::env::var("CARTWRIGHT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("CARTWRIGHT_DATABASE_URL must be set for integration tests");

    cartwright_server::db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to test database")
}

/// Register a fresh user via the API, returning the created user JSON.
///
/// # Panics
///
/// Panics if registration does not answer 201.
pub async fn register_user(client: &Client, username: &str) -> Value {
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "name": "Integration Test",
            "email": format!("{username}@example.com"),
            "username": username,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to register test user");

    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    resp.json().await.expect("Failed to parse register response")
}

/// Insert a cart row with no lines, returning its cart ID.
///
/// Such a row never arises through the HTTP surface (the empty cart is
/// represented by absence), so tests of the degenerate state plant it
/// directly.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_bare_cart(pool: &PgPool, user_id: i64) -> i32 {
    sqlx::query_scalar("INSERT INTO cart (user_id) VALUES ($1) RETURNING id")
        .bind(i32::try_from(user_id).expect("user id fits i32"))
        .fetch_one(pool)
        .await
        .expect("Failed to insert cart row")
}

/// Insert a catalog fixture directly, returning its product ID.
///
/// # Panics
///
/// Panics if the insert fails.
pub async fn insert_test_product(pool: &PgPool, name: &str, price: &str, category: &str) -> i32 {
    sqlx::query_scalar(
        r"
        INSERT INTO products (name, description, price, stock, category)
        VALUES ($1, 'integration test fixture', $2::numeric, 100, $3)
        RETURNING id
        ",
    )
    .bind(name)
    .bind(price)
    .bind(category)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test product")
}
