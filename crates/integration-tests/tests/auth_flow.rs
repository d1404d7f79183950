//! Integration tests for registration, login, and sessions.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p cartwright-server)
//!
//! Run with: cargo test -p cartwright-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use cartwright_integration_tests::{TEST_PASSWORD, base_url, client, register_user, unique_username};

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_returns_user_without_password() {
    let client = client();
    let username = unique_username();

    let user = register_user(&client, &username).await;

    assert_eq!(user.get("username"), Some(&Value::String(username.clone())));
    assert_eq!(
        user.get("email"),
        Some(&Value::String(format!("{username}@example.com")))
    );
    assert!(user.get("id").is_some_and(Value::is_number));
    // The hash must never appear on the wire.
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_duplicate_username_conflicts() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    register_user(&client, &username).await;

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "name": "Duplicate",
            "email": format!("other-{username}@example.com"),
            "username": username,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to attempt duplicate registration");

    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_rejects_weak_password() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "name": "Weak",
            "email": format!("{username}@example.com"),
            "username": username,
            "password": "short",
        }))
        .send()
        .await
        .expect("Failed to attempt registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_rejects_invalid_email() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .json(&json!({
            "name": "Bad Email",
            "email": "not-an-email",
            "username": username,
            "password": TEST_PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to attempt registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_establishes_session_and_logout_clears_it() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    register_user(&client, &username).await;

    // Not logged in yet; registration does not create a session.
    let resp = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("Failed to get identity");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Login sets the session cookie.
    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "username": username, "password": TEST_PASSWORD }))
        .send()
        .await
        .expect("Failed to login");
    assert_eq!(resp.status(), StatusCode::OK);

    let identity: Value = resp.json().await.expect("Failed to parse login response");
    assert_eq!(
        identity.get("username"),
        Some(&Value::String(username.clone()))
    );

    // The cookie carries the identity on subsequent requests.
    let resp = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("Failed to get identity");
    assert_eq!(resp.status(), StatusCode::OK);

    let me: Value = resp.json().await.expect("Failed to parse identity");
    assert_eq!(me.get("username"), Some(&Value::String(username)));

    // Logout invalidates it.
    let resp = client
        .post(format!("{base_url}/auth/logout"))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/auth/me"))
        .send()
        .await
        .expect("Failed to get identity");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_wrong_password_unauthorized() {
    let client = client();
    let base_url = base_url();
    let username = unique_username();

    register_user(&client, &username).await;

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .json(&json!({ "username": username, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to attempt login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_unknown_username_unauthorized() {
    let client = client();
    let base_url = base_url();

    // Unknown and malformed usernames answer identically to a wrong
    // password; none of them may leak which accounts exist.
    for username in [unique_username(), "Not A Valid Username!".to_string()] {
        let resp = client
            .post(format!("{base_url}/auth/login"))
            .json(&json!({ "username": username, "password": TEST_PASSWORD }))
            .send()
            .await
            .expect("Failed to attempt login");

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
