//! HTTP route handlers for the Cartwright API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                              - Liveness check
//! GET    /health/ready                        - Readiness check (database ping)
//!
//! # Users
//! GET    /users                               - List users
//! GET    /users/{id}                          - Get one user
//! DELETE /users/{id}                          - Delete a user (requires auth)
//!
//! # Products
//! GET    /products                            - List products
//! GET    /products/{id}                       - Get one product
//! GET    /products/category/{category}        - List products in a category
//!
//! # Orders
//! GET    /orders                              - List orders
//! GET    /orders/{id}                         - Get one order
//! GET    /orders/status/{status}              - List orders with a status
//!
//! # Cart
//! GET    /cart/{user_id}                      - Get a user's cart with items
//! POST   /cart/items                          - Add an item (creates cart on first add)
//! DELETE /cart/{cart_id}/items/{product_id}   - Remove an item (prunes empty cart)
//! GET    /cart/{cart_id}/checkout             - Read-only checkout total
//!
//! # Auth
//! POST   /auth/register                       - Register with username/password
//! POST   /auth/login                          - Login, sets session cookie
//! POST   /auth/logout                         - Logout, clears session
//! GET    /auth/me                             - Current session identity
//! ```

pub mod auth;
pub mod cart;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/{id}", get(users::show).delete(users::destroy))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/category/{category}", get(products::by_category))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
        .route("/status/{status}", get(orders::by_status))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/{user_id}", get(cart::show))
        .route("/items", post(cart::add_item))
        .route("/{cart_id}/items/{product_id}", delete(cart::remove_item))
        .route("/{cart_id}/checkout", get(cart::checkout))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
}
