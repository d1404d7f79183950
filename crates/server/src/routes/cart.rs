//! Cart route handlers.
//!
//! Thin JSON wrappers over [`CartService`]; all cart semantics (lazy
//! creation, line merging, empty-cart pruning, read-only checkout) live in
//! the service and repository layers. Malformed path identifiers are
//! rejected by the `Path<i32>` extractors before any of this runs.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use cartwright_core::{CartId, ProductId, UserId};

use crate::db::carts::CartMutation;
use crate::error::Result;
use crate::models::{CartSnapshot, CheckoutSummary};
use crate::services::CartService;
use crate::state::AppState;

/// Add item request body.
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Get a user's cart with its items.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<CartSnapshot>> {
    let snapshot = CartService::new(state.pool())
        .get_cart(UserId::new(user_id))
        .await?;

    Ok(Json(snapshot))
}

/// Add a quantity of a product to a user's cart.
///
/// Answers 201 when a new line was created (possibly creating the cart as a
/// byproduct) and 200 when an existing line had its quantity incremented.
#[instrument(skip(state))]
pub async fn add_item(
    State(state): State<AppState>,
    Json(body): Json<AddItemRequest>,
) -> Result<Response> {
    let mutation = CartService::new(state.pool())
        .add_item(body.user_id, body.product_id, body.quantity)
        .await?;

    let response = match mutation {
        CartMutation::Added { cart_id, quantity } => (
            StatusCode::CREATED,
            Json(json!({
                "result": "added",
                "cart_id": cart_id,
                "quantity": quantity,
            })),
        ),
        CartMutation::QuantityUpdated { cart_id, quantity } => (
            StatusCode::OK,
            Json(json!({
                "result": "quantity_updated",
                "cart_id": cart_id,
                "quantity": quantity,
            })),
        ),
    };

    Ok(response.into_response())
}

/// Remove a product line from a cart.
///
/// Deletes the cart itself when its last line is removed.
#[instrument(skip(state))]
pub async fn remove_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(i32, i32)>,
) -> Result<Json<serde_json::Value>> {
    CartService::new(state.pool())
        .remove_item(CartId::new(cart_id), ProductId::new(product_id))
        .await?;

    Ok(Json(json!({ "result": "removed" })))
}

/// Compute a cart's checkout summary.
///
/// Read-only: no order is created and the cart is not cleared.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    Path(cart_id): Path<i32>,
) -> Result<Json<CheckoutSummary>> {
    let summary = CartService::new(state.pool())
        .checkout(CartId::new(cart_id))
        .await?;

    Ok(Json(summary))
}
