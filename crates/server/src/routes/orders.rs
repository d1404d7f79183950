//! Order route handlers.
//!
//! Orders are a read-only surface; checkout does not create them.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use cartwright_core::OrderId;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::models::Order;
use crate::state::AppState;

/// List all orders.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders))
}

/// Get one order by ID.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Order>> {
    let order = OrderRepository::new(state.pool())
        .get_by_id(OrderId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound("order not found".to_string()))?;

    Ok(Json(order))
}

/// List orders with a given status.
///
/// Statuses are stored lowercase, so the path segment is lowercased before
/// matching.
#[instrument(skip(state))]
pub async fn by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Order>>> {
    let status = status.to_lowercase();
    let orders = OrderRepository::new(state.pool())
        .list_by_status(&status)
        .await?;

    Ok(Json(orders))
}
