//! Order history types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use cartwright_core::{OrderId, UserId};

/// A historical order.
///
/// Orders are a read-only surface here: checkout does not create them.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// Order status, stored lowercase (e.g., "pending", "shipped").
    pub status: String,
    /// Order total at the time it was placed.
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}
