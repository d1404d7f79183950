//! Order repository for database operations.
//!
//! Orders are read-only here: checkout does not create them, and no endpoint
//! mutates them.

use sqlx::PgPool;

use cartwright_core::OrderId;

use super::RepositoryError;
use crate::models::Order;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, status, total, created_at FROM orders ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT id, user_id, status, total, created_at FROM orders WHERE id = $1",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(order)
    }

    /// List orders with a given status.
    ///
    /// The status is matched exactly; callers lowercase the input first
    /// (statuses are stored lowercase).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_status(&self, status: &str) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, status, total, created_at
            FROM orders
            WHERE status = $1
            ORDER BY id
            ",
        )
        .bind(status)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
