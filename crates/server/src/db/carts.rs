//! Cart repository: the store layer of the cart manager.
//!
//! This module is the sole writer of `cart` and `cart_item` rows. Every
//! multi-step mutation runs in a single transaction so that concurrent
//! requests against the same cart cannot observe or create partial state:
//!
//! - find-or-create of the per-user cart relies on the `UNIQUE (user_id)`
//!   constraint plus `ON CONFLICT`, so two racing first-adds converge on one
//!   cart row;
//! - line upserts rely on `UNIQUE (cart_id, product_id)` with an atomic
//!   quantity increment, so concurrent adds never lose an update;
//! - remove-then-prune locks the cart row (`FOR UPDATE`) so removals on one
//!   cart serialize, and only deletes the cart after the item deletion is
//!   confirmed to have affected a row.

use rust_decimal::Decimal;
use sqlx::PgPool;

use cartwright_core::{CartId, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Cart, CartItem, CartSnapshot};

/// Outcome of an add-item upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartMutation {
    /// A new line was inserted for this product.
    Added {
        /// Cart the line was added to (possibly just created).
        cart_id: CartId,
        /// Quantity on the new line.
        quantity: i32,
    },
    /// An existing line had its quantity incremented.
    QuantityUpdated {
        /// Cart holding the line.
        cart_id: CartId,
        /// Quantity after the increment.
        quantity: i32,
    },
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user's cart with its items, if one exists.
    ///
    /// Absence means the empty cart; a persisted cart always has at least
    /// one item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<CartSnapshot>, RepositoryError> {
        let cart = sqlx::query_as::<_, Cart>("SELECT id, user_id FROM cart WHERE user_id = $1")
            .bind(user_id.as_i32())
            .fetch_optional(self.pool)
            .await?;

        let Some(cart) = cart else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT cart_id, product_id, quantity
            FROM cart_item
            WHERE cart_id = $1
            ORDER BY product_id
            ",
        )
        .bind(cart.id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(Some(CartSnapshot {
            id: cart.id,
            user_id: cart.user_id,
            items,
        }))
    }

    /// Check whether a cart exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, cart_id: CartId) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM cart WHERE id = $1)")
            .bind(cart_id.as_i32())
            .fetch_one(self.pool)
            .await?;

        Ok(exists)
    }

    /// Add a quantity of a product to the user's cart, creating the cart if
    /// it does not exist and merging into an existing line if one does.
    ///
    /// Both steps run in one transaction. The upsert reports whether the
    /// line was inserted or incremented (`xmax = 0` holds only for rows
    /// created by the current transaction).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user does not exist
    /// (foreign key violation on the cart insert).
    /// Returns `RepositoryError::Conflict` if the product does not exist
    /// (foreign key violation on the line upsert).
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartMutation, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Find or create the user's cart. The DO UPDATE no-op makes
        // RETURNING yield the id on the conflict path as well. A foreign key
        // violation here means the user vanished since the caller's
        // existence check.
        let cart_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO cart (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO UPDATE SET user_id = excluded.user_id
            RETURNING id
            ",
        )
        .bind(user_id.as_i32())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        let (new_quantity, inserted): (i32, bool) = sqlx::query_as(
            r"
            INSERT INTO cart_item (cart_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (cart_id, product_id)
                DO UPDATE SET quantity = cart_item.quantity + excluded.quantity
            RETURNING quantity, (xmax = 0) AS inserted
            ",
        )
        .bind(cart_id)
        .bind(product_id.as_i32())
        .bind(quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::Conflict("product does not exist".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        tx.commit().await?;

        let cart_id = CartId::new(cart_id);
        if inserted {
            Ok(CartMutation::Added {
                cart_id,
                quantity: new_quantity,
            })
        } else {
            Ok(CartMutation::QuantityUpdated {
                cart_id,
                quantity: new_quantity,
            })
        }
    }

    /// Remove a product line from a cart, deleting the cart itself when the
    /// last line goes.
    ///
    /// The transaction first locks the cart row (`FOR UPDATE`) so removals
    /// on the same cart serialize. Without the lock, two concurrent removals
    /// of a cart's last two lines would each count the other's uncommitted
    /// delete as a surviving row and both skip the prune. The prune step is
    /// then sequenced strictly after the line deletion is confirmed to have
    /// affected a row.
    ///
    /// # Returns
    ///
    /// Returns `true` if a line was removed, `false` if no matching line
    /// existed (in which case nothing was mutated).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn remove_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<i32> =
            sqlx::query_scalar("SELECT id FROM cart WHERE id = $1 FOR UPDATE")
                .bind(cart_id.as_i32())
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        let result = sqlx::query("DELETE FROM cart_item WHERE cart_id = $1 AND product_id = $2")
            .bind(cart_id.as_i32())
            .bind(product_id.as_i32())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        // A cart must not outlive its last item.
        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM cart_item WHERE cart_id = $1")
                .bind(cart_id.as_i32())
                .fetch_one(&mut *tx)
                .await?;

        if remaining == 0 {
            sqlx::query("DELETE FROM cart WHERE id = $1")
                .bind(cart_id.as_i32())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(true)
    }

    /// Fetch the priced lines of a cart: (product name, quantity, unit
    /// price) from the `cart_item` × `products` join.
    ///
    /// Returns an empty vector for a cart with no lines (which should not
    /// persist) or a nonexistent cart; callers distinguish the latter via
    /// [`Self::exists`].
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn line_items(
        &self,
        cart_id: CartId,
    ) -> Result<Vec<(String, i32, Decimal)>, RepositoryError> {
        let lines = sqlx::query_as::<_, (String, i32, Decimal)>(
            r"
            SELECT p.name, ci.quantity, p.price
            FROM cart_item ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.cart_id = $1
            ORDER BY ci.product_id
            ",
        )
        .bind(cart_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(lines)
    }
}
