//! Cart manager service.
//!
//! Owns the cart/checkout workflow on top of [`CartRepository`]: validates
//! requests, enforces the "cart exists only while it has items" contract,
//! and maps store results onto the cart error taxonomy. All state lives in
//! the database; this service holds nothing between requests.

use sqlx::PgPool;
use thiserror::Error;

use cartwright_core::{CartId, ProductId, UserId};

use crate::db::carts::CartMutation;
use crate::db::{CartRepository, RepositoryError, UserRepository};
use crate::models::{CartSnapshot, CheckoutSummary};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Malformed request (non-positive quantity, unknown product).
    /// Caller error; not retried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The referenced user does not exist.
    #[error("user not found")]
    UserNotFound,

    /// The user has no cart (the empty cart is represented by absence).
    #[error("cart not found")]
    CartNotFound,

    /// No cart line matched the given (cart, product) pair.
    #[error("item not found")]
    ItemNotFound,

    /// Checkout was requested for a cart with no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// The cart manager.
///
/// Translates each operation into one or more store operations; every
/// multi-step mutation is transactional in the repository layer, so a
/// failure leaves the store either fully applied or fully rejected.
pub struct CartService<'a> {
    users: UserRepository<'a>,
    carts: CartRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
            carts: CartRepository::new(pool),
        }
    }

    /// Fetch a user's cart with its items.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UserNotFound` if the user does not exist.
    /// Returns `CartError::CartNotFound` if the user has no cart; the first
    /// `add_item` creates it.
    pub async fn get_cart(&self, user_id: UserId) -> Result<CartSnapshot, CartError> {
        if !self.users.exists(user_id).await? {
            return Err(CartError::UserNotFound);
        }

        self.carts
            .get_by_user(user_id)
            .await?
            .ok_or(CartError::CartNotFound)
    }

    /// Add a quantity of a product to the user's cart.
    ///
    /// Creates the cart on first add; merges into an existing line by
    /// incrementing its quantity on repeat adds. No stock-availability
    /// check is performed.
    ///
    /// # Errors
    ///
    /// Returns `CartError::InvalidRequest` if the quantity is not positive
    /// or the product does not exist.
    /// Returns `CartError::UserNotFound` if the user does not exist.
    pub async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartMutation, CartError> {
        if quantity <= 0 {
            return Err(CartError::InvalidRequest(
                "quantity must be a positive integer".to_owned(),
            ));
        }

        if !self.users.exists(user_id).await? {
            return Err(CartError::UserNotFound);
        }

        self.carts
            .add_item(user_id, product_id, quantity)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(msg) => CartError::InvalidRequest(msg),
                // The user passed the existence check above but was deleted
                // before the cart insert.
                RepositoryError::NotFound => CartError::UserNotFound,
                other => CartError::Repository(other),
            })
    }

    /// Remove a product line from a cart.
    ///
    /// When the last line is removed the cart row is deleted too; the cart
    /// returns to the absent state.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ItemNotFound` if no line matched; nothing is
    /// mutated in that case.
    pub async fn remove_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
    ) -> Result<(), CartError> {
        let removed = self.carts.remove_item(cart_id, product_id).await?;
        if !removed {
            return Err(CartError::ItemNotFound);
        }

        Ok(())
    }

    /// Compute a cart's checkout summary.
    ///
    /// Read-only: no order is created and the cart is not cleared. Line
    /// totals and the grand total are exact decimal arithmetic; rounding
    /// happens once, when the total is formatted.
    ///
    /// # Errors
    ///
    /// Returns `CartError::CartNotFound` if the cart does not exist.
    /// Returns `CartError::EmptyCart` if the cart has no lines.
    pub async fn checkout(&self, cart_id: CartId) -> Result<CheckoutSummary, CartError> {
        if !self.carts.exists(cart_id).await? {
            return Err(CartError::CartNotFound);
        }

        let lines = self.carts.line_items(cart_id).await?;
        if lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        Ok(CheckoutSummary::from_lines(cart_id, lines))
    }
}
