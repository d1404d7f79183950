//! Product catalog types.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use cartwright_core::ProductId;

/// A catalog product.
///
/// Read-only from the cart's perspective; rows are written by the seed
/// tooling, never by this service.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Unit price (currency-agnostic decimal).
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Units currently in stock. Informational only; no availability check
    /// is performed on add-to-cart or checkout.
    pub stock: i32,
    /// Category name, stored capitalised (e.g., "Electronics").
    pub category: String,
}
