//! User domain types.
//!
//! These types represent validated domain objects separate from database row
//! types. The password hash never leaves the repository layer.

use serde::Serialize;

use cartwright_core::{Email, UserId, Username};

/// An account holder (domain type).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// Unique login username.
    pub username: Username,
}
