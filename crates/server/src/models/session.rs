//! Session-stored identity.

use serde::{Deserialize, Serialize};

use cartwright_core::{UserId, Username};

/// The logged-in identity kept in the cookie session. Deliberately minimal;
/// anything else is re-read from the database per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's database ID.
    pub id: UserId,
    /// User's login username.
    pub username: Username,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key under which [`super::CurrentUser`] is stored.
    pub const CURRENT_USER: &str = "current_user";
}
