//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Everything that can go wrong while registering or logging in.
///
/// `InvalidCredentials` covers wrong password, unknown username, and
/// malformed username alike; callers must not be able to tell which.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] cartwright_core::UsernameError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] cartwright_core::EmailError),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    /// Username or email already taken.
    #[error("user already exists")]
    UserAlreadyExists,

    #[error("password validation failed: {0}")]
    WeakPassword(String),

    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("password hashing error")]
    PasswordHash,
}
