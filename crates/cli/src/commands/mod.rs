//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod user;

use secrecy::SecretString;
use sqlx::PgPool;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("auth error: {0}")]
    Auth(#[from] cartwright_server::services::AuthError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to the database from `CARTWRIGHT_DATABASE_URL` (or the generic
/// `DATABASE_URL` fallback), loading `.env` if present.
pub async fn connect() -> Result<PgPool, CliError> {
    let _ = dotenvy::dotenv();

    let url = std::env::var("CARTWRIGHT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CliError::MissingEnvVar("CARTWRIGHT_DATABASE_URL"))?;

    let pool = cartwright_server::db::create_pool(&SecretString::from(url)).await?;
    Ok(pool)
}
