//! Cookie session layer, backed by `PostgreSQL` via tower-sessions.

use sqlx::PgPool;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::PostgresStore;

use crate::config::ServerConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "cw_session";

/// Sessions expire after this many days without a request.
const INACTIVITY_EXPIRY_DAYS: i64 = 7;

/// Build the session layer over a `PostgresStore`.
///
/// The backing `tower_sessions.session` table is created by migration, not
/// here. The Secure cookie attribute follows the deployment's base URL
/// scheme so local plain-HTTP development still gets cookies.
#[must_use]
pub fn create_session_layer(
    pool: &PgPool,
    config: &ServerConfig,
) -> SessionManagerLayer<PostgresStore> {
    let store = PostgresStore::new(pool.clone());
    let https = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(Duration::days(INACTIVITY_EXPIRY_DAYS)))
        .with_secure(https)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
