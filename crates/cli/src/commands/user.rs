//! User management commands.

use std::io::{BufRead, Write as _};

use cartwright_server::services::AuthService;

use super::CliError;

/// Create a user, reading the password from stdin.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable, the password cannot
/// be read, or registration fails (duplicate username, weak password).
pub async fn create(name: &str, email: &str, username: &str) -> Result<(), CliError> {
    let pool = super::connect().await?;

    let password = prompt_password()?;

    let user = AuthService::new(&pool)
        .register(name, email, username, &password)
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(())
}

/// Prompt for a password on stdin.
fn prompt_password() -> Result<String, CliError> {
    let mut stderr = std::io::stderr();
    write!(stderr, "Password: ")?;
    stderr.flush()?;

    let mut password = String::new();
    std::io::stdin().lock().read_line(&mut password)?;

    Ok(password.trim_end_matches(['\r', '\n']).to_owned())
}
