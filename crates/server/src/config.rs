//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CARTWRIGHT_DATABASE_URL` - `PostgreSQL` connection string (falls back
//!   to generic `DATABASE_URL`)
//! - `CARTWRIGHT_SESSION_SECRET` - Session signing secret (min 32 chars,
//!   high entropy, no placeholder text)
//!
//! ## Optional
//! - `CARTWRIGHT_HOST` - Bind address (default: 127.0.0.1)
//! - `CARTWRIGHT_PORT` - Listen port (default: 5500)
//! - `CARTWRIGHT_BASE_URL` - Public URL (default: <http://localhost:5500>)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production)

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "5500";
const DEFAULT_BASE_URL: &str = "http://localhost:5500";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Cartwright server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the server
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables, reading `.env` first
    /// if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing, a value
    /// fails to parse, or the session secret fails the strength checks.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = database_url_from_env()?;

        let host_raw = env_or("CARTWRIGHT_HOST", DEFAULT_HOST);
        let host = host_raw.parse::<IpAddr>().map_err(|e| {
            ConfigError::InvalidEnvVar("CARTWRIGHT_HOST".to_string(), e.to_string())
        })?;

        let port_raw = env_or("CARTWRIGHT_PORT", DEFAULT_PORT);
        let port = port_raw.parse::<u16>().map_err(|e| {
            ConfigError::InvalidEnvVar("CARTWRIGHT_PORT".to_string(), e.to_string())
        })?;

        Ok(Self {
            database_url,
            host,
            port,
            base_url: env_or("CARTWRIGHT_BASE_URL", DEFAULT_BASE_URL),
            session_secret: session_secret_from_env("CARTWRIGHT_SESSION_SECRET")?,
            sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            sentry_environment: std::env::var("SENTRY_ENVIRONMENT").ok(),
        })
    }

    /// The address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read the database URL, preferring the service-specific variable and
/// falling back to the conventional `DATABASE_URL`.
fn database_url_from_env() -> Result<SecretString, ConfigError> {
    std::env::var("CARTWRIGHT_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| ConfigError::MissingEnvVar("CARTWRIGHT_DATABASE_URL".to_string()))
}

/// Read and validate the session secret.
fn session_secret_from_env(key: &str) -> Result<SecretString, ConfigError> {
    let value =
        std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))?;
    let secret = SecretString::from(value);
    validate_session_secret(&secret, key)?;
    Ok(secret)
}

// =============================================================================
// Secret validation
// =============================================================================

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Substrings that mark a secret as copied from documentation rather than
/// generated (matched case-insensitively).
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Reject session secrets that are short, look like placeholders, or have
/// too little entropy to have been randomly generated.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();

    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {MIN_SESSION_SECRET_LENGTH} characters (got {})",
                value.len()
            ),
        ));
    }

    let lower = value.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(value);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Shannon entropy of the character distribution, in bits per character.
#[allow(clippy::cast_precision_loss)] // secret lengths are far below f64 limits
fn shannon_entropy(s: &str) -> f64 {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut len = 0usize;
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
        len += 1;
    }

    if len == 0 {
        return 0.0;
    }

    let len = len as f64;
    counts
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(value: &str) -> Result<(), ConfigError> {
        validate_session_secret(&SecretString::from(value.to_owned()), "TEST_SECRET")
    }

    #[test]
    fn test_entropy_of_empty_and_uniform_strings_is_zero() {
        assert!(shannon_entropy("").abs() < f64::EPSILON);
        assert!(shannon_entropy("aaaaaaa").abs() < f64::EPSILON);
    }

    #[test]
    fn test_entropy_of_two_symbol_string() {
        // 50/50 split over two symbols is exactly 1 bit per character.
        assert!((shannon_entropy("abab") - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_entropy_of_random_looking_string() {
        assert!(shannon_entropy("aB3$xY9!mK2@nL5#") > 3.3);
    }

    #[test]
    fn test_rejects_short_secret() {
        assert!(matches!(
            validate("short"),
            Err(ConfigError::InsecureSecret(_, _))
        ));
    }

    #[test]
    fn test_rejects_placeholder_secret() {
        // Long enough and varied, but matches the blocklist.
        assert!(validate("your-session-key-goes-right-here-1").is_err());
        assert!(validate("kJ9#mX2$-changeme-qW8@nB5^rT3&zV1").is_err());
    }

    #[test]
    fn test_rejects_low_entropy_secret() {
        assert!(matches!(
            validate(&"ab".repeat(20)),
            Err(ConfigError::InsecureSecret(_, _))
        ));
    }

    #[test]
    fn test_accepts_generated_secret() {
        assert!(validate("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6j").is_ok());
    }

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "0.0.0.0".parse().expect("valid ip"),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            session_secret: SecretString::from("kJ9#mX2$qW8@nB5^rT3&zV1*pL6!dF4%"),
            sentry_dsn: None,
            sentry_environment: None,
        };

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }
}
