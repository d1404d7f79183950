//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Reasons an email address fails to parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Empty input.
    #[error("email cannot be empty")]
    Empty,
    /// Longer than the RFC 5321 limit of 254 characters.
    #[error("email exceeds {0} characters")]
    TooLong(usize),
    /// No `@` separator, or an empty part on either side of it.
    #[error("email must have the form local@domain")]
    Malformed,
}

/// A structurally valid email address: `local@domain` with both parts
/// non-empty, within the RFC 5321 length limit. Nothing here checks that
/// the address is deliverable.
///
/// ## Examples
///
/// ```
/// use cartwright_core::Email;
///
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// assert!(Email::parse("no-at-symbol").is_err());
/// assert!(Email::parse("@domain.com").is_err());
/// assert!(Email::parse("user@").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] when the input is empty, too long, or does not
    /// split into a non-empty local part and domain around an `@`.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        if s.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong(Self::MAX_LENGTH));
        }

        match s.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(s.to_owned()))
            }
            _ => Err(EmailError::Malformed),
        }
    }

    /// Borrow the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_structurally_valid_addresses() {
        for input in [
            "user@example.com",
            "a@b",
            "user.name+tag@domain.co.uk",
            "digits123@sub.example.org",
        ] {
            assert!(Email::parse(input).is_ok(), "expected ok: {input}");
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_rejects_missing_or_dangling_separator() {
        for input in ["no-at-symbol", "@domain.com", "user@"] {
            assert_eq!(
                Email::parse(input),
                Err(EmailError::Malformed),
                "expected malformed: {input}"
            );
        }
    }

    #[test]
    fn test_rejects_overlong() {
        let input = format!("{}@example.com", "a".repeat(Email::MAX_LENGTH));
        assert_eq!(Email::parse(&input), Err(EmailError::TooLong(254)));
    }

    #[test]
    fn test_display_matches_input() {
        let email = Email::parse("user@example.com").expect("valid email");
        assert_eq!(email.to_string(), "user@example.com");
        assert_eq!(email.as_str(), "user@example.com");
    }
}
