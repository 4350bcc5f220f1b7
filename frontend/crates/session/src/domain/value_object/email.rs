//! Email Value Object
//!
//! Sign-in and sign-up forms check the address shape before anything is
//! sent. Only the domain part is case-normalized; the backend decides whether
//! the local part is case-sensitive.

use kernel::error::app_error::{AppError, AppResult};
use serde::Serialize;
use std::str::FromStr;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address entered in an account form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl AsRef<str>) -> AppResult<Self> {
        let email = email.as_ref().trim();

        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::validation(format!(
                "Email must be at most {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        let (local, domain) = email
            .split_once('@')
            .filter(|(local, domain)| Self::is_valid_local(local) && Self::is_valid_domain(domain))
            .ok_or_else(|| AppError::validation("Enter a valid email address"))?;

        Ok(Self(format!("{}@{}", local, domain.to_ascii_lowercase())))
    }

    fn is_valid_local(local: &str) -> bool {
        !local.is_empty() && local.len() <= 64 && !local.chars().any(char::is_whitespace)
    }

    fn is_valid_domain(domain: &str) -> bool {
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        !(domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) || domain.contains(".."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
