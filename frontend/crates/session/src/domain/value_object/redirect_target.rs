//! Redirect Target Value Object
//!
//! The page a visitor originally asked for, carried through the login page
//! as `?redirect=`. Only same-origin absolute paths are accepted, so a
//! crafted link cannot bounce a freshly logged-in visitor to another site.

use kernel::error::app_error::{AppError, AppResult};

/// Same-origin path to return to after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget(String);

impl RedirectTarget {
    pub fn new(target: impl AsRef<str>) -> AppResult<Self> {
        let target = target.as_ref().trim();

        if !target.starts_with('/') {
            return Err(AppError::validation("Redirect target must be an absolute path"));
        }

        // "//host" and "/\host" are protocol-relative in browsers
        if target.starts_with("//") || target.starts_with("/\\") {
            return Err(AppError::validation("Redirect target must stay on this site"));
        }

        if target.chars().any(char::is_control) {
            return Err(AppError::validation("Redirect target contains control characters"));
        }

        Ok(Self(target.to_string()))
    }

    /// Parse an optional raw target, falling back to `default` when it is
    /// missing or unsafe
    pub fn or_default(target: Option<&str>, default: &str) -> Self {
        target
            .and_then(|target| Self::new(target).ok())
            .unwrap_or_else(|| Self(default.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
