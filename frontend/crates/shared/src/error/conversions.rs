//! Error conversions - From implementations for common error types
//!
//! Decode failures and backend statuses as [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::decode(format!("Unexpected response format: {}", err)).with_source(err)
    }
}

// ============================================================================
// HTTP conversions (feature-gated)
// ============================================================================

#[cfg(feature = "http")]
impl From<http::StatusCode> for ErrorKind {
    fn from(status: http::StatusCode) -> Self {
        ErrorKind::from_status(status.as_u16())
    }
}

#[cfg(feature = "http")]
impl From<http::StatusCode> for AppError {
    fn from(status: http::StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unexpected status");
        AppError::new(ErrorKind::from(status), format!("{} {}", status.as_u16(), reason))
    }
}
