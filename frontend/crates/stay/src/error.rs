//! Stay Error Types
//!
//! This module provides stay-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use session::SessionError;
use thiserror::Error;

use crate::domain::booking::BookingErrors;

/// Stay-specific result type alias
pub type StayResult<T> = Result<T, StayError>;

/// Stay-specific error variants
#[derive(Debug, Error)]
pub enum StayError {
    /// Transport, authorization, decode or unexpected status
    #[error(transparent)]
    Session(SessionError),

    /// Business-rule rejection (`status: false`), message may be blank
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Listing id missing or unknown
    #[error("Listing not found")]
    NotFound,

    /// Booking form failed validation
    #[error("Invalid booking: {0}")]
    Validation(BookingErrors),

    /// Booking attempted without a session
    #[error("Please login to book a property")]
    LoginRequired,

    /// Session without a user id
    #[error("User information not found. Please log in again.")]
    MissingUser,
}

impl From<SessionError> for StayError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Rejected(message) => StayError::Rejected(message),
            SessionError::Upstream { status, .. } if status == http::StatusCode::NOT_FOUND => {
                StayError::NotFound
            }
            other => StayError::Session(other),
        }
    }
}

impl StayError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StayError::Session(e) => e.kind(),
            StayError::Rejected(_) => ErrorKind::Rejected,
            StayError::NotFound => ErrorKind::NotFound,
            StayError::Validation(_) => ErrorKind::Validation,
            StayError::LoginRequired | StayError::MissingUser => ErrorKind::Unauthorized,
        }
    }

    /// Backend-supplied message, if any
    pub fn backend_message(&self) -> Option<&str> {
        let message = match self {
            StayError::Rejected(message) => Some(message.as_str()),
            StayError::Session(SessionError::Upstream {
                message: Some(message),
                ..
            }) => Some(message.as_str()),
            _ => None,
        };
        message.filter(|message| !message.trim().is_empty())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            StayError::Session(e) => e.log(),
            StayError::Rejected(message) => {
                tracing::info!(message = %message, "Stay request rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Stay error");
            }
        }
    }
}

impl From<StayError> for AppError {
    fn from(err: StayError) -> Self {
        match err {
            StayError::Session(e) => e.into(),
            other @ StayError::LoginRequired => {
                AppError::unauthorized(other.to_string()).with_action("Log in to continue")
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}
