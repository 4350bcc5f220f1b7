//! Session Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use http::StatusCode;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::client::{ApiResponse, TransportError};
use serde::Deserialize;
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by the authenticated request wrapper and account use cases
#[derive(Debug, Error)]
pub enum SessionError {
    /// No response at all (DNS, connect, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// 401 that survived the refresh attempt, or a failed refresh
    #[error("Not authenticated")]
    Unauthenticated,

    /// Non-2xx status other than 401
    #[error("Backend answered {status}")]
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },

    /// Envelope with `status: false`
    #[error("Rejected: {0}")]
    Rejected(String),

    /// Body did not match the expected shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Field-level input problem caught before submission
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// Unusable client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Shapes the backend uses for error messages
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

impl SessionError {
    /// Build an error from a non-2xx response, keeping the backend's message
    pub fn from_response(response: &ApiResponse) -> Self {
        if response.is_unauthorized() {
            return SessionError::Unauthenticated;
        }

        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message.or(body.detail))
            .filter(|message| !message.trim().is_empty());

        SessionError::Upstream {
            status: response.status,
            message,
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        SessionError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Transport(_) => ErrorKind::Network,
            SessionError::Unauthenticated => ErrorKind::Unauthorized,
            SessionError::Upstream { status, .. } => ErrorKind::from(*status),
            SessionError::Rejected(_) => ErrorKind::Rejected,
            SessionError::Decode(_) => ErrorKind::Decode,
            SessionError::InvalidInput { .. } => ErrorKind::Validation,
            SessionError::Config(_) => ErrorKind::Upstream,
        }
    }

    /// Message suitable for a visitor-facing notice
    pub fn visitor_message(&self) -> String {
        match self {
            SessionError::Transport(e) if e.is_timeout() => {
                "The server took too long to respond".to_string()
            }
            SessionError::Transport(_) => "Could not reach the server".to_string(),
            SessionError::Unauthenticated => "Your session has expired".to_string(),
            SessionError::Upstream {
                message: Some(message),
                ..
            } => message.clone(),
            SessionError::Upstream { status, .. } => format!(
                "Request failed ({})",
                status.canonical_reason().unwrap_or("unexpected status")
            ),
            SessionError::Rejected(message) => message.clone(),
            SessionError::Decode(_) => "Unexpected response from the server".to_string(),
            SessionError::InvalidInput { message, .. } => message.clone(),
            SessionError::Config(_) => "The booking service is misconfigured".to_string(),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SessionError::Transport(e) => {
                tracing::warn!(error = %e, "Session transport error");
            }
            SessionError::Decode(e) => {
                tracing::error!(error = %e, "Session response decode error");
            }
            SessionError::Config(msg) => {
                tracing::error!(message = %msg, "Session configuration error");
            }
            SessionError::Unauthenticated => {
                tracing::info!("Session is not authenticated");
            }
            _ => {
                tracing::debug!(error = %self, "Session error");
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let app_err = AppError::new(err.kind(), err.visitor_message());
        match err {
            SessionError::Unauthenticated => app_err.with_action("Please log in again"),
            SessionError::Transport(_) => app_err
                .with_action("Check your connection and try again")
                .with_source(err),
            SessionError::Decode(_) => app_err.with_source(err),
            _ => app_err,
        }
    }
}

impl From<AppError> for SessionError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::Validation => SessionError::invalid("input", err.message()),
            ErrorKind::Unauthorized => SessionError::Unauthenticated,
            _ => SessionError::Rejected(err.message().to_string()),
        }
    }
}
