//! Notices
//!
//! Transient messages a page shows after an action (the toast). Failures
//! become notices; they never touch the session store.

use crate::error::StayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// One transient message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Error notice for a failed `action` such as "load listings"
    ///
    /// The backend's message wins. Otherwise a rejection reads
    /// "Failed to <action>" and any other failure adds "Please try again."
    pub fn from_error(err: &StayError, action: &str) -> Self {
        if let Some(message) = err.backend_message() {
            return Self::error(message);
        }

        match err {
            StayError::Rejected(_) => Self::error(format!("Failed to {}", action)),
            StayError::Session(_) | StayError::NotFound => {
                Self::error(format!("Failed to {}. Please try again.", action))
            }
            StayError::Validation(_) | StayError::LoginRequired | StayError::MissingUser => {
                Self::error(err.to_string())
            }
        }
    }
}
