//! Error Kind - Classification of client-side failures
//!
//! Defines the [`ErrorKind`] enum shared by every feature crate.

use serde::Serialize;

/// Classification of a failure as seen by the client
///
/// Each kind decides how the failure propagates:
/// - `Unauthorized` is recovered once through a session refresh
/// - `Validation` is raised before anything is sent
/// - everything else is surfaced to the visitor as a transient notice
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::from_status(401);
/// assert_eq!(kind, ErrorKind::Unauthorized);
/// assert_eq!(kind.as_str(), "Unauthorized");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, TLS, timeout)
    Network,
    /// The backend rejected the credentials (HTTP 401)
    Unauthorized,
    /// Field-level input problem detected before submission
    Validation,
    /// The backend refused the operation on business grounds
    Rejected,
    /// The requested resource does not exist
    NotFound,
    /// The response body could not be decoded
    Decode,
    /// Any other unexpected backend status
    Upstream,
}

impl ErrorKind {
    /// Classify an HTTP status returned by the backend
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::from_status(400), ErrorKind::Rejected);
    /// assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
    /// assert_eq!(ErrorKind::from_status(502), ErrorKind::Upstream);
    /// ```
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => ErrorKind::Unauthorized,
            404 => ErrorKind::NotFound,
            400 | 403 | 409 | 422 => ErrorKind::Rejected,
            _ => ErrorKind::Upstream,
        }
    }

    /// Short human-readable label
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Network Error",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Validation => "Validation Error",
            ErrorKind::Rejected => "Rejected",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Decode => "Decode Error",
            ErrorKind::Upstream => "Upstream Error",
        }
    }

    /// Whether the failure ends the current session
    #[inline]
    pub const fn ends_session(&self) -> bool {
        matches!(self, ErrorKind::Unauthorized)
    }

    /// Whether retrying the same request later may succeed
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Upstream)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
