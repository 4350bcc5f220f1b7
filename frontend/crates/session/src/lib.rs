//! Session (Client Authentication) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session state, user, route classification, gateway traits
//! - `application/` - Session store, refresh gate, authenticated request
//!   wrapper, route guards, account use cases
//! - `infra/` - Account endpoints over the authenticated wrapper
//! - `presentation/` - Wire DTOs and the edge redirect middleware
//!
//! ## Features
//! - Bootstrap ("who am I"), sign in, sign up, sign out
//! - Transparent access-token refresh on 401 with at most one refresh in flight
//! - CSRF token echoed from cookie to header on every request
//! - Route guards for authenticated-only and guest-only pages
//! - Edge redirect filter keyed on the session cookie
//!
//! ## Security Model
//! - The backend is the sole authority on credentials; the client never
//!   inspects token signatures
//! - A failed refresh is fatal to the session and forces logout
//! - Post-login redirect targets are restricted to same-origin paths

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use application::reauth_client::ReauthClient;
pub use application::store::SessionStore;
pub use error::{SessionError, SessionResult};
pub use infra::accounts_api::AccountsApi;
pub use infra::live::{LiveClient, SessionClient};
pub use presentation::middleware::{EdgeState, edge_redirect};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod guard {
    pub use crate::application::guard::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
