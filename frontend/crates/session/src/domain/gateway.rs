//! Gateway Traits
//!
//! Interfaces to the account endpoints. The implementation is in the
//! infrastructure layer and goes through the authenticated request wrapper.

use serde::Serialize;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::SessionResult;

/// Validated login form
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: Email,
    pub password: String,
}

/// Validated sign-up form
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password: String,
}

/// Account endpoints
#[trait_variant::make(AccountGateway: Send)]
pub trait LocalAccountGateway {
    /// "Who am I" for the current cookies
    async fn current_user(&self) -> SessionResult<User>;

    /// Exchange credentials for session cookies
    async fn login(&self, credentials: &Credentials) -> SessionResult<()>;

    /// Create an account
    async fn register(&self, registration: &Registration) -> SessionResult<()>;

    /// Invalidate the session cookies server-side
    async fn logout(&self) -> SessionResult<()>;
}
