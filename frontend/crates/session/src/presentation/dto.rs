//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Envelope
// ============================================================================

/// `{status, message, data?}` wrapper the backend puts around every payload
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

// ============================================================================
// Who Am I
// ============================================================================

/// "Who am I" body: either the user itself or `{user: {...}}`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MeResponse {
    Wrapped { user: User },
    Bare(User),
}

impl From<MeResponse> for User {
    fn from(response: MeResponse) -> Self {
        match response {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        }
    }
}

// ============================================================================
// Login / Register
// ============================================================================

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Register request body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}
