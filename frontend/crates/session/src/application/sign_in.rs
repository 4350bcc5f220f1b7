//! Sign In Use Case
//!
//! Exchanges credentials for session cookies and loads the account.

use std::sync::Arc;

use crate::application::store::SessionStore;
use crate::domain::entity::user::User;
use crate::domain::gateway::{AccountGateway, Credentials};
use crate::domain::value_object::email::Email;
use crate::error::{SessionError, SessionResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    store: Arc<SessionStore>,
}

impl<G> SignInUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    pub async fn execute(&self, input: SignInInput) -> SessionResult<User> {
        let email = Email::new(&input.email)
            .map_err(|e| SessionError::invalid("email", e.message()))?;

        if input.password.is_empty() {
            return Err(SessionError::invalid("password", "Password is required"));
        }

        let credentials = Credentials {
            email,
            password: input.password,
        };
        self.gateway.login(&credentials).await?;

        let user = self.gateway.current_user().await?;
        self.store.set_auth(Some(user.clone()));

        tracing::info!(user_id = %user.id, "User signed in");
        Ok(user)
    }
}
