//! Sign Up Use Case
//!
//! Creates a new account. The visitor signs in separately afterwards.

use std::sync::Arc;

use crate::domain::gateway::{AccountGateway, Registration};
use crate::domain::value_object::email::Email;
use crate::error::{SessionError, SessionResult};

/// Sign up input
pub struct SignUpInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
}

impl<G> SignUpUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: SignUpInput) -> SessionResult<()> {
        let first_name = required("first_name", &input.first_name, "First name is required")?;
        let last_name = required("last_name", &input.last_name, "Last name is required")?;
        let email = Email::new(&input.email)
            .map_err(|e| SessionError::invalid("email", e.message()))?;

        if input.password.is_empty() {
            return Err(SessionError::invalid("password", "Password is required"));
        }

        let registration = Registration {
            first_name,
            last_name,
            email,
            password: input.password,
        };
        self.gateway.register(&registration).await?;

        tracing::info!(email = %registration.email.as_str(), "Account registered");
        Ok(())
    }
}

fn required(field: &'static str, value: &str, message: &str) -> SessionResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SessionError::invalid(field, message));
    }
    Ok(value.to_string())
}
