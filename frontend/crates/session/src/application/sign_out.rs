//! Sign Out Use Case
//!
//! Ends the session on the backend and locally.

use std::sync::Arc;

use crate::application::store::SessionStore;
use crate::domain::gateway::AccountGateway;
use crate::error::SessionResult;

/// Sign out use case
pub struct SignOutUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    store: Arc<SessionStore>,
}

impl<G> SignOutUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Sign out; the local session is cleared even if the backend call fails
    pub async fn execute(&self) -> SessionResult<()> {
        let result = self.gateway.logout().await;
        self.store.logout();

        match &result {
            Ok(()) => tracing::info!("User signed out"),
            Err(e) => e.log(),
        }
        result
    }
}
