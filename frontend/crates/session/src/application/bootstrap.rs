//! Bootstrap Session Use Case
//!
//! Runs once when the client starts: asks the backend who the cookies belong
//! to and ends the initial loading state whatever the answer.

use std::sync::Arc;

use crate::application::store::SessionStore;
use crate::domain::entity::user::User;
use crate::domain::gateway::AccountGateway;
use crate::error::SessionError;

/// Bootstrap session use case
pub struct BootstrapSessionUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    store: Arc<SessionStore>,
}

impl<G> BootstrapSessionUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, store: Arc<SessionStore>) -> Self {
        Self { gateway, store }
    }

    /// Resolve the initial session
    ///
    /// Returns the user when the cookies still identify one. Failures leave
    /// the session unauthenticated.
    pub async fn execute(&self) -> Option<User> {
        let user = match self.gateway.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Session restored");
                self.store.set_auth(Some(user.clone()));
                Some(user)
            }
            Err(SessionError::Unauthenticated) => {
                tracing::debug!("No session to restore");
                None
            }
            Err(e) => {
                e.log();
                None
            }
        };

        self.store.finish_initial_load();
        user
    }
}
