//! Session Store
//!
//! Owns the single [`Session`] value. Constructed once per client and shared
//! by `Arc`; pages read snapshots or subscribe, while only the request
//! wrapper and the account use cases write.

use tokio::sync::watch;

use crate::domain::entity::{session::Session, user::User};

/// Observable holder of the session state
#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Fresh store in the initial loading state
    pub fn new() -> Self {
        let (state, _) = watch::channel(Session::default());
        Self { state }
    }

    /// Current state, cloned
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn set_auth(&self, user: Option<User>) {
        let has_user = user.is_some();
        self.state.send_modify(|session| session.set_auth(user));
        tracing::debug!(has_user, "Session authenticated");
    }

    pub fn logout(&self) {
        self.state.send_modify(Session::logout);
        tracing::info!("Session logged out");
    }

    pub fn finish_initial_load(&self) {
        self.state.send_modify(Session::finish_initial_load);
    }

    /// Back to the initial loading state, e.g. when the client shuts down
    pub fn reset(&self) {
        self.state.send_replace(Session::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    fn user() -> User {
        User {
            id: UserId::new("u1"),
            email: "guest@example.com".to_string(),
            first_name: "Guest".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[test]
    fn test_transitions() {
        let store = SessionStore::new();
        assert!(store.snapshot().is_loading);

        store.set_auth(Some(user()));
        store.finish_initial_load();
        let session = store.snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);

        store.logout();
        assert!(store.snapshot().user.is_none());

        store.reset();
        assert_eq!(store.snapshot(), Session::default());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.set_auth(Some(user()));
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated);

        store.logout();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_authenticated);
    }
}
