//! Session Entity
//!
//! Client-side view of the authentication state. The transitions here are
//! pure; [`crate::application::store::SessionStore`] applies them and
//! notifies readers.

use crate::domain::entity::user::User;

/// Authentication state shared by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    /// True until the initial "who am I" lookup has resolved
    pub is_loading: bool,
    pub user: Option<User>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
        }
    }
}

impl Session {
    /// Mark the session authenticated
    ///
    /// `None` keeps the current user; a refresh proves the credential is
    /// valid again but says nothing about who it belongs to.
    pub fn set_auth(&mut self, user: Option<User>) {
        self.is_authenticated = true;
        if let Some(user) = user {
            self.user = Some(user);
        }
    }

    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }

    pub fn finish_initial_load(&mut self) {
        self.is_loading = false;
    }

    /// Loading has finished and the visitor is authenticated
    pub fn is_resolved_authenticated(&self) -> bool {
        !self.is_loading && self.is_authenticated
    }

    pub fn user_id(&self) -> Option<&kernel::id::UserId> {
        self.user.as_ref().map(|user| &user.id)
    }
}
