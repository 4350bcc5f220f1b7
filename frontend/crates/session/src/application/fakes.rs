//! In-memory gateway for use case tests

use std::sync::Mutex;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::gateway::{AccountGateway, Credentials, Registration};
use crate::error::{SessionError, SessionResult};

pub(crate) fn guest() -> User {
    User {
        id: UserId::new("7"),
        email: "guest@example.com".to_string(),
        first_name: "Guest".to_string(),
        last_name: "User".to_string(),
    }
}

#[derive(Default)]
pub(crate) struct FakeAccounts {
    /// User behind the current cookies; `None` answers 401
    pub user: Mutex<Option<User>>,
    pub password: String,
    pub offline: bool,
    pub calls: Mutex<Vec<&'static str>>,
    pub registrations: Mutex<Vec<Registration>>,
}

impl FakeAccounts {
    pub fn signed_in() -> Self {
        Self {
            user: Mutex::new(Some(guest())),
            ..Default::default()
        }
    }

    pub fn with_password(password: &str) -> Self {
        Self {
            password: password.to_string(),
            ..Default::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> SessionResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.offline {
            return Err(SessionError::Upstream {
                status: http::StatusCode::BAD_GATEWAY,
                message: None,
            });
        }
        Ok(())
    }
}

impl AccountGateway for FakeAccounts {
    async fn current_user(&self) -> SessionResult<User> {
        self.record("me")?;
        self.user
            .lock()
            .unwrap()
            .clone()
            .ok_or(SessionError::Unauthenticated)
    }

    async fn login(&self, credentials: &Credentials) -> SessionResult<()> {
        self.record("login")?;
        if credentials.password != self.password {
            return Err(SessionError::Rejected("Invalid email or password".to_string()));
        }
        *self.user.lock().unwrap() = Some(User {
            email: credentials.email.as_str().to_string(),
            ..guest()
        });
        Ok(())
    }

    async fn register(&self, registration: &Registration) -> SessionResult<()> {
        self.record("register")?;
        self.registrations.lock().unwrap().push(registration.clone());
        Ok(())
    }

    async fn logout(&self) -> SessionResult<()> {
        self.record("logout")?;
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}
