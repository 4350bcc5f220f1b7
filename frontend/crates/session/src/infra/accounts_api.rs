//! Accounts API
//!
//! [`AccountGateway`] over the `/accounts/` endpoints. Login and register go
//! out without session recovery; "who am I" and logout recover from 401 like
//! any other call.

use std::sync::Arc;

use platform::client::{ApiRequest, ApiResponse, HttpTransport};
use platform::cookie::CookieSource;

use crate::application::config::SessionConfig;
use crate::application::reauth_client::ReauthClient;
use crate::domain::entity::user::User;
use crate::domain::gateway::{AccountGateway, Credentials, Registration};
use crate::error::{SessionError, SessionResult};
use crate::presentation::dto::{LoginRequest, MeResponse, RegisterRequest};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Account endpoints of the booking backend
pub struct AccountsApi<T, C> {
    client: Arc<ReauthClient<T, C>>,
    config: Arc<SessionConfig>,
}

impl<T, C> AccountsApi<T, C> {
    pub fn new(client: Arc<ReauthClient<T, C>>, config: Arc<SessionConfig>) -> Self {
        Self { client, config }
    }
}

fn ensure_success(response: ApiResponse) -> SessionResult<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(SessionError::from_response(&response))
    }
}

impl<T, C> AccountGateway for AccountsApi<T, C>
where
    T: HttpTransport + Sync,
    C: CookieSource,
{
    async fn current_user(&self) -> SessionResult<User> {
        let request = ApiRequest::get(self.config.me_endpoint.as_str());
        let response = ensure_success(self.client.send(request).await?)?;
        Ok(response.json::<MeResponse>()?.into())
    }

    async fn login(&self, credentials: &Credentials) -> SessionResult<()> {
        let body = LoginRequest {
            email: credentials.email.as_str(),
            password: &credentials.password,
        };
        let request = ApiRequest::post(self.config.login_endpoint.as_str()).json(&body)?;

        let response = self.client.send_public(request).await?;
        match ensure_success(response) {
            Ok(_) => Ok(()),
            Err(SessionError::Unauthenticated) => {
                Err(SessionError::Rejected(INVALID_CREDENTIALS.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    async fn register(&self, registration: &Registration) -> SessionResult<()> {
        let body = RegisterRequest {
            first_name: &registration.first_name,
            last_name: &registration.last_name,
            email: registration.email.as_str(),
            password: &registration.password,
        };
        let request = ApiRequest::post(self.config.register_endpoint.as_str()).json(&body)?;

        ensure_success(self.client.send_public(request).await?)?;
        Ok(())
    }

    async fn logout(&self) -> SessionResult<()> {
        let request = ApiRequest::post(self.config.logout_endpoint.as_str());
        ensure_success(self.client.send(request).await?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use platform::client::TransportError;
    use platform::config::ApiConfig;
    use platform::cookie::CookieString;
    use std::sync::Mutex;

    use crate::application::store::SessionStore;
    use crate::domain::value_object::email::Email;

    /// Replays canned responses by path and records request bodies
    #[derive(Default)]
    struct CannedBackend {
        responses: Vec<(&'static str, StatusCode, &'static str)>,
        bodies: Mutex<Vec<(String, Option<serde_json::Value>)>>,
    }

    impl HttpTransport for CannedBackend {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            self.bodies
                .lock()
                .unwrap()
                .push((request.path.clone(), request.body.clone()));

            let (_, status, body) = self
                .responses
                .iter()
                .find(|(path, _, _)| *path == request.path)
                .copied()
                .unwrap_or(("", StatusCode::NOT_FOUND, ""));
            Ok(ApiResponse::new(status, body))
        }
    }

    fn api(
        responses: Vec<(&'static str, StatusCode, &'static str)>,
    ) -> (AccountsApi<CannedBackend, CookieString>, Arc<CannedBackend>) {
        let backend = Arc::new(CannedBackend {
            responses,
            ..Default::default()
        });
        let config = Arc::new(SessionConfig::default());
        let client = ReauthClient::new(
            backend.clone(),
            Arc::new(CookieString::default()),
            Arc::new(SessionStore::new()),
            &ApiConfig::default(),
            &config,
        )
        .unwrap();
        (AccountsApi::new(Arc::new(client), config), backend)
    }

    fn credentials(password: &str) -> Credentials {
        Credentials {
            email: Email::new("guest@example.com").unwrap(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_current_user() {
        let (api, _) = api(vec![(
            "/accounts/me/",
            StatusCode::OK,
            r#"{"id": "u1", "email": "guest@example.com", "first_name": "Guest", "last_name": "User"}"#,
        )]);

        let user = api.current_user().await.unwrap();
        assert_eq!(user.id.as_str(), "u1");
        assert_eq!(user.display_name(), "Guest User");
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let (api, backend) = api(vec![("/accounts/token/", StatusCode::OK, "{}")]);

        api.login(&credentials("hunter2")).await.unwrap();

        let bodies = backend.bodies.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0].1,
            Some(serde_json::json!({ "email": "guest@example.com", "password": "hunter2" }))
        );
    }

    #[tokio::test]
    async fn test_login_wrong_password_does_not_refresh() {
        let (api, backend) = api(vec![(
            "/accounts/token/",
            StatusCode::UNAUTHORIZED,
            r#"{"detail": "No active account found"}"#,
        )]);

        let err = api.login(&credentials("wrong")).await.unwrap_err();
        assert_eq!(err.visitor_message(), INVALID_CREDENTIALS);

        let bodies = backend.bodies.lock().unwrap();
        assert!(bodies.iter().all(|(path, _)| path != "/accounts/token/refresh/"));
    }

    #[tokio::test]
    async fn test_register_surfaces_backend_message() {
        let (api, _) = api(vec![(
            "/accounts/register/",
            StatusCode::BAD_REQUEST,
            r#"{"status": false, "message": "Email already registered"}"#,
        )]);

        let registration = Registration {
            first_name: "Guest".to_string(),
            last_name: "User".to_string(),
            email: Email::new("guest@example.com").unwrap(),
            password: "hunter2".to_string(),
        };
        let err = api.register(&registration).await.unwrap_err();
        assert_eq!(err.visitor_message(), "Email already registered");
    }

    #[tokio::test]
    async fn test_logout_with_dead_session() {
        let (api, _) = api(vec![
            ("/accounts/logout/", StatusCode::UNAUTHORIZED, ""),
            ("/accounts/token/refresh/", StatusCode::UNAUTHORIZED, ""),
        ]);

        let err = api.logout().await.unwrap_err();
        assert!(matches!(err, SessionError::Unauthenticated));
    }
}
