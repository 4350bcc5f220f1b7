//! Live Session Client
//!
//! Assembles the `reqwest` transport, the session store and the
//! authenticated request wrapper. The transport is also the cookie source,
//! so the CSRF header is read from the same jar the backend writes to.

use std::sync::Arc;

use platform::client::ReqwestTransport;
use platform::config::ApiConfig;

use crate::application::bootstrap::BootstrapSessionUseCase;
use crate::application::config::SessionConfig;
use crate::application::reauth_client::ReauthClient;
use crate::application::store::SessionStore;
use crate::domain::entity::user::User;
use crate::error::SessionResult;
use crate::infra::accounts_api::AccountsApi;

/// Request wrapper over the live transport
pub type LiveClient = ReauthClient<ReqwestTransport, ReqwestTransport>;

/// Everything a running client shares: one store, one jar, one refresh gate
pub struct SessionClient {
    store: Arc<SessionStore>,
    transport: Arc<ReqwestTransport>,
    client: Arc<LiveClient>,
    config: Arc<SessionConfig>,
}

impl SessionClient {
    pub fn connect(api: ApiConfig, session: SessionConfig) -> SessionResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(api)?);
        let store = Arc::new(SessionStore::new());
        let client = ReauthClient::new(
            transport.clone(),
            transport.clone(),
            store.clone(),
            transport.config(),
            &session,
        )?;

        tracing::debug!(host = %transport.config().host, "Session client ready");
        Ok(Self {
            store,
            transport,
            client: Arc::new(client),
            config: Arc::new(session),
        })
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn transport(&self) -> &Arc<ReqwestTransport> {
        &self.transport
    }

    /// Shared wrapper for feature gateways such as the stay endpoints
    pub fn client(&self) -> &Arc<LiveClient> {
        &self.client
    }

    pub fn accounts(&self) -> AccountsApi<ReqwestTransport, ReqwestTransport> {
        AccountsApi::new(self.client.clone(), self.config.clone())
    }

    /// Resolve the initial session from whatever cookies the jar holds
    pub async fn bootstrap(&self) -> Option<User> {
        BootstrapSessionUseCase::new(Arc::new(self.accounts()), self.store.clone())
            .execute()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    use axum::extract::State;
    use axum::http::{HeaderMap, header};
    use axum::response::IntoResponse;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use platform::client::ApiRequest;
    use serde_json::json;

    use crate::error::SessionError;

    type Seen = Arc<Mutex<Vec<Option<String>>>>;

    async fn me(State(seen): State<Seen>, headers: HeaderMap) -> Json<serde_json::Value> {
        let csrf = headers
            .get("x-csrftoken")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        seen.lock().unwrap().push(csrf);

        Json(json!({
            "id": 7,
            "email": "guest@example.com",
            "first_name": "Guest",
            "last_name": "User"
        }))
    }

    async fn rotate_csrf() -> impl IntoResponse {
        (
            [(header::SET_COOKIE, "csrftoken=rotated; Path=/")],
            Json(json!({ "status": true, "message": "" })),
        )
    }

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(2)).await;
        "late"
    }

    /// Local backend on an ephemeral port; returns its origin
    async fn backend(seen: Seen) -> String {
        let router = Router::new()
            .route("/api/accounts/me/", get(me))
            .route("/api/csrf/", post(rotate_csrf))
            .route("/api/slow/", get(slow))
            .with_state(seen);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_bootstrap_sends_csrf_from_jar() {
        let seen = Seen::default();
        let host = backend(seen.clone()).await;

        let live = SessionClient::connect(ApiConfig::with_host(host), SessionConfig::default())
            .unwrap();
        live.transport().add_cookie("csrftoken=tok123; Path=/");

        let user = live.bootstrap().await.unwrap();
        assert_eq!(user.id.as_str(), "7");

        let session = live.store().snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(*seen.lock().unwrap(), [Some("tok123".to_string())]);
    }

    #[tokio::test]
    async fn test_csrf_cookie_set_by_backend_is_echoed() {
        let seen = Seen::default();
        let host = backend(seen.clone()).await;
        let live = SessionClient::connect(ApiConfig::with_host(host), SessionConfig::default())
            .unwrap();

        // No cookie yet: header omitted
        live.client().send(ApiRequest::get("/accounts/me/")).await.unwrap();

        live.client()
            .send_public(ApiRequest::post("/csrf/"))
            .await
            .unwrap();
        live.client().send(ApiRequest::get("/accounts/me/")).await.unwrap();

        assert_eq!(*seen.lock().unwrap(), [None, Some("rotated".to_string())]);
    }

    #[tokio::test]
    async fn test_timeout_has_its_own_message() {
        let host = backend(Seen::default()).await;
        let api = ApiConfig {
            request_timeout: Duration::from_millis(100),
            ..ApiConfig::with_host(host)
        };
        let live = SessionClient::connect(api, SessionConfig::default()).unwrap();

        let err = live
            .client()
            .send(ApiRequest::get("/slow/"))
            .await
            .unwrap_err();
        assert!(matches!(&err, SessionError::Transport(e) if e.is_timeout()));
        assert_eq!(err.visitor_message(), "The server took too long to respond");
    }

    #[test]
    fn test_connect_rejects_bad_host() {
        let result = SessionClient::connect(ApiConfig::with_host("::nope::"), SessionConfig::default());
        assert!(matches!(result, Err(SessionError::Transport(_))));
    }
}
