//! Authenticated Request Wrapper
//!
//! Every API call goes through [`ReauthClient`]. It echoes the CSRF cookie as
//! a header, and on a 401 recovers the session through the [`RefreshGate`]
//! before replaying the request once.

use std::sync::Arc;

use http::{HeaderName, HeaderValue};
use platform::client::{ApiRequest, ApiResponse, HttpTransport};
use platform::config::ApiConfig;
use platform::cookie::CookieSource;
use serde::de::DeserializeOwned;

use crate::application::config::SessionConfig;
use crate::application::refresh_gate::{RefreshGate, RefreshOutcome};
use crate::application::store::SessionStore;
use crate::error::{SessionError, SessionResult};
use crate::presentation::dto::Envelope;

/// Request wrapper with CSRF echo and single-flight session refresh
pub struct ReauthClient<T, C> {
    transport: Arc<T>,
    cookies: Arc<C>,
    store: Arc<SessionStore>,
    gate: RefreshGate,
    csrf_cookie: String,
    csrf_header: HeaderName,
    refresh_endpoint: String,
}

impl<T, C> ReauthClient<T, C>
where
    T: HttpTransport + Sync,
    C: CookieSource,
{
    pub fn new(
        transport: Arc<T>,
        cookies: Arc<C>,
        store: Arc<SessionStore>,
        api: &ApiConfig,
        session: &SessionConfig,
    ) -> SessionResult<Self> {
        let csrf_header = HeaderName::try_from(api.csrf_header_name.as_str()).map_err(|e| {
            SessionError::Config(format!(
                "CSRF header name {:?}: {}",
                api.csrf_header_name, e
            ))
        })?;

        Ok(Self {
            transport,
            cookies,
            store,
            gate: RefreshGate::new(),
            csrf_cookie: api.csrf_cookie_name.clone(),
            csrf_header,
            refresh_endpoint: session.refresh_endpoint.clone(),
        })
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Number of refreshes performed so far
    pub async fn refresh_epoch(&self) -> u64 {
        self.gate.epoch().await
    }

    /// Send a request, recovering once from a 401
    ///
    /// Non-2xx statuses other than 401 are returned as responses.
    pub async fn send(&self, request: ApiRequest) -> SessionResult<ApiResponse> {
        let ticket = self.gate.ticket().await;

        let response = self.dispatch(&request).await?;
        if !response.is_unauthorized() {
            return Ok(response);
        }

        tracing::debug!(path = %request.path, "Unauthorized, recovering session");
        match self.gate.recover(ticket, || self.refresh()).await {
            RefreshOutcome::Rejected => Err(SessionError::Unauthenticated),
            RefreshOutcome::Refreshed => {
                let response = self.dispatch(&request).await?;
                if response.is_unauthorized() {
                    tracing::warn!(path = %request.path, "Still unauthorized after refresh");
                    return Err(SessionError::Unauthenticated);
                }
                Ok(response)
            }
        }
    }

    /// Send without session recovery
    ///
    /// For credential exchanges, where a 401 means wrong credentials rather
    /// than an expired session.
    pub async fn send_public(&self, request: ApiRequest) -> SessionResult<ApiResponse> {
        self.dispatch(&request).await
    }

    /// Send a request and decode the `{status, message, data}` envelope
    ///
    /// Non-2xx statuses and `status: false` become errors.
    pub async fn send_json<D: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> SessionResult<Envelope<D>> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(SessionError::from_response(&response));
        }

        let envelope: Envelope<D> = response.json()?;
        if !envelope.status {
            return Err(SessionError::Rejected(envelope.message));
        }
        Ok(envelope)
    }

    async fn dispatch(&self, request: &ApiRequest) -> SessionResult<ApiResponse> {
        let mut request = request.clone();
        // Read per attempt: a refresh may rotate the token.
        if let Some(token) = self.cookies.cookie(&self.csrf_cookie) {
            match HeaderValue::from_str(&token) {
                Ok(value) => {
                    request.headers.insert(self.csrf_header.clone(), value);
                }
                Err(_) => tracing::warn!("CSRF cookie is not a valid header value"),
            }
        }

        Ok(self.transport.send(&request).await?)
    }

    /// The single refresh call, run with the gate held
    async fn refresh(&self) -> RefreshOutcome {
        let request = ApiRequest::post(self.refresh_endpoint.as_str());

        match self.dispatch(&request).await {
            Ok(response) if response.is_success() => {
                tracing::info!("Session refreshed");
                self.store.set_auth(None);
                RefreshOutcome::Refreshed
            }
            Ok(response) => {
                tracing::info!(status = response.status.as_u16(), "Refresh rejected");
                self.store.logout();
                RefreshOutcome::Rejected
            }
            Err(e) => {
                e.log();
                self.store.logout();
                RefreshOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use kernel::id::UserId;
    use platform::client::TransportError;
    use platform::cookie::CookieString;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Barrier;

    use crate::domain::entity::user::User;

    const REFRESH: &str = "/accounts/token/refresh/";

    /// Backend whose data endpoints answer 401 until a refresh succeeds
    struct FakeBackend {
        refresh_ok: bool,
        always_unauthorized: bool,
        authorized: AtomicBool,
        refreshes: AtomicUsize,
        calls: AtomicUsize,
        /// Holds the first N data calls until all of them are in flight
        barrier: Option<(usize, Barrier)>,
        csrf_seen: Mutex<Vec<Option<String>>>,
    }

    impl FakeBackend {
        fn new(refresh_ok: bool) -> Self {
            Self {
                refresh_ok,
                always_unauthorized: false,
                authorized: AtomicBool::new(false),
                refreshes: AtomicUsize::new(0),
                calls: AtomicUsize::new(0),
                barrier: None,
                csrf_seen: Mutex::new(Vec::new()),
            }
        }

        fn with_barrier(mut self, n: usize) -> Self {
            self.barrier = Some((n, Barrier::new(n)));
            self
        }

        fn refreshes(&self) -> usize {
            self.refreshes.load(Ordering::SeqCst)
        }
    }

    impl HttpTransport for FakeBackend {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            if request.path == REFRESH {
                self.refreshes.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                if self.refresh_ok {
                    self.authorized.store(true, Ordering::SeqCst);
                    return Ok(ApiResponse::new(StatusCode::OK, "{}"));
                }
                return Ok(ApiResponse::new(StatusCode::UNAUTHORIZED, ""));
            }

            let csrf = request
                .headers
                .get("x-csrftoken")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            self.csrf_seen.lock().unwrap().push(csrf);

            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let authorized = self.authorized.load(Ordering::SeqCst) && !self.always_unauthorized;
            if let Some((n, barrier)) = &self.barrier {
                if call < *n {
                    barrier.wait().await;
                }
            }

            if authorized {
                Ok(ApiResponse::new(
                    StatusCode::OK,
                    r#"{"status": true, "message": "ok", "data": 7}"#,
                ))
            } else {
                Ok(ApiResponse::new(StatusCode::UNAUTHORIZED, ""))
            }
        }
    }

    fn client(
        backend: FakeBackend,
        cookies: &str,
    ) -> (Arc<ReauthClient<FakeBackend, CookieString>>, Arc<FakeBackend>) {
        let backend = Arc::new(backend);
        let client = ReauthClient::new(
            backend.clone(),
            Arc::new(CookieString::new(cookies)),
            Arc::new(SessionStore::new()),
            &ApiConfig::default(),
            &SessionConfig::default(),
        )
        .unwrap();
        (Arc::new(client), backend)
    }

    fn user() -> User {
        User {
            id: UserId::new("u1"),
            email: "guest@example.com".to_string(),
            first_name: "Guest".to_string(),
            last_name: "User".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let backend = FakeBackend::new(true);
        backend.authorized.store(true, Ordering::SeqCst);
        let (client, backend) = client(backend, "");

        let response = client.send(ApiRequest::get("/accounts/me/")).await.unwrap();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(backend.refreshes(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_unauthorized_share_one_refresh() {
        const N: usize = 6;
        let (client, backend) = client(FakeBackend::new(true).with_barrier(N), "");

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..N {
            let client = client.clone();
            tasks.spawn(async move { client.send(ApiRequest::post("/stay/listings/")).await });
        }

        while let Some(result) = tasks.join_next().await {
            let response = result.unwrap().unwrap();
            assert_eq!(response.status, StatusCode::OK);
        }
        assert_eq!(backend.refreshes(), 1);
        assert_eq!(client.refresh_epoch().await, 1);
        assert!(client.store().snapshot().is_authenticated);
    }

    #[tokio::test]
    async fn test_failed_refresh_logs_out_every_caller() {
        const N: usize = 4;
        let (client, backend) = client(FakeBackend::new(false).with_barrier(N), "");
        client.store().set_auth(Some(user()));

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..N {
            let client = client.clone();
            tasks.spawn(async move { client.send(ApiRequest::get("/accounts/me/")).await });
        }

        while let Some(result) = tasks.join_next().await {
            assert!(matches!(result.unwrap(), Err(SessionError::Unauthenticated)));
        }
        assert_eq!(backend.refreshes(), 1);

        let session = client.store().snapshot();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[tokio::test]
    async fn test_later_expiry_refreshes_again() {
        let (client, backend) = client(FakeBackend::new(true), "");

        client.send(ApiRequest::get("/accounts/me/")).await.unwrap();
        assert_eq!(backend.refreshes(), 1);

        // Access token expires again
        backend.authorized.store(false, Ordering::SeqCst);
        client.send(ApiRequest::get("/accounts/me/")).await.unwrap();
        assert_eq!(backend.refreshes(), 2);
    }

    #[tokio::test]
    async fn test_replay_unauthorized_is_not_retried() {
        let mut backend = FakeBackend::new(true);
        backend.always_unauthorized = true;
        let (client, backend) = client(backend, "");

        let result = client.send(ApiRequest::get("/accounts/me/")).await;
        assert!(matches!(result, Err(SessionError::Unauthenticated)));
        assert_eq!(backend.refreshes(), 1);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_csrf_header_from_cookie() {
        let backend = FakeBackend::new(true);
        backend.authorized.store(true, Ordering::SeqCst);
        let (client, backend) = client(backend, "access=a; csrftoken=tok%3D1");

        client.send(ApiRequest::post("/stay/bookings/")).await.unwrap();
        assert_eq!(
            backend.csrf_seen.lock().unwrap().as_slice(),
            &[Some("tok=1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_csrf_header_omitted_without_cookie() {
        let backend = FakeBackend::new(true);
        backend.authorized.store(true, Ordering::SeqCst);
        let (client, backend) = client(backend, "access=a");

        client.send(ApiRequest::post("/stay/bookings/")).await.unwrap();
        assert_eq!(backend.csrf_seen.lock().unwrap().as_slice(), &[None]);
    }

    #[tokio::test]
    async fn test_send_public_skips_refresh() {
        let (client, backend) = client(FakeBackend::new(true), "");

        let response = client.send_public(ApiRequest::post("/accounts/token/")).await.unwrap();
        assert!(response.is_unauthorized());
        assert_eq!(backend.refreshes(), 0);
    }

    #[tokio::test]
    async fn test_send_json_reads_envelope() {
        let backend = FakeBackend::new(true);
        backend.authorized.store(true, Ordering::SeqCst);
        let (client, _) = client(backend, "");

        let envelope = client
            .send_json::<u32>(ApiRequest::post("/stay/listings/"))
            .await
            .unwrap();
        assert_eq!(envelope.data, Some(7));
        assert_eq!(envelope.message, "ok");
    }

    #[test]
    fn test_invalid_csrf_header_name() {
        let api = ApiConfig {
            csrf_header_name: "bad header".to_string(),
            ..Default::default()
        };
        let result = ReauthClient::new(
            Arc::new(FakeBackend::new(true)),
            Arc::new(CookieString::new("")),
            Arc::new(SessionStore::new()),
            &api,
            &SessionConfig::default(),
        );
        assert!(matches!(result, Err(SessionError::Config(_))));
    }
}
