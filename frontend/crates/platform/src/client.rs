//! HTTP Transport
//!
//! The transport is the raw "send one request, get one response" port. It
//! knows nothing about sessions or refresh; that policy lives one layer up.
//! Non-2xx statuses are *responses*, not errors: only failures that produced
//! no response at all are [`TransportError`]s.

use std::sync::Arc;

use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use kernel::error::app_error::AppError;
use reqwest::cookie::{CookieStore, Jar};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{ApiConfig, ConfigError};
use crate::cookie::{CookieSource, find_cookie};

/// Outbound request descriptor, relative to the API base URL
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path such as `/stay/listings/`
    pub path: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Attach a JSON body
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set (replace) a header
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Response as received, body kept as text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Failure that produced no HTTP response
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{method} {path} failed: {source}")]
    Request {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    /// Whether the failure was a timeout rather than a refused/unreachable host
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Request { source, .. } if source.is_timeout())
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Endpoint(_) | TransportError::Build(_) => {
                AppError::upstream("The booking service is misconfigured").with_source(err)
            }
            TransportError::Request { .. } => AppError::network("Could not reach the server")
                .with_action("Check your connection and try again")
                .with_source(err),
        }
    }
}

/// Port for sending API requests
#[trait_variant::make(HttpTransport: Send)]
pub trait LocalHttpTransport {
    /// Send one request and return whatever the backend answered
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// `reqwest`-backed transport with its own cookie jar
///
/// The jar plays the role of the browser's cookie store: cookies set by the
/// backend (session, refresh, CSRF) are replayed on every later request.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    jar: Arc<Jar>,
    config: Arc<ApiConfig>,
    base_url: Url,
}

impl ReqwestTransport {
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let base_url = config.base_url()?;
        let jar = Arc::new(Jar::default());

        let http = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .timeout(config.request_timeout)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            http,
            jar,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Seed the jar, e.g. with cookies restored from an earlier run
    pub fn add_cookie(&self, cookie: &str) {
        self.jar.add_cookie_str(cookie, &self.base_url);
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.endpoint_url(&request.path)?;

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let into_error = |source| TransportError::Request {
            method: request.method.clone(),
            path: request.path.clone(),
            source,
        };

        let response = builder.send().await.map_err(into_error)?;
        let status = response.status();
        let body = response.text().await.map_err(into_error)?;

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "API response"
        );

        Ok(ApiResponse { status, body })
    }
}

impl CookieSource for ReqwestTransport {
    fn cookie(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        find_cookie(header.to_str().ok()?, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::post("/stay/get_listing/")
            .json(&serde_json::json!({ "id": "l1" }))
            .unwrap()
            .with_header(
                HeaderName::from_static("x-csrftoken"),
                HeaderValue::from_static("tok"),
            );

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(serde_json::json!({ "id": "l1" })));
        assert_eq!(request.headers.get("x-csrftoken").unwrap(), "tok");
        assert!(ApiRequest::get("/accounts/me/").body.is_none());
    }

    #[test]
    fn test_response_helpers() {
        let ok = ApiResponse::new(StatusCode::OK, r#"{"status":true}"#);
        assert!(ok.is_success());
        let value: serde_json::Value = ok.json().unwrap();
        assert_eq!(value["status"], true);

        let denied = ApiResponse::new(StatusCode::UNAUTHORIZED, "");
        assert!(denied.is_unauthorized());
        assert!(!denied.is_success());
    }

    #[test]
    fn test_transport_reads_jar_cookies() {
        let transport = ReqwestTransport::new(ApiConfig::default()).unwrap();
        transport.add_cookie("csrftoken=abc; Path=/");

        assert_eq!(transport.cookie("csrftoken"), Some("abc".to_string()));
        assert_eq!(transport.cookie("access"), None);
    }

    #[test]
    fn test_transport_rejects_bad_host() {
        let result = ReqwestTransport::new(ApiConfig::with_host("::nope::"));
        assert!(matches!(result, Err(TransportError::Endpoint(_))));
    }

    #[test]
    fn test_misconfiguration_maps_to_upstream() {
        let err = TransportError::Endpoint(ConfigError::InvalidHost {
            host: "x".to_string(),
            reason: "bad".to_string(),
        });
        let app_err: AppError = err.into();
        assert_eq!(app_err.kind(), kernel::error::kind::ErrorKind::Upstream);
    }
}
