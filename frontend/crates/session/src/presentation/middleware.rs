//! Edge Redirect Middleware
//!
//! Runs before any page is served. Guests asking for a protected page are
//! sent to the login page, logged-in visitors asking for a guest-only page
//! are sent home. The check looks at the session cookie only; the backend
//! still authorizes every API call.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

use crate::application::config::SessionConfig;
use crate::domain::route::{EdgeDecision, RouteTable, SessionSignal};

/// Middleware state
#[derive(Clone)]
pub struct EdgeState {
    pub routes: Arc<RouteTable>,
    pub session_cookie_name: Arc<str>,
    pub signal: SessionSignal,
}

impl EdgeState {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            routes: Arc::new(config.routes()),
            session_cookie_name: Arc::from(config.session_cookie_name.as_str()),
            signal: config.session_signal,
        }
    }
}

/// Middleware that redirects by route class and session cookie
pub async fn edge_redirect(
    State(state): State<EdgeState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let token = platform::cookie::extract_cookie(req.headers(), &state.session_cookie_name);
    let authenticated = state.signal.is_authenticated(token.as_deref(), Utc::now());

    match state.routes.decide(&path, authenticated) {
        EdgeDecision::Continue => next.run(req).await,
        EdgeDecision::Redirect(location) => {
            tracing::debug!(path = %path, location = %location, authenticated, "Edge redirect");
            Redirect::temporary(&location).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::{StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use tower::ServiceExt;

    use crate::domain::value_object::access_token::fake_jwt;

    fn app(config: SessionConfig) -> Router {
        Router::new()
            .fallback(|| async { "page" })
            .layer(from_fn_with_state(EdgeState::new(&config), edge_redirect))
    }

    fn request(path: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[tokio::test]
    async fn test_guest_on_protected_page_goes_to_login() {
        let response = app(SessionConfig::default())
            .oneshot(request("/listing/42", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/login?redirect=%2Flisting%2F42");
    }

    #[tokio::test]
    async fn test_session_on_login_page_goes_home() {
        let response = app(SessionConfig::default())
            .oneshot(request("/login", Some("access=anything")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_pass_through() {
        let cases = [
            ("/listing", Some("access=x")),
            ("/register", None),
            ("/", None),
            ("/api/stay/listings/", None),
            ("/assets/app.js", None),
            ("/listing", Some("csrftoken=t; access=x")),
        ];

        for (path, cookie) in cases {
            let response = app(SessionConfig::default())
                .oneshot(request(path, cookie))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{path} {cookie:?}");
        }
    }

    #[tokio::test]
    async fn test_strict_signal_rejects_expired_token() {
        let expired = format!("access={}", fake_jwt(1_000));
        let response = app(SessionConfig::strict())
            .oneshot(request("/bookings", Some(&expired)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

        let live = format!("access={}", fake_jwt(Utc::now().timestamp() + 600));
        let response = app(SessionConfig::strict())
            .oneshot(request("/bookings", Some(&live)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_custom_cookie_name() {
        let config = SessionConfig {
            session_cookie_name: "sid".to_string(),
            ..Default::default()
        };

        let response = app(config.clone())
            .oneshot(request("/profile", Some("access=x")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

        let response = app(config)
            .oneshot(request("/profile", Some("sid=x")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
