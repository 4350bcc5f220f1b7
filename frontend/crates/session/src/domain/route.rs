//! Route Classification
//!
//! Pure decision logic behind the edge redirect filter. Paths are matched by
//! plain prefix, so `/listing` also covers `/listing/42` and `/listings`.

use chrono::{DateTime, Utc};
use url::form_urlencoded;

use crate::domain::value_object::access_token::AccessToken;

/// How a request path is treated at the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// API calls and static assets, never redirected
    Excluded,
    /// Requires an authenticated visitor
    Protected,
    /// Only meaningful for guests (login, register)
    AuthOnly,
    Public,
}

/// Outcome of the edge filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeDecision {
    Continue,
    Redirect(String),
}

/// What counts as "looks authenticated" at the edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionSignal {
    /// The session cookie exists (any value)
    #[default]
    Presence,
    /// The session cookie is a JWT whose `exp` is still in the future
    UnexpiredToken,
}

impl SessionSignal {
    pub fn is_authenticated(&self, cookie: Option<&str>, now: DateTime<Utc>) -> bool {
        match (self, cookie) {
            (_, None) => false,
            (SessionSignal::Presence, Some(_)) => true,
            (SessionSignal::UnexpiredToken, Some(raw)) => AccessToken::parse(raw)
                .map(|token| token.is_live(now))
                .unwrap_or(false),
        }
    }
}

/// Static prefix lists and the pages redirects point at
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub protected: Vec<String>,
    pub auth_only: Vec<String>,
    pub excluded: Vec<String>,
    pub login_page: String,
    pub home_page: String,
}

impl RouteTable {
    pub fn classify(&self, path: &str) -> RouteClass {
        let matches = |prefixes: &[String]| prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()));

        if matches(&self.excluded) {
            RouteClass::Excluded
        } else if matches(&self.protected) {
            RouteClass::Protected
        } else if matches(&self.auth_only) {
            RouteClass::AuthOnly
        } else {
            RouteClass::Public
        }
    }

    pub fn decide(&self, path: &str, authenticated: bool) -> EdgeDecision {
        match self.classify(path) {
            RouteClass::Protected if !authenticated => {
                EdgeDecision::Redirect(login_redirect(&self.login_page, path))
            }
            RouteClass::AuthOnly if authenticated => EdgeDecision::Redirect(self.home_page.clone()),
            _ => EdgeDecision::Continue,
        }
    }
}

/// `/login?redirect=<path>` with the path form-encoded
pub fn login_redirect(login_page: &str, path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", path)
        .finish();
    format!("{}?{}", login_page, query)
}

/// Read the `redirect` parameter back out of a query string
pub fn redirect_param(query: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == "redirect")
        .map(|(_, value)| value.into_owned())
}
