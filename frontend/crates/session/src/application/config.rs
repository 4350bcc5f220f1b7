//! Application Configuration
//!
//! Configuration for the session layer: account endpoints, the edge route
//! table and the pages redirects point at.

use crate::domain::route::{RouteTable, SessionSignal};

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cookie whose presence marks a visitor as logged in at the edge
    pub session_cookie_name: String,
    /// How the edge interprets that cookie
    pub session_signal: SessionSignal,

    pub me_endpoint: String,
    pub login_endpoint: String,
    pub register_endpoint: String,
    pub logout_endpoint: String,
    pub refresh_endpoint: String,

    /// Prefixes that require an authenticated visitor
    pub protected_prefixes: Vec<String>,
    /// Prefixes only guests should see
    pub auth_only_prefixes: Vec<String>,
    /// Prefixes the edge never touches (API, static assets)
    pub excluded_prefixes: Vec<String>,

    pub login_page: String,
    pub home_page: String,
    /// Where a guest-only page sends an already-authenticated visitor
    pub guest_landing_page: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "access".to_string(),
            session_signal: SessionSignal::Presence,
            me_endpoint: "/accounts/me/".to_string(),
            login_endpoint: "/accounts/token/".to_string(),
            register_endpoint: "/accounts/register/".to_string(),
            logout_endpoint: "/accounts/logout/".to_string(),
            refresh_endpoint: "/accounts/token/refresh/".to_string(),
            protected_prefixes: strings(&["/listing", "/bookings", "/profile"]),
            auth_only_prefixes: strings(&["/login", "/register"]),
            excluded_prefixes: strings(&["/api", "/assets", "/favicon.ico"]),
            login_page: "/login".to_string(),
            home_page: "/".to_string(),
            guest_landing_page: "/listing".to_string(),
        }
    }
}

impl SessionConfig {
    /// Config that also rejects expired access tokens at the edge
    pub fn strict() -> Self {
        Self {
            session_signal: SessionSignal::UnexpiredToken,
            ..Default::default()
        }
    }

    /// Route table for the edge filter
    pub fn routes(&self) -> RouteTable {
        RouteTable {
            protected: self.protected_prefixes.clone(),
            auth_only: self.auth_only_prefixes.clone(),
            excluded: self.excluded_prefixes.clone(),
            login_page: self.login_page.clone(),
            home_page: self.home_page.clone(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
