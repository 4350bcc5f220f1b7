//! Cookie Reading Infrastructure
//!
//! The client only ever *reads* cookies: the backend sets them, the browser
//! (or the `reqwest` jar) stores them, and we echo the CSRF token back as a
//! header. The edge filter reads the session cookie from the inbound request.

use http::{HeaderMap, header};
use percent_encoding::percent_decode_str;

/// Anything that can answer "what is the value of cookie `name`?"
pub trait CookieSource: Send + Sync {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Find `name` in a `document.cookie`-style string (`a=1; b=2`)
///
/// Names match exactly and the first occurrence wins. Values are
/// percent-decoded; a value that does not decode to UTF-8 is returned as-is.
pub fn find_cookie(cookie_string: &str, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }

    cookie_string.split(';').find_map(|pair| {
        let value = pair.trim().strip_prefix(name)?.strip_prefix('=')?;
        Some(decode_value(value))
    })
}

fn decode_value(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Extract a cookie value from request headers
///
/// HTTP/2 clients may split cookies across several `Cookie` headers, so every
/// header is searched in order.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookies| find_cookie(cookies, name))
}

impl CookieSource for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        extract_cookie(self, name)
    }
}

/// Snapshot of a browser cookie string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieString(String);

impl CookieString {
    pub fn new(cookies: impl Into<String>) -> Self {
        Self(cookies.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CookieSource for CookieString {
    fn cookie(&self, name: &str) -> Option<String> {
        find_cookie(&self.0, name)
    }
}
