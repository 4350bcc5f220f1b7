//! Access Token Value Object
//!
//! Read-only view of the `access` cookie's JWT claims. The signature is NOT
//! verified: the edge has no key and the backend stays the authority. Only
//! the expiry is read, to stop obviously stale cookies at the edge.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use kernel::error::app_error::{AppError, AppResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Expiry information decoded from an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessToken {
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Decode the payload segment of a compact JWT
    pub fn parse(raw: &str) -> AppResult<Self> {
        let segments: Vec<&str> = raw.trim().split('.').collect();
        if segments.len() != 3 {
            return Err(AppError::decode("Access token is not a JWT"));
        }

        let payload = URL_SAFE_NO_PAD
            .decode(segments[1].trim_end_matches('='))
            .map_err(|e| AppError::decode("Access token payload is not base64url").with_source(e))?;

        let claims: Claims = serde_json::from_slice(&payload)?;
        let exp = claims
            .exp
            .ok_or_else(|| AppError::decode("Access token has no expiry"))?;

        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AppError::decode("Access token expiry is out of range"))?;

        Ok(Self { expires_at })
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[cfg(test)]
pub(crate) fn fake_jwt(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"token_type":"access","exp":{exp}}}"#));
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry() {
        let token = AccessToken::parse(&fake_jwt(1_900_000_000)).unwrap();
        assert_eq!(token.expires_at().timestamp(), 1_900_000_000);
    }

    #[test]
    fn test_is_live() {
        let now = DateTime::from_timestamp(1_800_000_000, 0).unwrap();
        assert!(AccessToken::parse(&fake_jwt(1_800_000_100)).unwrap().is_live(now));
        assert!(!AccessToken::parse(&fake_jwt(1_799_999_999)).unwrap().is_live(now));
        assert!(!AccessToken::parse(&fake_jwt(1_800_000_000)).unwrap().is_live(now));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(AccessToken::parse("").is_err());
        assert!(AccessToken::parse("opaque-session-id").is_err());
        assert!(AccessToken::parse("a.!!!.c").is_err());

        let no_exp = format!("x.{}.y", URL_SAFE_NO_PAD.encode(br#"{"sub":"1"}"#));
        assert!(AccessToken::parse(&no_exp).is_err());
    }
}
