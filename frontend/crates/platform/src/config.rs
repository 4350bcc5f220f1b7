//! API Client Configuration
//!
//! Where the booking API lives and how requests are decorated.

use std::time::Duration;

use url::Url;

/// Error building a usable API base URL
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API host '{host}': {reason}")]
    InvalidHost { host: String, reason: String },
}

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://api.example.com`
    pub host: String,
    /// Path prefix every endpoint lives under
    pub api_prefix: String,
    /// Cookie holding the anti-forgery token
    pub csrf_cookie_name: String,
    /// Header the token is echoed in
    pub csrf_header_name: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:8000".to_string(),
            api_prefix: "/api".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            csrf_header_name: "X-CSRFToken".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Config pointing at a specific backend origin
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Default::default()
        }
    }

    /// Config for local development (short timeout, local backend)
    pub fn development() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            ..Default::default()
        }
    }

    /// Base URL with a trailing slash so endpoint paths join under the prefix
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let raw = format!(
            "{}/{}/",
            self.host.trim_end_matches('/'),
            self.api_prefix.trim_matches('/')
        );
        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidHost {
            host: self.host.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidHost {
                host: self.host.clone(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    /// Absolute URL of an endpoint path such as `/stay/listings/`
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ConfigError> {
        let base = self.base_url()?;
        base.join(path.trim_start_matches('/'))
            .map_err(|e| ConfigError::InvalidHost {
                host: self.host.clone(),
                reason: e.to_string(),
            })
    }
}
