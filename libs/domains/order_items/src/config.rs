//! Upstream order-management service configuration

use core_config::{ConfigError, FromEnv, env_parse_or, env_required};
use std::fmt;
use std::time::Duration;

/// Default per-call timeout for upstream requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the order-management service.
///
/// `Debug` output redacts the API key.
#[derive(Clone)]
pub struct UpstreamConfig {
    /// Base URL, e.g. `https://orders.example.com/v1`
    pub base_url: String,
    /// Sent as `X-API-KEY`
    pub api_key: String,
    /// Sent as `X-Tenant-ID`
    pub tenant_id: String,
    /// Applied to every upstream call
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        tenant_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            tenant_id: tenant_id.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FromEnv for UpstreamConfig {
    /// - ORDERS_API_URL: required, absolute http(s) URL
    /// - ORDERS_API_KEY: required
    /// - ORDERS_TENANT_ID: required
    /// - ORDERS_API_TIMEOUT_SECS: defaults to 10, must be positive
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_required("ORDERS_API_URL")?;
        let url = reqwest::Url::parse(&base_url).map_err(|e| ConfigError::ParseError {
            key: "ORDERS_API_URL".to_string(),
            details: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ParseError {
                key: "ORDERS_API_URL".to_string(),
                details: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let api_key = env_required("ORDERS_API_KEY")?;
        let tenant_id = env_required("ORDERS_TENANT_ID")?;

        let timeout_secs = env_parse_or("ORDERS_API_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())?;
        if timeout_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "ORDERS_API_TIMEOUT_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self::new(base_url, api_key, tenant_id).with_timeout(Duration::from_secs(timeout_secs)))
    }
}
