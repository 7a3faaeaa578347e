//! # Client Configuration
//!
//! Endpoint and credential values for the verification API. The engine
//! never reads process environment itself — the embedding application
//! constructs these values explicitly and passes them in. A
//! [`EndpointConfig::from_env`]/[`TenantCredentials::from_env`] convenience
//! exists for embedders that do source them from the environment.
//!
//! Custom `Debug` implementations redact the API key to prevent credential
//! leakage in log output.

use url::Url;
use zeroize::Zeroizing;

/// Default base URL of the verification API.
pub const DEFAULT_BASE_URL: &str = "https://demo.parcha.ai/api/v1";

/// Default document-proxy endpoint used to derive preview URLs.
pub const DEFAULT_PROXY_URL: &str = "https://demo.parcha.ai/getDocument";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required (DOCV_API_KEY)")]
    MissingApiKey,
    #[error("agent key is required (DOCV_AGENT_KEY)")]
    MissingAgentKey,
    #[error("API key contains characters not permitted in an Authorization header")]
    InvalidApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

/// Where the verification API and the document proxy live.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    /// Base URL of the verification API (the submission path is appended).
    pub base_url: Url,
    /// Base URL of the document-proxy service preview URLs point at.
    pub document_proxy_url: Url,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl EndpointConfig {
    /// Configuration with explicit URLs and the default timeout.
    pub fn new(base_url: Url, document_proxy_url: Url) -> Self {
        Self {
            base_url,
            document_proxy_url,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration pointing at the public demo deployment.
    pub fn demo() -> Result<Self, ConfigError> {
        Ok(Self::new(
            parse_url("base_url", DEFAULT_BASE_URL)?,
            parse_url("document_proxy_url", DEFAULT_PROXY_URL)?,
        ))
    }

    /// Load endpoint configuration from environment variables.
    ///
    /// Variables:
    /// - `DOCV_API_URL` (default: `https://demo.parcha.ai/api/v1`)
    /// - `DOCV_PROXY_URL` (default: `https://demo.parcha.ai/getDocument`)
    /// - `DOCV_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("DOCV_API_URL", DEFAULT_BASE_URL)?,
            document_proxy_url: env_url("DOCV_PROXY_URL", DEFAULT_PROXY_URL)?,
            timeout_secs: std::env::var("DOCV_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

/// Credentials identifying the tenant against the verification API: the
/// bearer API key and the agent key sent in every request body.
#[derive(Clone)]
pub struct TenantCredentials {
    api_key: Zeroizing<String>,
    /// Tenant agent key, sent as `agent_key` in the request body.
    pub agent_key: String,
}

impl TenantCredentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`]/[`ConfigError::MissingAgentKey`]
    /// if either value is empty.
    pub fn new(
        api_key: impl Into<String>,
        agent_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let agent_key = agent_key.into();
        if agent_key.is_empty() {
            return Err(ConfigError::MissingAgentKey);
        }
        Ok(Self {
            api_key: Zeroizing::new(api_key),
            agent_key,
        })
    }

    /// Load credentials from `DOCV_API_KEY` and `DOCV_AGENT_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("DOCV_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        let agent_key =
            std::env::var("DOCV_AGENT_KEY").map_err(|_| ConfigError::MissingAgentKey)?;
        Self::new(api_key, agent_key)
    }

    /// The bearer API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for TenantCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantCredentials")
            .field("api_key", &"[REDACTED]")
            .field("agent_key", &self.agent_key)
            .finish()
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}
