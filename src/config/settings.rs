use serde::Deserialize;

use crate::auth::credentials::Credentials;

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10_000;

/// ================================
/// Full SDK configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct SdkConfig {
    /// Host (and optional port) of the gateway, e.g. `localhost` or
    /// `graphgrid.example.com:8080`. Ignored in docker context.
    pub url_base: String,
    #[serde(default)]
    pub docker_context: bool,
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    pub logging: Option<LoggingConfig>,
}

impl SdkConfig {
    pub fn new(url_base: impl Into<String>, access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            url_base: url_base.into(),
            docker_context: false,
            credentials: CredentialsConfig { access_key: access_key.into(), secret_key: secret_key.into() },
            http: HttpConfig::default(),
            token: TokenConfig::default(),
            pipeline: PipelineConfig::default(),
            logging: None,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.credentials.access_key.to_owned(), self.credentials.secret_key.to_owned())
    }
}

#[derive(Deserialize, Clone)]
pub struct CredentialsConfig {
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_ms: DEFAULT_HTTP_TIMEOUT_MS }
    }
}

/// ================================
/// Token
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TokenConfig {
    #[serde(default)]
    pub expiry_unit: ExpiryUnit,
}

/// Unit of the `expires_in` field of token responses.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryUnit {
    #[default]
    Milliseconds,
    Seconds,
}

impl ExpiryUnit {
    pub fn to_millis(&self, expires_in: i64) -> i64 {
        match self {
            ExpiryUnit::Milliseconds => expires_in,
            ExpiryUnit::Seconds => expires_in.saturating_mul(1000),
        }
    }
}

/// ================================
/// Train pipeline
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    /// None polls until every run finishes
    pub max_polls: Option<u32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { poll_interval_ms: DEFAULT_POLL_INTERVAL_MS, max_polls: None }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

fn default_http_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}
