// crates/swiftdb-core/src/lookup/client.rs
use super::schema::{ApiBank, ApiResponse};
use super::transport::{LookupRequest, LookupTransport, TransportError};
use crate::code::SwiftCode;
use crate::error::{Result, SwiftDbError};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.apiverve.com/v1/swiftlookup";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_KEY_ENV: &str = "APIVERSE_API_KEY";
pub const ENDPOINT_ENV: &str = "SWIFTDB_LOOKUP_URL";
pub const TIMEOUT_ENV: &str = "SWIFTDB_LOOKUP_TIMEOUT_SECS";

/// Longest upstream body excerpt kept in a failure.
const BODY_EXCERPT: usize = 200;

/// Settings for the remote lookup API.
#[derive(Clone)]
pub struct LookupConfig {
    pub endpoint: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl LookupConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `APIVERSE_API_KEY` (required), `SWIFTDB_LOOKUP_URL` and
    /// `SWIFTDB_LOOKUP_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LookupConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                tracing::error!("{API_KEY_ENV} is not set");
                SwiftDbError::Configuration(format!("{API_KEY_ENV} is not set"))
            })?;

        let mut config = Self::new(api_key);

        if let Some(endpoint) = var(ENDPOINT_ENV).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = var(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SwiftDbError::Configuration(format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Why an upstream call produced no usable answer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UpstreamFailure {
    #[error("lookup service unreachable: {0}")]
    Network(String),
    #[error("lookup timed out: {0}")]
    Timeout(String),
    #[error("lookup service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("lookup response is not JSON: {0}")]
    Malformed(String),
    #[error("lookup response failed schema validation: {0}")]
    Schema(String),
}

impl From<TransportError> for UpstreamFailure {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout(m) => UpstreamFailure::Timeout(m),
            TransportError::Network(m) => UpstreamFailure::Network(m),
        }
    }
}

/// Result of one remote lookup, with every failure kept distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(ApiBank),
    NotFound,
    /// Worth retrying later.
    TransientError(UpstreamFailure),
    /// Retrying will not help until the configuration is fixed.
    ConfigError(String),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    /// Collapses to the found/not-found view; failures become `None`.
    pub fn into_found(self) -> Option<ApiBank> {
        match self {
            LookupOutcome::Found(bank) => Some(bank),
            _ => None,
        }
    }
}

/// Client for the external SWIFT lookup API.
pub struct LookupClient {
    config: LookupConfig,
    transport: Arc<dyn LookupTransport>,
}

impl LookupClient {
    /// Production client over blocking `reqwest`.
    #[cfg(feature = "fetch")]
    pub fn new(config: LookupConfig) -> Result<Self> {
        let transport = super::transport::ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Client configured from the environment; fails fast without an API key.
    #[cfg(feature = "fetch")]
    pub fn from_env() -> Result<Self> {
        Self::new(LookupConfig::from_env()?)
    }

    pub fn with_transport(config: LookupConfig, transport: Arc<dyn LookupTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Looks up one code and reports exactly what happened.
    ///
    /// Input is trimmed and uppercased first. Input that is not SWIFT-shaped
    /// is `NotFound` and never reaches the network.
    pub fn resolve(&self, code: &str) -> LookupOutcome {
        let code = match SwiftCode::parse(code) {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!(error = %e, "rejected before lookup");
                return LookupOutcome::NotFound;
            }
        };

        if self.config.api_key.trim().is_empty() {
            let msg = format!("{API_KEY_ENV} is not set");
            tracing::error!(swift_code = %code, "{msg}");
            return LookupOutcome::ConfigError(msg);
        }

        match self.fetch(&code) {
            Ok(Some(bank)) => {
                tracing::debug!(swift_code = %code, bank = %bank.bank, "lookup hit");
                LookupOutcome::Found(bank)
            }
            Ok(None) => {
                tracing::debug!(swift_code = %code, "lookup miss");
                LookupOutcome::NotFound
            }
            Err(failure) => {
                tracing::warn!(swift_code = %code, error = %failure, "lookup failed");
                LookupOutcome::TransientError(failure)
            }
        }
    }

    /// Found-or-nothing view of [`LookupClient::resolve`].
    ///
    /// Never fails: upstream and configuration problems are logged by
    /// `resolve` and come back as `None`, same as an unknown code.
    pub fn lookup(&self, code: &str) -> Option<ApiBank> {
        self.resolve(code).into_found()
    }

    fn fetch(&self, code: &SwiftCode) -> std::result::Result<Option<ApiBank>, UpstreamFailure> {
        let query = [("swift", code.as_str())];
        let request = LookupRequest {
            url: &self.config.endpoint,
            query: &query,
            api_key: &self.config.api_key,
            timeout: self.config.timeout,
        };

        let response = self.transport.get(&request)?;
        if !response.is_success() {
            return Err(UpstreamFailure::Status {
                status: response.status,
                body: excerpt(&response.body),
            });
        }

        let json: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| UpstreamFailure::Malformed(e.to_string()))?;
        let parsed: ApiResponse =
            serde_json::from_value(json).map_err(|e| UpstreamFailure::Schema(e.to_string()))?;

        if let Some(err) = parsed.error.as_ref().filter(|e| !e.is_null()) {
            tracing::debug!(swift_code = %code, status = %parsed.status, upstream_error = %err, "upstream reported an error");
        }

        Ok(parsed.into_first_bank())
    }
}

impl fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

/// One-shot lookup that reads its configuration from the environment.
///
/// A missing API key is an `Err(Configuration)`, distinct from a miss.
/// Everything else behaves like [`LookupClient::lookup`].
#[cfg(feature = "fetch")]
pub fn swift_lookup(code: &str) -> Result<Option<ApiBank>> {
    Ok(LookupClient::from_env()?.lookup(code))
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT).collect()
}
