// crates/swiftdb-core/src/lookup/transport.rs
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// One outbound GET, fully described.
#[derive(Debug, Clone, Copy)]
pub struct LookupRequest<'a> {
    pub url: &'a str,
    pub query: &'a [(&'a str, &'a str)],
    /// Sent as `x-api-key`.
    pub api_key: &'a str,
    pub timeout: Duration,
}

/// Status and body of a completed round trip, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The round trip itself did not complete.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Sends lookup requests. The production implementation is
/// [`ReqwestTransport`]; tests plug in scripted responses.
pub trait LookupTransport: Send + Sync + fmt::Debug {
    fn get(&self, request: &LookupRequest<'_>) -> Result<TransportResponse, TransportError>;
}

/// Blocking `reqwest` transport.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl ReqwestTransport {
    pub fn new() -> crate::error::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| crate::error::SwiftDbError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self { http })
    }
}

#[cfg(feature = "fetch")]
impl LookupTransport for ReqwestTransport {
    fn get(&self, request: &LookupRequest<'_>) -> Result<TransportResponse, TransportError> {
        let classify = |e: reqwest::Error| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Network(e.to_string())
            }
        };

        let response = self
            .http
            .get(request.url)
            .query(request.query)
            .header("x-api-key", request.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(request.timeout)
            .send()
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(classify)?;
        Ok(TransportResponse { status, body })
    }
}
