// crates/swiftdb-core/src/lookup/mod.rs

//! # Remote Lookup Client
//!
//! Validates one SWIFT code against the external lookup API. The "Check"
//! flow calls [`LookupClient::lookup`] for a found/not-found answer, or
//! [`LookupClient::resolve`] when it needs to tell a miss from an outage.

mod client;
pub mod schema;
pub mod transport;

#[cfg(feature = "fetch")]
pub use client::swift_lookup;
pub use client::{
    LookupClient, LookupConfig, LookupOutcome, UpstreamFailure, API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_TIMEOUT, ENDPOINT_ENV, TIMEOUT_ENV,
};
pub use schema::{ApiBank, ApiData, ApiResponse};
#[cfg(feature = "fetch")]
pub use transport::ReqwestTransport;
pub use transport::{LookupRequest, LookupTransport, TransportError, TransportResponse};
