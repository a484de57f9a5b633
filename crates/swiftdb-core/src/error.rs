// crates/swiftdb-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the record store, the resolver and the lookup
/// configuration.
///
/// Remote lookup misses and upstream failures are *not* represented here:
/// they are carried by [`crate::lookup::LookupOutcome`] so callers can tell
/// "no such code" apart from "system broken" without matching on errors.
#[derive(Debug, Error)]
pub enum SwiftDbError {
    /// The static dataset could not be fetched, read or parsed.
    /// Fatal for every resolver query; no partial dataset is ever kept.
    #[error("dataset unavailable: {0}")]
    DataUnavailable(String),

    /// A required setting (the lookup API key) is missing or malformed.
    #[error("configuration fault: {0}")]
    Configuration(String),

    /// Input that does not have the shape of a SWIFT/BIC code.
    #[error("invalid SWIFT code: {0}")]
    InvalidCode(String),
}

impl SwiftDbError {
    /// True for failures that make the dataset unusable.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, SwiftDbError::DataUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, SwiftDbError>;
