// crates/swiftdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the dataset.
///
/// Returned by [`crate::Dataset::stats`]; counts reflect the normalized
/// in-memory records, so duplicate SWIFT codes are still counted as
/// branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub banks: usize,
    pub branches: usize,
}
