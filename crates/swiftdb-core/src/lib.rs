// crates/swiftdb-core/src/lib.rs

pub mod code; // SWIFT/BIC shape checks
pub mod common;
pub mod error;
pub mod loader; // The record store
pub mod lookup; // Remote lookup client
pub mod model;
pub mod resolver;
pub mod search; // Query logic over the dataset
pub mod text;
pub mod traits;
// Raw source shapes (only the loader needs them)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::code::{is_valid_swift_code, SwiftCode};
pub use crate::common::DbStats;
pub use crate::error::{Result, SwiftDbError};
pub use crate::loader::{DataSource, RecordStore};
pub use crate::lookup::{ApiBank, LookupClient, LookupConfig, LookupOutcome, UpstreamFailure};
pub use crate::model::{Bank, BankField, Branch, BranchRecord, Country, Dataset, SplitRule};
pub use crate::resolver::Resolver;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::SwiftSearch;

#[cfg(feature = "fetch")]
pub use crate::lookup::swift_lookup;

pub mod prelude {
    //! Common types and traits for demos and downstream callers.
    pub use crate::{
        is_valid_swift_code, ApiBank, Bank, Branch, Country, DataSource, Dataset, LookupClient,
        LookupConfig, LookupOutcome, RecordStore, Resolver, Result, SwiftCode,
        SwiftDbError, SwiftSearch,
    };
}
