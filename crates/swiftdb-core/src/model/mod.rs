// crates/swiftdb-core/src/model/mod.rs
pub mod convert;
pub mod domain;
pub mod record;

pub use domain::{Bank, Branch, Country};
pub use record::{BankField, BranchRecord, Dataset, SplitRule, MAIN_BRANCH};
