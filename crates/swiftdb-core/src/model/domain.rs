// crates/swiftdb-core/src/model/domain.rs
use serde::{Deserialize, Serialize};

/// A country that has at least one branch in the dataset.
///
/// Derived from the branch collection; there is no separate country table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166 alpha-2 code, uppercase.
    pub code: String,
    /// Display name, or the code itself when the name mapping has no entry.
    pub name: String,
}

/// A distinct bank inside one country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Explicit bank id when the source carries one, otherwise the bank name.
    pub identifier: String,
    pub name: String,
    pub country_code: String,
}

/// One bank/location combination and its SWIFT code, ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub swift_code: String,
    pub bank_name: String,
    /// `"Main Branch"` when the source names no branch.
    pub branch_label: String,
    pub city: String,
    pub country_code: String,
    pub country_name: String,
    /// Source address when present, otherwise `"{bank_name}, {city}"`.
    pub address: String,
}
