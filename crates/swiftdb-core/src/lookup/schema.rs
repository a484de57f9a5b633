// crates/swiftdb-core/src/lookup/schema.rs
//! Wire shape of the SWIFT lookup API.
//!
//! Nullable fields marked `deserialize_with = "Option::deserialize"` must be
//! *present* in the body (as a value or `null`); a missing key is a schema
//! failure. Only `error` may be omitted.

use crate::model::{Branch, MAIN_BRANCH};
use serde::{Deserialize, Serialize};

/// Full response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub data: Option<ApiData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiData {
    /// Informational only; any JSON number is accepted.
    pub count: serde_json::Number,
    pub banks: Vec<ApiBank>,
}

/// One bank record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBank {
    pub bank: String,
    pub city: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub branch: Option<String>,
    pub swift_code: String,
    pub country: String,
    pub country_code: String,
}

impl ApiResponse {
    /// The authoritative record: the first bank, if any.
    ///
    /// A code could match several entries; only the first one counts.
    pub fn into_first_bank(self) -> Option<ApiBank> {
        self.data.and_then(|d| d.banks.into_iter().next())
    }
}

impl ApiBank {
    /// Branch name, or `"Main Branch"` when the API returns none.
    pub fn branch_label(&self) -> &str {
        self.branch
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(MAIN_BRANCH)
    }

    /// Same display shape the resolver produces for local records.
    pub fn to_branch(&self) -> Branch {
        Branch {
            swift_code: self.swift_code.trim().to_ascii_uppercase(),
            bank_name: self.bank.clone(),
            branch_label: self.branch_label().to_string(),
            city: self.city.clone(),
            country_code: self.country_code.trim().to_ascii_uppercase(),
            country_name: self.country.clone(),
            address: format!("{}, {}", self.bank, self.city),
        }
    }
}
