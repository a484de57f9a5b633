// crates/swiftdb-core/src/model/convert.rs
use crate::code::is_valid_swift_code;
use crate::error::{Result, SwiftDbError};
use crate::model::record::{BankField, BranchRecord, Dataset};
use crate::raw::{BranchRaw, CountryNamesRaw};
use std::collections::BTreeMap;

/// **Normalizer:** any raw revision -> canonical record.
pub fn from_raw(raw: BranchRaw) -> BranchRecord {
    let (country_code, swift_code, city, bank, address) = match raw {
        BranchRaw::Combined(r) => (
            r.country_iso_code2,
            r.bic,
            r.city,
            BankField::Combined(r.bank_name_with_branch),
            r.address,
        ),
        BranchRaw::Split(r) => (
            r.country_code,
            r.swift_code,
            r.city,
            BankField::Split {
                id: r.bank_id,
                name: r.bank_name,
                branch: r.branch,
            },
            r.address,
        ),
        BranchRaw::Legacy(r) => (
            r.country_code,
            r.swift_code,
            r.city,
            BankField::Combined(r.bankname),
            None,
        ),
    };

    let swift_code = swift_code.trim().to_ascii_uppercase();
    if !is_valid_swift_code(&swift_code) {
        tracing::warn!(%swift_code, "record carries a malformed SWIFT code");
    }

    BranchRecord {
        swift_code,
        country_code: country_code.trim().to_ascii_uppercase(),
        city: city.trim().to_string(),
        bank,
        address: address
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty()),
    }
}

/// Parses both static sources and builds the dataset.
///
/// Rows are decoded one by one so a failure names the offending index.
/// Any failure rejects the whole dataset.
pub fn dataset_from_slices(country_names: &[u8], branches: &[u8]) -> Result<Dataset> {
    // 1. Country names
    let names: CountryNamesRaw = serde_json::from_slice(country_names)
        .map_err(|e| SwiftDbError::DataUnavailable(format!("country names: {e}")))?;

    // 2. Branch rows (shape-checked individually)
    let rows: Vec<serde_json::Value> = serde_json::from_slice(branches)
        .map_err(|e| SwiftDbError::DataUnavailable(format!("branch records: {e}")))?;

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.into_iter().enumerate() {
        let raw: BranchRaw = serde_json::from_value(row).map_err(|e| {
            SwiftDbError::DataUnavailable(format!(
                "branch record #{idx} matches no known shape: {e}"
            ))
        })?;
        records.push(from_raw(raw));
    }

    // 3. Normalize name keys the same way as record country codes
    let names: BTreeMap<String, String> = names
        .into_iter()
        .map(|(code, name)| (code.trim().to_ascii_uppercase(), name))
        .collect();

    tracing::debug!(
        branches = records.len(),
        countries = names.len(),
        "dataset parsed"
    );
    Ok(Dataset::new(records, names))
}

impl Dataset {
    /// Builds a dataset from the raw bytes of `country-names.json` and
    /// `swift-data.json`.
    pub fn from_json_slices(country_names: &[u8], branches: &[u8]) -> Result<Self> {
        dataset_from_slices(country_names, branches)
    }
}
