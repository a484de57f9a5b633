// crates/swiftdb-core/src/raw.rs
//! Raw source shapes, exactly as they appear in the static JSON files.
//!
//! Dataset revisions disagree on field names. Every supported shape is one
//! variant of [`BranchRaw`]; the loader resolves the variant once and hands
//! the canonical [`crate::model::BranchRecord`] to everything else.

use serde::Deserialize;
use std::collections::BTreeMap;

/// ISO2 code → display name, as stored in `country-names.json`.
pub type CountryNamesRaw = BTreeMap<String, String>;

/// One row of `swift-data.json`, in any of the known revisions.
///
/// Variant order matters: serde tries them top to bottom and each variant is
/// keyed by the bank field that only it carries.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BranchRaw {
    Combined(CombinedRaw),
    Split(SplitRaw),
    Legacy(LegacyRaw),
}

/// Bank and branch folded into one string, e.g. `"CITIBANK N.A. - NEW YORK"`.
#[derive(Debug, Clone, Deserialize)]
pub struct CombinedRaw {
    #[serde(alias = "country_code")]
    pub country_iso_code2: String,
    pub bank_name_with_branch: String,
    pub city: String,
    #[serde(alias = "swift_code")]
    pub bic: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Bank identity and branch in separate fields.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitRaw {
    #[serde(alias = "country_iso_code2")]
    pub country_code: String,
    #[serde(rename = "bankId", default)]
    pub bank_id: Option<String>,
    #[serde(rename = "bankName")]
    pub bank_name: String,
    #[serde(default)]
    pub branch: Option<String>,
    pub city: String,
    #[serde(alias = "bic")]
    pub swift_code: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Oldest revision: a lowercase `bankname` that may still embed the branch.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRaw {
    #[serde(alias = "country_iso_code2")]
    pub country_code: String,
    pub bankname: String,
    pub city: String,
    #[serde(alias = "bic")]
    pub swift_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_revision() {
        let combined: BranchRaw = serde_json::from_str(
            r#"{"country_iso_code2":"US","bank_name_with_branch":"CITIBANK N.A. - NEW YORK","city":"NEW YORK","bic":"CITIUS33"}"#,
        )
        .unwrap();
        assert!(matches!(combined, BranchRaw::Combined(_)));

        let split: BranchRaw = serde_json::from_str(
            r#"{"country_code":"DE","bankId":"DEUT","bankName":"Deutsche Bank","branch":null,"city":"Frankfurt","swift_code":"DEUTDEFF"}"#,
        )
        .unwrap();
        assert!(matches!(split, BranchRaw::Split(ref s) if s.bank_id.as_deref() == Some("DEUT")));

        let legacy: BranchRaw = serde_json::from_str(
            r#"{"country_code":"FR","bankname":"BNP PARIBAS","city":"PARIS","swift_code":"BNPAFRPP"}"#,
        )
        .unwrap();
        assert!(matches!(legacy, BranchRaw::Legacy(_)));
    }

    #[test]
    fn null_required_field_is_rejected() {
        let res: Result<BranchRaw, _> = serde_json::from_str(
            r#"{"country_iso_code2":"US","bank_name_with_branch":null,"city":"X","bic":"CITIUS33"}"#,
        );
        assert!(res.is_err());
    }
}
