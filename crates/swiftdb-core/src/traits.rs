// crates/swiftdb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{Bank, Branch, Country};

/// The drill-down queries: country → bank → city → branch.
///
/// Every method is a pure function of the underlying records. A blank filter
/// argument yields an empty result, never an error, so cascading selectors
/// can call straight through with whatever the user picked so far.
pub trait SwiftSearch {
    fn stats(&self) -> DbStats;

    /// Distinct country codes present in the records, sorted by display name.
    ///
    /// # Example
    ///
    /// ```
    /// use swiftdb_core::{Dataset, SwiftSearch};
    ///
    /// let ds = Dataset::from_json_slices(
    ///     br#"{"US":"United States","DE":"Germany"}"#,
    ///     br#"[{"country_iso_code2":"US","bank_name_with_branch":"CITIBANK N.A.","city":"NEW YORK","bic":"CITIUS33"},
    ///          {"country_iso_code2":"DE","bank_name_with_branch":"DEUTSCHE BANK AG","city":"FRANKFURT","bic":"DEUTDEFF"}]"#,
    /// ).unwrap();
    ///
    /// let names: Vec<_> = ds.countries().into_iter().map(|c| c.name).collect();
    /// assert_eq!(names, vec!["Germany", "United States"]);
    /// ```
    fn countries(&self) -> Vec<Country>;

    /// Distinct banks of one country, sorted by name.
    fn banks_for_country(&self, country_code: &str) -> Vec<Bank>;

    /// Distinct cities where `bank` (case-insensitive prefix) has a branch.
    fn cities_for_bank(&self, country_code: &str, bank: &str) -> Vec<String>;

    /// Display-ready branches matching all three filters, in source order.
    fn branches_for_city(&self, country_code: &str, bank: &str, city: &str) -> Vec<Branch>;

    /// Every branch of one bank in one country, sorted by city.
    fn branches_for_bank(&self, country_code: &str, bank: &str) -> Vec<Branch>;

    /// Exact, case-insensitive SWIFT code match. `None` is a normal outcome.
    fn find_branch_by_code(&self, code: &str) -> Option<Branch>;
}
