// crates/swiftdb-core/src/text.rs
//! Text matching and ordering helpers shared by the resolver.
//!
//! Filters compare case-insensitively; only the sort order also folds accents.

use std::cmp::Ordering;

/// Convert a string into a folded key used for sort order.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use swiftdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive equality. Accents are significant: `ZÜRICH` and
/// `ZURICH` are different cities.
///
/// ```rust
/// use swiftdb_core::text::eq_ignore_case;
///
/// assert!(eq_ignore_case("MÜNCHEN", "München"));
/// assert!(!eq_ignore_case("MÜNCHEN", "munchen"));
/// ```
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive prefix test. Accents are significant here too.
///
/// An empty `prefix` matches everything; callers that treat an empty filter
/// as "no selection" must check for it first.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Ordering used for every derived list (countries, banks, cities).
///
/// Compares folded keys first so `"bank of x"` and `"Bank of Y"` interleave
/// the way a human reader expects, then falls back to the raw strings so the
/// order stays total.
pub fn display_cmp(a: &str, b: &str) -> Ordering {
    fold_key(a).cmp(&fold_key(b)).then_with(|| a.cmp(b))
}
