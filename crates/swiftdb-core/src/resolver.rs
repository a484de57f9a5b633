// crates/swiftdb-core/src/resolver.rs
use crate::error::{Result, SwiftDbError};
use crate::loader::RecordStore;
use crate::model::{Bank, Branch, Country};
use crate::traits::SwiftSearch;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Query facade used by the "Find" flow.
///
/// Pulls the dataset from a shared [`RecordStore`] and forwards to the
/// [`SwiftSearch`] queries. Load failures surface as `Err`; an empty `Vec`
/// or `None` always means "no match".
///
/// The country list and the per-country bank lists are memoized. Both are
/// pure functions of the immutable dataset, so the memo never goes stale.
#[derive(Debug)]
pub struct Resolver {
    store: Arc<RecordStore>,
    countries: OnceCell<Arc<Vec<Country>>>,
    banks: RwLock<HashMap<String, Arc<Vec<Bank>>>>,
}

impl Resolver {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            countries: OnceCell::new(),
            banks: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn list_countries(&self) -> Result<Arc<Vec<Country>>> {
        self.countries
            .get_or_try_init(|| Ok::<_, SwiftDbError>(Arc::new(self.store.load()?.countries())))
            .cloned()
    }

    pub fn list_banks(&self, country_code: &str) -> Result<Arc<Vec<Bank>>> {
        let key = country_code.trim().to_ascii_uppercase();
        if key.is_empty() {
            return Ok(Arc::new(Vec::new()));
        }

        if let Some(hit) = self.read_banks(&key) {
            return Ok(hit);
        }

        let banks = Arc::new(self.store.load()?.banks_for_country(&key));
        match self.banks.write() {
            Ok(mut memo) => Ok(Arc::clone(memo.entry(key).or_insert(banks))),
            // A poisoned memo only costs the cache; the answer is still right.
            Err(_) => Ok(banks),
        }
    }

    pub fn list_cities(&self, country_code: &str, bank: &str) -> Result<Vec<String>> {
        if country_code.trim().is_empty() || bank.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.load()?.cities_for_bank(country_code, bank))
    }

    pub fn list_branches(&self, country_code: &str, bank: &str, city: &str) -> Result<Vec<Branch>> {
        if country_code.trim().is_empty() || bank.trim().is_empty() || city.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.load()?.branches_for_city(country_code, bank, city))
    }

    pub fn list_bank_branches(&self, country_code: &str, bank: &str) -> Result<Vec<Branch>> {
        if country_code.trim().is_empty() || bank.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.store.load()?.branches_for_bank(country_code, bank))
    }

    pub fn find_branch_by_code(&self, code: &str) -> Result<Option<Branch>> {
        if code.trim().is_empty() {
            return Ok(None);
        }
        Ok(self.store.load()?.find_branch_by_code(code))
    }

    fn read_banks(&self, key: &str) -> Option<Arc<Vec<Bank>>> {
        self.banks.read().ok()?.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::DataSource;

    fn resolver() -> Resolver {
        Resolver::new(Arc::new(RecordStore::new(DataSource::Inline {
            country_names: r#"{"US":"United States"}"#.into(),
            branches: r#"[
                {"country_iso_code2":"US","bank_name_with_branch":"CITIBANK N.A. - NEW YORK","city":"NEW YORK","bic":"CITIUS33"},
                {"country_iso_code2":"US","bank_name_with_branch":"CITIBANK N.A. - MIAMI","city":"MIAMI","bic":"CITIUS3MMIA"}
            ]"#
            .into(),
        })))
    }

    #[test]
    fn blank_filters_do_not_touch_the_store() {
        let r = resolver();
        assert!(r.list_banks("").unwrap().is_empty());
        assert!(r.list_cities("US", "").unwrap().is_empty());
        assert!(r.list_branches("", "CITIBANK", "MIAMI").unwrap().is_empty());
        assert!(r.find_branch_by_code(" ").unwrap().is_none());
        assert!(!r.store().is_loaded());
    }

    #[test]
    fn memoized_lists_are_shared() {
        let r = resolver();
        let a = r.list_banks("us").unwrap();
        let b = r.list_banks("US").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a[0].name, "CITIBANK N.A.");

        let c1 = r.list_countries().unwrap();
        let c2 = r.list_countries().unwrap();
        assert!(Arc::ptr_eq(&c1, &c2));
    }

    #[test]
    fn unavailable_data_propagates() {
        let r = Resolver::new(Arc::new(RecordStore::new(DataSource::dir("/missing"))));
        assert!(r.list_countries().unwrap_err().is_data_unavailable());
        assert!(r.list_branches("US", "X", "Y").is_err());
        assert!(r.find_branch_by_code("CITIUS33").is_err());
    }
}
