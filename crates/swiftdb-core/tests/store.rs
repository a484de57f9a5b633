use std::fs;
use std::sync::Arc;
use swiftdb_core::loader::{BRANCHES_FILE, COUNTRY_NAMES_FILE};
use swiftdb_core::prelude::*;
use swiftdb_core::SplitRule;

const NAMES: &str = r#"{"US":"United States"}"#;
const ROWS: &str = r#"[
    {"country_iso_code2":"US","bank_name_with_branch":"FIRST / SECOND, INC - DOWNTOWN","city":"BOSTON","bic":"FRSTUS44"}
]"#;

#[test]
fn loads_from_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(COUNTRY_NAMES_FILE), NAMES).unwrap();
    fs::write(dir.path().join(BRANCHES_FILE), ROWS).unwrap();

    let store = RecordStore::new(DataSource::dir(dir.path()));
    let dataset = store.load().unwrap();
    assert_eq!(dataset.stats().branches, 1);

    // Later edits are invisible: the cache is fixed for the store's lifetime.
    fs::write(dir.path().join(BRANCHES_FILE), "[]").unwrap();
    assert_eq!(store.load().unwrap().stats().branches, 1);
}

#[test]
fn corrupt_source_is_data_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(COUNTRY_NAMES_FILE), NAMES).unwrap();
    fs::write(dir.path().join(BRANCHES_FILE), "[{\"city\": 42}]").unwrap();

    let store = RecordStore::new(DataSource::dir(dir.path()));
    let err = store.load().unwrap_err();
    assert!(matches!(err, SwiftDbError::DataUnavailable(_)));

    let resolver = Resolver::new(Arc::new(store));
    assert!(resolver.list_countries().is_err());
}

#[test]
fn missing_country_names_fail_the_load() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(BRANCHES_FILE), ROWS).unwrap();

    let store = RecordStore::new(DataSource::dir(dir.path()));
    assert!(store.load().unwrap_err().is_data_unavailable());
}

#[test]
fn split_rule_changes_bank_extraction() {
    let source = DataSource::Inline {
        country_names: NAMES.into(),
        branches: ROWS.into(),
    };

    let default = Resolver::new(Arc::new(RecordStore::new(source.clone())));
    assert_eq!(default.list_banks("US").unwrap()[0].name, "FIRST / SECOND");

    let custom = Resolver::new(Arc::new(
        RecordStore::new(source).with_split_rule(SplitRule::new([" - "])),
    ));
    let banks = custom.list_banks("US").unwrap();
    assert_eq!(banks[0].name, "FIRST / SECOND, INC");

    let branch = custom.list_branches("US", "FIRST", "BOSTON").unwrap();
    assert_eq!(branch[0].branch_label, "DOWNTOWN");
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_sources_are_accepted() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let names = dir.path().join("country-names.json.gz");
    let rows = dir.path().join("swift-data.json.gz");
    for (path, body) in [(&names, NAMES), (&rows, ROWS)] {
        let mut enc = GzEncoder::new(fs::File::create(path).unwrap(), Compression::default());
        enc.write_all(body.as_bytes()).unwrap();
        enc.finish().unwrap();
    }

    let store = RecordStore::new(DataSource::Files {
        country_names: names,
        branches: rows,
    });
    let ds = store.load().unwrap();
    assert!(ds.find_branch_by_code("frstus44").is_some());
}
