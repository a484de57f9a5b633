// crates/swiftdb-core/src/loader/mod.rs

//! # Record Store
//!
//! Handles the physical layer (files, gzip, HTTP) and hands the bytes to
//! the normalizer. The resulting [`Dataset`] is built at most once per
//! store and shared behind an `Arc` for the rest of the process.

use crate::error::{Result, SwiftDbError};
use crate::model::{Dataset, SplitRule};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod common_io;
#[cfg(feature = "fetch")]
mod http;

/// File name of the ISO2 → display name mapping.
pub const COUNTRY_NAMES_FILE: &str = "country-names.json";
/// File name of the branch records.
pub const BRANCHES_FILE: &str = "swift-data.json";
/// Overrides the default data directory.
pub const DATA_DIR_ENV: &str = "SWIFTDB_DATA_DIR";

/// Where the two static JSON resources come from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local files; `*.gz` paths are decompressed on the fly.
    Files {
        country_names: PathBuf,
        branches: PathBuf,
    },
    /// `{base_url}/country-names.json` and `{base_url}/swift-data.json`.
    #[cfg(feature = "fetch")]
    Http { base_url: String },
    /// JSON documents held in memory.
    Inline {
        country_names: String,
        branches: String,
    },
}

impl DataSource {
    /// Both standard file names inside `dir`.
    pub fn dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataSource::Files {
            country_names: dir.join(COUNTRY_NAMES_FILE),
            branches: dir.join(BRANCHES_FILE),
        }
    }

    /// `$SWIFTDB_DATA_DIR`, else the `data/` folder shipped with this crate.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::dir(dir.trim()),
            _ => Self::dir(default_data_dir()),
        }
    }

    fn fetch(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        match self {
            DataSource::Files {
                country_names,
                branches,
            } => Ok((
                common_io::read_all(country_names)?,
                common_io::read_all(branches)?,
            )),
            #[cfg(feature = "fetch")]
            DataSource::Http { base_url } => {
                let base = base_url.trim_end_matches('/');
                Ok((
                    http::fetch_bytes(&format!("{base}/{COUNTRY_NAMES_FILE}"))?,
                    http::fetch_bytes(&format!("{base}/{BRANCHES_FILE}"))?,
                ))
            }
            DataSource::Inline {
                country_names,
                branches,
            } => Ok((
                country_names.as_bytes().to_vec(),
                branches.as_bytes().to_vec(),
            )),
        }
    }
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Lazily loads and caches one [`Dataset`].
///
/// The first call to [`RecordStore::load`] fetches and parses the source;
/// concurrent first callers block on that single fill and all observe the
/// same `Arc`. A failed fill is not cached, so a later call retries.
#[derive(Debug)]
pub struct RecordStore {
    source: DataSource,
    split_rule: SplitRule,
    cache: OnceCell<Arc<Dataset>>,
}

impl RecordStore {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            split_rule: SplitRule::default(),
            cache: OnceCell::new(),
        }
    }

    /// A store that is already filled; it never touches a source.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let split_rule = dataset.split_rule().clone();
        Self {
            source: DataSource::Inline {
                country_names: "{}".into(),
                branches: "[]".into(),
            },
            split_rule,
            cache: OnceCell::with_value(Arc::new(dataset)),
        }
    }

    /// Uses `rule` instead of the default `" - "` / `","` split.
    pub fn with_split_rule(mut self, rule: SplitRule) -> Self {
        self.split_rule = rule;
        self
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Returns the cached dataset, loading it on first use.
    pub fn load(&self) -> Result<Arc<Dataset>> {
        self.fill_with(|| self.load_uncached())
    }

    /// Single-flight cache fill: concurrent first callers block on one run
    /// of `fetch`. An error leaves the cache empty.
    fn fill_with<F>(&self, fetch: F) -> Result<Arc<Dataset>>
    where
        F: FnOnce() -> Result<Dataset>,
    {
        self.cache
            .get_or_try_init(|| {
                let dataset = fetch().map_err(|e| {
                    tracing::error!(error = %e, "dataset load failed");
                    e
                })?;
                Ok::<_, SwiftDbError>(Arc::new(dataset))
            })
            .cloned()
    }

    fn load_uncached(&self) -> Result<Dataset> {
        let started = std::time::Instant::now();
        let (names, branches) = self.source.fetch()?;
        let dataset = Dataset::from_json_slices(&names, &branches)?
            .with_split_rule(self.split_rule.clone());

        let stats = dataset.stats();
        tracing::info!(
            countries = stats.countries,
            banks = stats.banks,
            branches = stats.branches,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dataset loaded"
        );
        Ok(dataset)
    }
}
