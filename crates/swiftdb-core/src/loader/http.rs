// crates/swiftdb-core/src/loader/http.rs
#![cfg(feature = "fetch")]

use crate::error::{Result, SwiftDbError};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads one static dataset resource.
///
/// Any transport error or non-2xx status makes the dataset unavailable.
pub fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    tracing::info!(%url, "fetching dataset resource");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| SwiftDbError::DataUnavailable(format!("HTTP client: {e}")))?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .map_err(|e| SwiftDbError::DataUnavailable(format!("failed to fetch {url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SwiftDbError::DataUnavailable(format!(
            "failed to fetch {url}: HTTP {status}"
        )));
    }

    response
        .bytes()
        .map(|b| b.to_vec())
        .map_err(|e| SwiftDbError::DataUnavailable(format!("failed to read {url}: {e}")))
}
