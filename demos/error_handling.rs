//! Error handling example for swiftdb-rs
//!
//! Shows how dataset failures, misses and configuration faults stay
//! distinguishable.

use std::sync::Arc;
use swiftdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== swiftdb-rs Error Handling Example ===\n");

    // Example 1: an unavailable dataset is an error, not an empty list
    println!("--- Example 1: Loading from a missing directory ---");
    let broken = Resolver::new(Arc::new(RecordStore::new(DataSource::dir("/no/such/dir"))));
    match broken.list_countries() {
        Ok(list) => println!("  unexpected: {} countries", list.len()),
        Err(e) => println!("✗ {e} (data unavailable: {})", e.is_data_unavailable()),
    }
    println!();

    // Example 2: misses are ordinary results
    println!("--- Example 2: Codes missing from the dataset ---");
    let resolver = Resolver::new(Arc::new(RecordStore::new(DataSource::from_env())));
    for code in ["XXXXXX99", "", "BOFAUS3N"] {
        match resolver.find_branch_by_code(code)? {
            Some(branch) => println!("  Found: {code} → {}", branch.bank_name),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 3: malformed codes
    println!("--- Example 3: Parsing codes ---");
    for code in ["DEUTDEFF", "DEUTDEFF500", "DEUT-DE", "deutdeff"] {
        match SwiftCode::parse(code) {
            Ok(c) => println!("  {code:<12} ok  bank={} country={} branch={:?}", c.bank_code(), c.country_code(), c.branch_code()),
            Err(e) => println!("  {code:<12} {e}"),
        }
    }
    println!();

    // Example 4: a missing API key is a configuration fault
    println!("--- Example 4: Lookup configuration ---");
    match LookupConfig::from_lookup(|_| None) {
        Ok(_) => println!("  unexpected: configured without a key"),
        Err(e) => println!("✗ {e}"),
    }

    Ok(())
}
