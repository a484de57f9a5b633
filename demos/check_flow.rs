//! "Check" flow for swiftdb-rs
//!
//! Validates SWIFT codes given on the command line (or a default set),
//! then asks the remote lookup service about the well-formed ones.
//!
//! Requires `APIVERSE_API_KEY`; `SWIFTDB_LOOKUP_URL` points the client at
//! another endpoint.

use swiftdb_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== swiftdb-rs Check Flow ===\n");

    let mut codes: Vec<String> = std::env::args().skip(1).collect();
    if codes.is_empty() {
        codes = vec!["CHASUS33".into(), "CHASUS33ARP".into(), "CHASUS3".into(), "chasus33!".into()];
    }

    // Configuration faults stop here, before any code is checked.
    let client = LookupClient::from_env()?;

    for code in &codes {
        if !is_valid_swift_code(code) {
            println!("✗ {code}: SWIFT code must be 8 or 11 characters of A-Z and 0-9");
            continue;
        }

        match client.resolve(code) {
            LookupOutcome::Found(bank) => {
                println!("✓ {}: valid and found", bank.swift_code.to_uppercase());
                println!("  Bank:    {} - {}", bank.bank, bank.branch_label());
                println!("  City:    {}", bank.city);
                println!("  Country: {} ({})", bank.country, bank.country_code);
            }
            LookupOutcome::NotFound => println!("? {code}: valid format, but not found"),
            LookupOutcome::TransientError(e) => println!("! {code}: lookup service problem ({e})"),
            LookupOutcome::ConfigError(e) => println!("! {code}: configuration problem ({e})"),
        }
    }

    Ok(())
}
