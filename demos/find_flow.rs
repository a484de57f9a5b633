//! "Find" flow for swiftdb-rs
//!
//! Walks the country → bank → city drill-down over the sample dataset
//! and prints the matching branches.
//!
//! Run with `RUST_LOG=debug cargo run --example find_flow` to see the
//! store's load logging.

use std::sync::Arc;
use swiftdb_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== swiftdb-rs Find Flow ===\n");

    let store = Arc::new(RecordStore::new(DataSource::from_env()));
    let resolver = Resolver::new(Arc::clone(&store));

    // Step 1: countries
    let countries = resolver.list_countries()?;
    println!("--- Countries ({}) ---", countries.len());
    for country in countries.iter() {
        println!("  {} ({})", country.name, country.code);
    }
    println!();

    // Step 2: banks of one country
    let country = "US";
    let banks = resolver.list_banks(country)?;
    println!("--- Banks in {country} ({}) ---", banks.len());
    for bank in banks.iter() {
        println!("  {}", bank.name);
    }
    println!();

    // Step 3: cities of one bank
    let Some(bank) = banks.first() else {
        println!("No banks found in {country}.");
        return Ok(());
    };
    let cities = resolver.list_cities(country, &bank.name)?;
    println!("--- Cities for {} ---", bank.name);
    for city in &cities {
        println!("  {city}");
    }
    println!();

    // Step 4: branches
    for city in &cities {
        for branch in resolver.list_branches(country, &bank.name, city)? {
            println!(
                "  {:<11}  {} - {}  ({}, {})",
                branch.swift_code, branch.bank_name, branch.branch_label, branch.address, branch.country_name
            );
        }
    }
    println!();

    // Step 5: direct code lookup against the local dataset
    let code = "chasus33arp";
    match resolver.find_branch_by_code(code)? {
        Some(branch) => println!("{code} → {} ({})", branch.bank_name, branch.city),
        None => println!("{code} is not in the local dataset"),
    }

    let stats = store.load()?.stats();
    println!(
        "\nDataset: {} countries, {} banks, {} branches",
        stats.countries, stats.banks, stats.branches
    );
    Ok(())
}
