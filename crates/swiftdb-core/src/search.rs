// crates/swiftdb-core/src/search.rs
use crate::common::DbStats;
use crate::model::{Bank, Branch, BranchRecord, Country, Dataset};
use crate::text::{display_cmp, eq_ignore_case};
use crate::traits::SwiftSearch;
use std::collections::HashSet;

impl Dataset {
    /// Turns a stored record into its display form.
    pub fn to_branch(&self, record: &BranchRecord) -> Branch {
        let rule = &self.split_rule;
        let bank_name = record.bank.bank_name(rule).to_string();
        let address = record
            .address
            .clone()
            .unwrap_or_else(|| format!("{bank_name}, {}", record.city));

        Branch {
            swift_code: record.swift_code.clone(),
            branch_label: record.bank.branch_label(rule),
            city: record.city.clone(),
            country_code: record.country_code.clone(),
            country_name: self.country_name(&record.country_code).to_string(),
            address,
            bank_name,
        }
    }

    fn in_country<'a>(&'a self, country_code: &'a str) -> impl Iterator<Item = &'a BranchRecord> {
        self.branches
            .iter()
            .filter(move |r| r.country_code.eq_ignore_ascii_case(country_code))
    }

    fn of_bank<'a>(
        &'a self,
        country_code: &'a str,
        bank: &'a str,
    ) -> impl Iterator<Item = &'a BranchRecord> {
        self.in_country(country_code)
            .filter(move |r| r.bank.matches_bank(bank))
    }
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl SwiftSearch for Dataset {
    fn stats(&self) -> DbStats {
        Dataset::stats(self)
    }

    fn countries(&self) -> Vec<Country> {
        let mut seen = HashSet::new();
        let mut out: Vec<Country> = self
            .branches
            .iter()
            .filter(|r| seen.insert(r.country_code.as_str()))
            .map(|r| Country {
                code: r.country_code.clone(),
                name: self.country_name(&r.country_code).to_string(),
            })
            .collect();
        out.sort_by(|a, b| display_cmp(&a.name, &b.name).then_with(|| a.code.cmp(&b.code)));
        out
    }

    fn banks_for_country(&self, country_code: &str) -> Vec<Bank> {
        let country_code = country_code.trim();
        if blank(country_code) {
            return Vec::new();
        }

        let rule = &self.split_rule;
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for r in self.in_country(country_code) {
            let identifier = r.bank.identifier(rule);
            if seen.insert(identifier) {
                out.push(Bank {
                    identifier: identifier.to_string(),
                    name: r.bank.bank_name(rule).to_string(),
                    country_code: r.country_code.clone(),
                });
            }
        }
        out.sort_by(|a, b| {
            display_cmp(&a.name, &b.name).then_with(|| a.identifier.cmp(&b.identifier))
        });
        out
    }

    fn cities_for_bank(&self, country_code: &str, bank: &str) -> Vec<String> {
        let (country_code, bank) = (country_code.trim(), bank.trim());
        if blank(country_code) || blank(bank) {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut out: Vec<String> = self
            .of_bank(country_code, bank)
            .filter(|r| seen.insert(r.city.as_str()))
            .map(|r| r.city.clone())
            .collect();
        out.sort_by(|a, b| display_cmp(a, b));
        out
    }

    fn branches_for_city(&self, country_code: &str, bank: &str, city: &str) -> Vec<Branch> {
        let (country_code, bank, city) = (country_code.trim(), bank.trim(), city.trim());
        if blank(country_code) || blank(bank) || blank(city) {
            return Vec::new();
        }

        self.of_bank(country_code, bank)
            .filter(|r| eq_ignore_case(&r.city, city))
            .map(|r| self.to_branch(r))
            .collect()
    }

    fn branches_for_bank(&self, country_code: &str, bank: &str) -> Vec<Branch> {
        let (country_code, bank) = (country_code.trim(), bank.trim());
        if blank(country_code) || blank(bank) {
            return Vec::new();
        }

        let mut out: Vec<Branch> = self
            .of_bank(country_code, bank)
            .map(|r| self.to_branch(r))
            .collect();
        // Stable: keeps source order inside a city.
        out.sort_by(|a, b| display_cmp(&a.city, &b.city));
        out
    }

    fn find_branch_by_code(&self, code: &str) -> Option<Branch> {
        if blank(code) {
            return None;
        }
        self.record_by_code(code).map(|r| self.to_branch(r))
    }
}
