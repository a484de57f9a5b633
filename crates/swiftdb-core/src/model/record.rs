// crates/swiftdb-core/src/model/record.rs
use crate::common::DbStats;
use crate::text::{eq_ignore_case, starts_with_ignore_case};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Branch label used when a record names no branch.
pub const MAIN_BRANCH: &str = "Main Branch";

/// Delimiters used to pull a bank name out of a combined bank/branch string.
///
/// The heuristic is lossy: a bank whose own name contains a comma or
/// `" - "` gets cut at that point and the rest ends up in the branch label.
/// Datasets with known offenders can supply their own delimiter list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SplitRule {
    delimiters: Vec<String>,
}

impl From<Vec<String>> for SplitRule {
    fn from(delimiters: Vec<String>) -> Self {
        Self::new(delimiters)
    }
}

impl From<SplitRule> for Vec<String> {
    fn from(rule: SplitRule) -> Self {
        rule.delimiters
    }
}

impl Default for SplitRule {
    fn default() -> Self {
        Self {
            delimiters: vec![" - ".to_string(), ",".to_string()],
        }
    }
}

impl SplitRule {
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delimiters: delimiters
                .into_iter()
                .map(Into::into)
                .filter(|d: &String| !d.is_empty())
                .collect(),
        }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Cuts `s` at every delimiter occurrence, leftmost match first.
    /// Empty delimiters never match.
    fn segments<'a>(&self, s: &'a str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut rest = s;
        loop {
            let next = self
                .delimiters
                .iter()
                .filter(|d| !d.is_empty())
                .filter_map(|d| rest.find(d.as_str()).map(|at| (at, d.len())))
                .min_by_key(|&(at, _)| at);
            match next {
                Some((at, len)) => {
                    out.push(&rest[..at]);
                    rest = &rest[at + len..];
                }
                None => {
                    out.push(rest);
                    return out;
                }
            }
        }
    }

    /// Splits a combined field into `(bank name, branch remainder)`.
    ///
    /// The bank name is the trimmed first segment (the whole field if that
    /// segment is blank). The remainder re-joins the other non-blank segments
    /// with `", "`; `None` when there are none.
    pub fn split<'a>(&self, combined: &'a str) -> (&'a str, Option<String>) {
        let segments = self.segments(combined);
        let head = segments[0].trim();
        let bank = if head.is_empty() { combined.trim() } else { head };

        let rest: Vec<&str> = segments[1..]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        let branch = (!rest.is_empty()).then(|| rest.join(", "));
        (bank, branch)
    }
}

/// The bank part of a record, in whichever form the source provided it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankField {
    /// Bank and branch in one string; interpreted with a [`SplitRule`].
    Combined(String),
    /// Bank name, optional id and optional branch as separate fields.
    Split {
        id: Option<String>,
        name: String,
        branch: Option<String>,
    },
}

impl BankField {
    pub fn bank_name<'a>(&'a self, rule: &SplitRule) -> &'a str {
        match self {
            BankField::Combined(raw) => rule.split(raw).0,
            BankField::Split { name, .. } => name.trim(),
        }
    }

    /// Branch label, [`MAIN_BRANCH`] if none is given.
    pub fn branch_label(&self, rule: &SplitRule) -> String {
        let branch = match self {
            BankField::Combined(raw) => rule.split(raw).1,
            BankField::Split { branch, .. } => branch
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(str::to_string),
        };
        branch.unwrap_or_else(|| MAIN_BRANCH.to_string())
    }

    /// Explicit id, or the bank name when the source has none.
    pub fn identifier<'a>(&'a self, rule: &SplitRule) -> &'a str {
        match self {
            BankField::Split { id: Some(id), .. } if !id.trim().is_empty() => id.trim(),
            _ => self.bank_name(rule),
        }
    }

    /// Case-insensitive prefix match of a selected bank against this record.
    ///
    /// Combined fields are matched on the raw string; split fields on the
    /// name, or on the explicit id when the caller passes one.
    pub fn matches_bank(&self, bank: &str) -> bool {
        match self {
            BankField::Combined(raw) => starts_with_ignore_case(raw, bank),
            BankField::Split { id, name, .. } => {
                starts_with_ignore_case(name, bank)
                    || id.as_deref().is_some_and(|id| eq_ignore_case(id, bank))
            }
        }
    }
}

/// A normalized branch row. All source revisions end up in this shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Uppercase, trimmed.
    pub swift_code: String,
    /// Uppercase ISO2.
    pub country_code: String,
    pub city: String,
    pub bank: BankField,
    pub address: Option<String>,
}

/// The whole in-memory dataset: normalized branches plus the country names.
///
/// Immutable once built. Held behind an `Arc` by the record store.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub(crate) branches: Vec<BranchRecord>,
    pub(crate) country_names: BTreeMap<String, String>,
    /// Uppercase SWIFT code → index into `branches`; first record wins.
    pub(crate) by_code: HashMap<String, usize>,
    pub(crate) split_rule: SplitRule,
}

impl Dataset {
    /// Builds a dataset from already-normalized records.
    pub fn new(branches: Vec<BranchRecord>, country_names: BTreeMap<String, String>) -> Self {
        let mut by_code = HashMap::with_capacity(branches.len());
        for (idx, record) in branches.iter().enumerate() {
            if by_code.contains_key(&record.swift_code) {
                tracing::warn!(
                    swift_code = %record.swift_code,
                    "duplicate SWIFT code in dataset; keeping the first record"
                );
                continue;
            }
            by_code.insert(record.swift_code.clone(), idx);
        }

        Self {
            branches,
            country_names,
            by_code,
            split_rule: SplitRule::default(),
        }
    }

    /// Replaces the bank/branch delimiter list used by every query.
    pub fn with_split_rule(mut self, rule: SplitRule) -> Self {
        self.split_rule = rule;
        self
    }

    pub fn branches(&self) -> &[BranchRecord] {
        &self.branches
    }

    pub fn country_names(&self) -> &BTreeMap<String, String> {
        &self.country_names
    }

    pub fn split_rule(&self) -> &SplitRule {
        &self.split_rule
    }

    /// Display name for an ISO2 code, falling back to the code itself.
    pub fn country_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.country_names
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }

    pub fn record_by_code(&self, code: &str) -> Option<&BranchRecord> {
        let key = code.trim().to_ascii_uppercase();
        self.by_code.get(&key).map(|&idx| &self.branches[idx])
    }

    pub fn stats(&self) -> DbStats {
        let mut countries = std::collections::HashSet::new();
        let mut banks = std::collections::HashSet::new();
        for record in &self.branches {
            countries.insert(record.country_code.as_str());
            banks.insert((
                record.country_code.as_str(),
                record.bank.identifier(&self.split_rule),
            ));
        }
        DbStats {
            countries: countries.len(),
            banks: banks.len(),
            branches: self.branches.len(),
        }
    }
}
