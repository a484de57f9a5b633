// crates/swiftdb-core/src/code.rs
//! SWIFT/BIC code shape.
//!
//! A code is 8 or 11 characters of `[A-Z0-9]` after uppercasing:
//!
//! | positions | meaning       |
//! |-----------|---------------|
//! | 1–4       | bank code     |
//! | 5–6       | country code  |
//! | 7–8       | location code |
//! | 9–11      | branch code (optional) |

use crate::error::{Result, SwiftDbError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SHORT_LEN: usize = 8;
pub const LONG_LEN: usize = 11;

/// Branch code used by 11-character codes that point at the head office.
pub const PRIMARY_OFFICE_BRANCH: &str = "XXX";

/// Returns `true` if `code` has a valid SWIFT shape once trimmed and uppercased.
///
/// ```rust
/// use swiftdb_core::code::is_valid_swift_code;
///
/// assert!(is_valid_swift_code("CHASUS33"));
/// assert!(is_valid_swift_code("chasus33arp"));
/// assert!(!is_valid_swift_code("CHASUS3"));
/// assert!(!is_valid_swift_code("chasus33!"));
/// ```
pub fn is_valid_swift_code(code: &str) -> bool {
    let code = code.trim();
    matches!(code.len(), SHORT_LEN | LONG_LEN) && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// A validated, uppercase SWIFT/BIC code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SwiftCode(String);

impl SwiftCode {
    /// Trims, uppercases and validates `input`.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_ascii_uppercase();
        if is_valid_swift_code(&normalized) {
            Ok(Self(normalized))
        } else {
            Err(SwiftDbError::InvalidCode(format!(
                "{input:?} must be 8 or 11 characters of A-Z and 0-9"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        &self.0[0..4]
    }

    pub fn country_code(&self) -> &str {
        &self.0[4..6]
    }

    pub fn location_code(&self) -> &str {
        &self.0[6..8]
    }

    /// The trailing three characters of an 11-character code.
    pub fn branch_code(&self) -> Option<&str> {
        (self.0.len() == LONG_LEN).then(|| &self.0[8..LONG_LEN])
    }

    /// 8-character codes and `XXX` branches both designate the primary office.
    pub fn is_primary_office(&self) -> bool {
        self.branch_code()
            .map_or(true, |b| b == PRIMARY_OFFICE_BRANCH)
    }
}

impl fmt::Display for SwiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SwiftCode {
    type Err = SwiftDbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SwiftCode {
    type Error = SwiftDbError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<SwiftCode> for String {
    fn from(code: SwiftCode) -> Self {
        code.0
    }
}

impl AsRef<str> for SwiftCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_and_eleven_characters() {
        assert!(is_valid_swift_code("CHASUS33"));
        assert!(is_valid_swift_code("CHASUS33ARP"));
    }

    #[test]
    fn rejects_wrong_length_and_symbols() {
        assert!(!is_valid_swift_code("CHASUS3"));
        assert!(!is_valid_swift_code("chasus33!"));
        assert!(!is_valid_swift_code("CHASUS33A"));
        assert!(!is_valid_swift_code("CHASUS33AR"));
        assert!(!is_valid_swift_code(""));
        assert!(!is_valid_swift_code("CHASUS33ÄR"));
    }

    #[test]
    fn parse_normalizes_and_splits_parts() {
        let code = SwiftCode::parse(" deutdeffxxx ").unwrap();
        assert_eq!(code.as_str(), "DEUTDEFFXXX");
        assert_eq!(code.bank_code(), "DEUT");
        assert_eq!(code.country_code(), "DE");
        assert_eq!(code.location_code(), "FF");
        assert_eq!(code.branch_code(), Some("XXX"));
        assert!(code.is_primary_office());
    }

    #[test]
    fn short_code_has_no_branch() {
        let code: SwiftCode = "BOFAUS3N".parse().unwrap();
        assert_eq!(code.branch_code(), None);
        assert!(code.is_primary_office());

        let branch = SwiftCode::parse("CHASUS33ARP").unwrap();
        assert!(!branch.is_primary_office());
    }

    #[test]
    fn parse_rejects_bad_input() {
        let err = SwiftCode::parse("CHASUS3").unwrap_err();
        assert!(matches!(err, SwiftDbError::InvalidCode(_)));
    }
}
