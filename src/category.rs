//! Error categories and the code → category derivation rule.
//!
//! Chromium groups its network error codes into blocks of one hundred. The
//! hundreds digit of a code's magnitude selects the category:
//!
//! | Bucket | Category |
//! |--------|----------|
//! | 0–99 | `system` |
//! | 100–199 | `connection` |
//! | 200–299 | `certificate` |
//! | 300–399 | `http` |
//! | 400–499 | `cache` |
//! | 500–599 | `unknown` |
//! | 600–699 | `ftp` |
//! | 700–799 | `certificate-manager` |
//! | 800–899 | `dns` |
//!
//! Any other bucket classifies as `unknown`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the nine fixed error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorType {
    System,
    Connection,
    Certificate,
    Http,
    Cache,
    Unknown,
    Ftp,
    CertificateManager,
    Dns,
}

/// Bucket → category table. Closed: buckets not listed here are `Unknown`.
const BUCKETS: [(u32, ErrorType); 9] = [
    (0, ErrorType::System),
    (100, ErrorType::Connection),
    (200, ErrorType::Certificate),
    (300, ErrorType::Http),
    (400, ErrorType::Cache),
    (500, ErrorType::Unknown),
    (600, ErrorType::Ftp),
    (700, ErrorType::CertificateManager),
    (800, ErrorType::Dns),
];

impl ErrorType {
    /// All categories, in bucket order.
    pub const ALL: [ErrorType; 9] = [
        ErrorType::System,
        ErrorType::Connection,
        ErrorType::Certificate,
        ErrorType::Http,
        ErrorType::Cache,
        ErrorType::Unknown,
        ErrorType::Ftp,
        ErrorType::CertificateManager,
        ErrorType::Dns,
    ];

    /// Derive the category of a numeric error code.
    ///
    /// `-324` → `Http`, `-1` → `System`, `-905` → `Unknown`.
    pub fn from_code(code: i32) -> ErrorType {
        let bucket = bucket(code);
        BUCKETS
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, t)| *t)
            .unwrap_or(ErrorType::Unknown)
    }

    /// The category's wire string (e.g. `"certificate-manager"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorType::System => "system",
            ErrorType::Connection => "connection",
            ErrorType::Certificate => "certificate",
            ErrorType::Http => "http",
            ErrorType::Cache => "cache",
            ErrorType::Unknown => "unknown",
            ErrorType::Ftp => "ftp",
            ErrorType::CertificateManager => "certificate-manager",
            ErrorType::Dns => "dns",
        }
    }
}

/// Round the magnitude of `code` down to its hundreds bucket.
///
/// Uses the unsigned magnitude, so `i32::MIN` is well defined.
pub fn bucket(code: i32) -> u32 {
    code.unsigned_abs() / 100 * 100
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ErrorType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ErrorType::ALL.iter().map(|t| t.as_str()).collect();
                Error::Dataset(format!(
                    "unknown error type '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// The category-predicate contract shared by records, variants and error values.
///
/// Exactly one predicate returns `true` for any implementor: the one matching
/// [`error_type`](Categorized::error_type).
pub trait Categorized {
    /// The category this value belongs to.
    fn error_type(&self) -> ErrorType;

    fn is_category(&self, category: ErrorType) -> bool {
        self.error_type() == category
    }

    fn is_system_error(&self) -> bool {
        self.is_category(ErrorType::System)
    }

    fn is_connection_error(&self) -> bool {
        self.is_category(ErrorType::Connection)
    }

    fn is_certificate_error(&self) -> bool {
        self.is_category(ErrorType::Certificate)
    }

    fn is_http_error(&self) -> bool {
        self.is_category(ErrorType::Http)
    }

    fn is_cache_error(&self) -> bool {
        self.is_category(ErrorType::Cache)
    }

    fn is_unknown_error(&self) -> bool {
        self.is_category(ErrorType::Unknown)
    }

    fn is_ftp_error(&self) -> bool {
        self.is_category(ErrorType::Ftp)
    }

    fn is_certificate_manager_error(&self) -> bool {
        self.is_category(ErrorType::CertificateManager)
    }

    fn is_dns_error(&self) -> bool {
        self.is_category(ErrorType::Dns)
    }
}

impl Categorized for ErrorType {
    fn error_type(&self) -> ErrorType {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_category_from_code() {
        assert_eq!(ErrorType::from_code(-324), ErrorType::Http);
        assert_eq!(ErrorType::from_code(-1), ErrorType::System);
        assert_eq!(ErrorType::from_code(0), ErrorType::System);
        assert_eq!(ErrorType::from_code(-99), ErrorType::System);
        assert_eq!(ErrorType::from_code(-100), ErrorType::Connection);
        assert_eq!(ErrorType::from_code(-219), ErrorType::Certificate);
        assert_eq!(ErrorType::from_code(-400), ErrorType::Cache);
        assert_eq!(ErrorType::from_code(-501), ErrorType::Unknown);
        assert_eq!(ErrorType::from_code(-601), ErrorType::Ftp);
        assert_eq!(ErrorType::from_code(-701), ErrorType::CertificateManager);
        assert_eq!(ErrorType::from_code(-899), ErrorType::Dns);
    }

    #[test]
    fn positive_codes_use_magnitude() {
        assert_eq!(ErrorType::from_code(324), ErrorType::Http);
        assert_eq!(ErrorType::from_code(805), ErrorType::Dns);
    }

    #[test]
    fn unmapped_bucket_is_unknown() {
        assert_eq!(ErrorType::from_code(-900), ErrorType::Unknown);
        assert_eq!(ErrorType::from_code(-9999), ErrorType::Unknown);
        assert_eq!(ErrorType::from_code(i32::MIN), ErrorType::Unknown);
        assert_eq!(ErrorType::from_code(i32::MAX), ErrorType::Unknown);
    }

    #[test]
    fn bucket_rounds_down() {
        assert_eq!(bucket(-324), 300);
        assert_eq!(bucket(-1), 0);
        assert_eq!(bucket(-100), 100);
        assert_eq!(bucket(-999), 900);
    }

    #[test]
    fn string_round_trip() {
        for t in ErrorType::ALL {
            assert_eq!(t.as_str().parse::<ErrorType>().unwrap(), t);
            assert_eq!(t.to_string(), t.as_str());
        }
        assert!("Http".parse::<ErrorType>().is_err());
        assert!("certificate_manager".parse::<ErrorType>().is_err());
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&ErrorType::CertificateManager).unwrap();
        assert_eq!(json, "\"certificate-manager\"");
        let parsed: ErrorType = serde_json::from_str("\"dns\"").unwrap();
        assert_eq!(parsed, ErrorType::Dns);
    }

    #[test]
    fn predicates_are_mutually_exclusive() {
        for t in ErrorType::ALL {
            let hits = [
                t.is_system_error(),
                t.is_connection_error(),
                t.is_certificate_error(),
                t.is_http_error(),
                t.is_cache_error(),
                t.is_unknown_error(),
                t.is_ftp_error(),
                t.is_certificate_manager_error(),
                t.is_dns_error(),
            ];
            assert_eq!(hits.iter().filter(|h| **h).count(), 1, "{t}");
        }
    }
}
