//! Error record dataset: types, validation, loading and saving.
//!
//! The dataset is a JSON array of records extracted from Chromium's
//! `net_error_list.h`. The copy shipped with the crate lives at
//! `data/errors.json` and is compiled in; [`Dataset::load`] reads an
//! alternative copy from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::{Categorized, ErrorType};
use crate::error::{Error, Result};

/// The dataset compiled into the crate.
const EMBEDDED_ERRORS: &str = include_str!("../data/errors.json");

/// One network error as described by the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordEntry")]
pub struct ErrorRecord {
    /// PascalCase identifier, always ending in `Error` (e.g. `"EmptyResponseError"`).
    pub name: String,

    /// Chromium's numeric error code (e.g. `-324`).
    pub code: i32,

    /// Category derived from `code`.
    #[serde(rename = "type")]
    pub error_type: ErrorType,

    /// Default human-readable message.
    pub message: String,

    /// Short machine-friendly key (e.g. `"ERR_EMPTY_RESPONSE"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// On-disk shape of a record. Older dataset revisions omit `type` and
/// `description`.
#[derive(Deserialize)]
struct RecordEntry {
    name: String,
    code: i32,
    #[serde(rename = "type", default)]
    error_type: Option<ErrorType>,
    message: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<RecordEntry> for ErrorRecord {
    fn from(entry: RecordEntry) -> Self {
        ErrorRecord {
            error_type: entry
                .error_type
                .unwrap_or_else(|| ErrorType::from_code(entry.code)),
            description: entry.description.filter(|d| !d.is_empty()),
            name: entry.name,
            code: entry.code,
            message: entry.message,
        }
    }
}

impl ErrorRecord {
    /// Build a record, deriving its category from `code`.
    pub fn new(
        name: impl Into<String>,
        code: i32,
        message: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        ErrorRecord {
            name: name.into(),
            code,
            error_type: ErrorType::from_code(code),
            message: message.into(),
            description: description.filter(|d| !d.is_empty()),
        }
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidRecord {
            name: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(invalid(format!("code {} has an empty name", self.code)));
        }
        if self.message.is_empty() {
            return Err(invalid("message is empty".to_string()));
        }
        let derived = ErrorType::from_code(self.code);
        if self.error_type != derived {
            return Err(invalid(format!(
                "type '{}' does not match code {} (expected '{derived}')",
                self.error_type, self.code
            )));
        }
        Ok(())
    }
}

impl Categorized for ErrorRecord {
    fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

/// A validated, ordered, immutable list of error records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<ErrorRecord>,
}

impl Dataset {
    /// Validate `records` and wrap them.
    ///
    /// Duplicate codes or descriptions are accepted here; the registry lets
    /// the later record win. Empty descriptions are normalised to `None`.
    pub fn new(mut records: Vec<ErrorRecord>) -> Result<Self> {
        for record in &mut records {
            record.validate()?;
            record.description = record.description.take().filter(|d| !d.is_empty());
        }
        Ok(Dataset { records })
    }

    /// Parse a dataset from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ErrorRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a dataset from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// The dataset compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_ERRORS)
    }

    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ErrorRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pretty-printed JSON with two-space indentation and a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(&self.records)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the dataset as JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        std::fs::write(path, json).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_current_shape() {
        let json = r#"[
            {
                "name": "EmptyResponseError",
                "code": -324,
                "type": "http",
                "message": "The server closed the connection without sending any data.",
                "description": "ERR_EMPTY_RESPONSE"
            }
        ]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.name, "EmptyResponseError");
        assert_eq!(record.error_type, ErrorType::Http);
        assert_eq!(record.description.as_deref(), Some("ERR_EMPTY_RESPONSE"));
    }

    #[test]
    fn missing_type_is_derived_from_code() {
        let json = r#"[
            {"name": "DnsTimedOutError", "code": -803, "message": "DNS transaction timed out."},
            {"name": "FarAwayError", "code": -950, "message": "Unmapped bucket."}
        ]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.records()[0].error_type, ErrorType::Dns);
        assert_eq!(dataset.records()[0].description, None);
        assert_eq!(dataset.records()[1].error_type, ErrorType::Unknown);
    }

    #[test]
    fn empty_description_is_dropped() {
        let json = r#"[{"name": "FailedError", "code": -2, "message": "A generic failure occurred.", "description": ""}]"#;
        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.records()[0].description, None);
    }

    #[test]
    fn literal_empty_description_is_normalised() {
        let record = ErrorRecord {
            name: "FailedError".to_string(),
            code: -2,
            error_type: ErrorType::System,
            message: "A generic failure occurred.".to_string(),
            description: Some(String::new()),
        };
        let dataset = Dataset::new(vec![record]).unwrap();
        assert_eq!(dataset.records()[0].description, None);
    }

    #[test]
    fn inconsistent_type_is_rejected() {
        let json = r#"[{"name": "FailedError", "code": -2, "type": "dns", "message": "A generic failure occurred."}]"#;
        let err = Dataset::from_json(json).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { ref name, .. } if name == "FailedError"));
    }

    #[test]
    fn unknown_type_string_is_rejected() {
        let json = r#"[{"name": "FailedError", "code": -2, "type": "network", "message": "x"}]"#;
        assert!(matches!(Dataset::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let no_name = vec![ErrorRecord::new("", -2, "A generic failure occurred.", None)];
        assert!(Dataset::new(no_name).is_err());

        let no_message = vec![ErrorRecord::new("FailedError", -2, "", None)];
        assert!(Dataset::new(no_message).is_err());
    }

    #[test]
    fn duplicate_codes_are_accepted() {
        let records = vec![
            ErrorRecord::new("FirstError", -2, "first", None),
            ErrorRecord::new("SecondError", -2, "second", None),
        ];
        assert_eq!(Dataset::new(records).unwrap().len(), 2);
    }

    #[test]
    fn serializes_fields_in_dataset_order() {
        let dataset = Dataset::new(vec![ErrorRecord::new(
            "CacheMissError",
            -400,
            "The cache does not have the requested entry.",
            Some("ERR_CACHE_MISS".to_string()),
        )])
        .unwrap();
        let json = dataset.to_json().unwrap();
        let name = json.find("\"name\"").unwrap();
        let code = json.find("\"code\"").unwrap();
        let ty = json.find("\"type\": \"cache\"").unwrap();
        let message = json.find("\"message\"").unwrap();
        let description = json.find("\"description\"").unwrap();
        assert!(name < code && code < ty && ty < message && message < description);
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn record_without_description_omits_field() {
        let dataset =
            Dataset::new(vec![ErrorRecord::new("FailedError", -2, "failed", None)]).unwrap();
        assert!(!dataset.to_json().unwrap().contains("description"));
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let dataset = Dataset::embedded().unwrap();
        assert!(!dataset.is_empty());
        assert!(dataset.records().iter().all(|r| r.name.ends_with("Error")));
    }
}
