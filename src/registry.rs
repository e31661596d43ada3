//! The error registry: code and description lookup with unknown fallback.
//!
//! A [`Registry`] is built once from a [`Dataset`] and never changes
//! afterwards, so a shared reference can be read from any number of threads.
//! The process-wide registry ([`Registry::global`]) is built from the
//! embedded dataset on first use; the free functions in this module read it.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::dataset::{Dataset, ErrorRecord};
use crate::net_error::ChromiumNetError;
use crate::variant::ErrorVariant;

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    let dataset = Dataset::embedded().expect("embedded error dataset is valid");
    Registry::new(dataset)
});

/// Read-only indices over one dataset.
#[derive(Debug, Clone)]
pub struct Registry {
    records: Vec<ErrorRecord>,
    variants: Vec<ErrorVariant>,
    by_code: HashMap<i32, usize>,
    by_description: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Build the indices in one pass over `dataset`.
    ///
    /// When two records share a code, description or name, the later one
    /// wins that index entry.
    pub fn new(dataset: Dataset) -> Self {
        let records = dataset.into_records();
        let mut variants = Vec::with_capacity(records.len());
        let mut by_code = HashMap::with_capacity(records.len());
        let mut by_description = HashMap::with_capacity(records.len());
        let mut by_name = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            variants.push(ErrorVariant::from_record(record));

            if let Some(prev) = by_code.insert(record.code, idx) {
                debug!(
                    code = record.code,
                    replaced = %records[prev].name,
                    by = %record.name,
                    "duplicate error code"
                );
            }
            if let Some(description) = record.description.as_ref().filter(|d| !d.is_empty()) {
                if let Some(prev) = by_description.insert(description.clone(), idx) {
                    debug!(
                        description = %description,
                        replaced = %records[prev].name,
                        by = %record.name,
                        "duplicate error description"
                    );
                }
            }
            if let Some(prev) = by_name.insert(record.name.clone(), idx) {
                debug!(name = %record.name, replaced_code = records[prev].code, "duplicate error name");
            }
        }

        debug!(
            records = records.len(),
            codes = by_code.len(),
            descriptions = by_description.len(),
            "built error registry"
        );

        Registry {
            records,
            variants,
            by_code,
            by_description,
            by_name,
        }
    }

    /// The process-wide registry built from the embedded dataset.
    ///
    /// # Panics
    ///
    /// On first use, if the dataset compiled into the crate fails validation.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Snapshot of every record, in dataset order.
    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.records.clone()
    }

    /// Every variant, in dataset order.
    pub fn variants(&self) -> &[ErrorVariant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Variant registered for `code`, if any.
    pub fn find_by_code(&self, code: i32) -> Option<&ErrorVariant> {
        self.by_code.get(&code).map(|&idx| &self.variants[idx])
    }

    /// Variant registered for `description`, if any.
    pub fn find_by_description(&self, description: &str) -> Option<&ErrorVariant> {
        self.by_description
            .get(description)
            .map(|&idx| &self.variants[idx])
    }

    /// Variant with the identifier `name` (e.g. `"EmptyResponseError"`), if any.
    pub fn find_by_name(&self, name: &str) -> Option<&ErrorVariant> {
        self.by_name.get(name).map(|&idx| &self.variants[idx])
    }

    /// Variant registered for `code`, or the unknown variant on a miss.
    pub fn get_error_by_code(&self, code: i32) -> &ErrorVariant {
        self.find_by_code(code).unwrap_or_else(|| {
            trace!(code, "no error registered for code");
            ErrorVariant::unknown()
        })
    }

    /// Variant registered for `description`, or the unknown variant on a miss.
    pub fn get_error_by_description(&self, description: &str) -> &ErrorVariant {
        self.find_by_description(description).unwrap_or_else(|| {
            trace!(description, "no error registered for description");
            ErrorVariant::unknown()
        })
    }

    /// Instantiate the variant for `code` with its default message.
    #[track_caller]
    pub fn create_by_code(&self, code: i32) -> ChromiumNetError {
        self.get_error_by_code(code).create()
    }

    /// Instantiate the variant for `code` with a custom message.
    #[track_caller]
    pub fn create_by_code_with_message(
        &self,
        code: i32,
        message: impl Into<String>,
    ) -> ChromiumNetError {
        self.get_error_by_code(code).with_message(message)
    }

    /// Instantiate the variant for `description` with its default message.
    #[track_caller]
    pub fn create_by_description(&self, description: &str) -> ChromiumNetError {
        self.get_error_by_description(description).create()
    }
}

/// Snapshot of every record in the process-wide registry.
pub fn get_errors() -> Vec<ErrorRecord> {
    Registry::global().errors()
}

/// Process-wide lookup by code with unknown fallback.
pub fn get_error_by_code(code: i32) -> &'static ErrorVariant {
    Registry::global().get_error_by_code(code)
}

/// Process-wide lookup by description with unknown fallback.
pub fn get_error_by_description(description: &str) -> &'static ErrorVariant {
    Registry::global().get_error_by_description(description)
}

/// Process-wide instantiation by code with unknown fallback.
#[track_caller]
pub fn create_by_code(code: i32) -> ChromiumNetError {
    Registry::global().create_by_code(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{Categorized, ErrorType};

    fn registry(records: Vec<ErrorRecord>) -> Registry {
        Registry::new(Dataset::new(records).unwrap())
    }

    fn sample() -> Registry {
        registry(vec![
            ErrorRecord::new(
                "ConnectionRefusedError",
                -102,
                "A connection attempt was refused.",
                Some("ERR_CONNECTION_REFUSED".to_string()),
            ),
            ErrorRecord::new(
                "EmptyResponseError",
                -324,
                "The server closed the connection without sending any data.",
                Some("ERR_EMPTY_RESPONSE".to_string()),
            ),
            ErrorRecord::new("CacheMissError", -400, "The cache does not have the requested entry.", None),
        ])
    }

    #[test]
    fn lookup_by_code() {
        let reg = sample();
        let variant = reg.get_error_by_code(-324);
        assert_eq!(variant.name(), "EmptyResponseError");
        assert_eq!(variant.code(), Some(-324));
        assert_eq!(variant.error_type(), ErrorType::Http);
    }

    #[test]
    fn lookup_by_description_matches_code() {
        let reg = sample();
        assert_eq!(
            reg.get_error_by_description("ERR_CONNECTION_REFUSED"),
            reg.get_error_by_code(-102)
        );
    }

    #[test]
    fn miss_falls_back_to_unknown() {
        let reg = sample();
        let by_code = reg.get_error_by_code(9999);
        assert!(by_code.is_fallback());
        assert!(by_code.is_unknown_error());
        assert!(reg.get_error_by_description("ERR_NOT_A_THING").is_fallback());
        assert!(reg.find_by_code(9999).is_none());
        assert!(reg.find_by_description("ERR_NOT_A_THING").is_none());
    }

    #[test]
    fn records_without_description_are_not_indexed() {
        let reg = sample();
        assert!(reg.find_by_code(-400).is_some());
        assert!(reg.get_error_by_description("").is_fallback());
        assert_eq!(reg.by_description.len(), 2);
    }

    #[test]
    fn empty_description_is_not_indexed() {
        let record = ErrorRecord {
            name: "FailedError".to_string(),
            code: -2,
            error_type: ErrorType::System,
            message: "A generic failure occurred.".to_string(),
            description: Some(String::new()),
        };
        let reg = registry(vec![record]);
        assert!(reg.get_error_by_description("").is_fallback());
        assert!(reg.find_by_description("").is_none());
        assert!(reg.by_description.is_empty());
        assert_eq!(reg.get_error_by_code(-2).description(), None);
        assert_eq!(reg.errors()[0].description, None);
    }

    #[test]
    fn later_duplicate_code_wins() {
        let reg = registry(vec![
            ErrorRecord::new("FirstError", -2, "first", None),
            ErrorRecord::new("SecondError", -2, "second", None),
        ]);
        assert_eq!(reg.get_error_by_code(-2).name(), "SecondError");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn errors_returns_a_snapshot() {
        let reg = sample();
        let mut snapshot = reg.errors();
        snapshot.clear();
        assert_eq!(reg.errors().len(), 3);
    }

    #[test]
    fn create_by_code_with_message() {
        let reg = sample();
        let err = reg.create_by_code_with_message(-102, "refused by 10.0.0.1:443");
        assert_eq!(err.message(), "refused by 10.0.0.1:443");
        assert!(err.is_connection_error());

        let fallback = reg.create_by_code(-1);
        assert_eq!(fallback.message(), "Unknown error");
    }

    #[test]
    fn create_by_description() {
        let reg = sample();
        let err = reg.create_by_description("ERR_EMPTY_RESPONSE");
        assert_eq!(err.name(), "EmptyResponseError");
    }

    #[test]
    fn find_by_name() {
        let reg = sample();
        assert_eq!(reg.find_by_name("CacheMissError").unwrap().code(), Some(-400));
        assert!(reg.find_by_name("Cache").is_none());
    }

    #[test]
    fn empty_registry() {
        let reg = registry(Vec::new());
        assert!(reg.is_empty());
        assert!(reg.get_error_by_code(-324).is_fallback());
    }
}
