//! Error variants: the constructors for concrete network errors.
//!
//! Every dataset record yields one [`ErrorVariant`]. Records shipped with the
//! crate are also available by name as associated constants generated into
//! `variants.rs` (e.g. [`ErrorVariant::EMPTY_RESPONSE_ERROR`]).

use std::borrow::Cow;

use crate::category::{Categorized, ErrorType};
use crate::dataset::ErrorRecord;
use crate::net_error::ChromiumNetError;

/// Name carried by the fallback variant and by errors built without a record.
pub const UNKNOWN_ERROR_NAME: &str = "ChromiumNetError";

/// Default message of the fallback variant.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// The fallback variant returned by every lookup miss.
static UNKNOWN_VARIANT: ErrorVariant = ErrorVariant::UNKNOWN;

/// A concrete error kind: fixed identity plus a default message.
///
/// Calling [`create`](ErrorVariant::create) or
/// [`with_message`](ErrorVariant::with_message) produces a
/// [`ChromiumNetError`] value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorVariant {
    name: Cow<'static, str>,
    code: Option<i32>,
    error_type: ErrorType,
    message: Cow<'static, str>,
    description: Option<Cow<'static, str>>,
}

impl ErrorVariant {
    /// The designated fallback: type `unknown`, no code, no description.
    pub const UNKNOWN: ErrorVariant = ErrorVariant {
        name: Cow::Borrowed(UNKNOWN_ERROR_NAME),
        code: None,
        error_type: ErrorType::Unknown,
        message: Cow::Borrowed(UNKNOWN_ERROR_MESSAGE),
        description: None,
    };

    /// Constructor used by the generated named constants.
    pub(crate) const fn builtin(
        name: &'static str,
        code: i32,
        error_type: ErrorType,
        message: &'static str,
        description: Option<&'static str>,
    ) -> Self {
        ErrorVariant {
            name: Cow::Borrowed(name),
            code: Some(code),
            error_type,
            message: Cow::Borrowed(message),
            description: match description {
                Some(d) => Some(Cow::Borrowed(d)),
                None => None,
            },
        }
    }

    /// Build a variant from a dataset record.
    pub fn from_record(record: &ErrorRecord) -> Self {
        ErrorVariant {
            name: Cow::Owned(record.name.clone()),
            code: Some(record.code),
            error_type: record.error_type,
            message: Cow::Owned(record.message.clone()),
            description: record.description.clone().map(Cow::Owned),
        }
    }

    /// The process-lifetime fallback variant.
    pub fn unknown() -> &'static ErrorVariant {
        &UNKNOWN_VARIANT
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric code; `None` only for the fallback variant.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    /// Default message used when no override is given.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this is the fallback variant rather than a dataset entry.
    pub fn is_fallback(&self) -> bool {
        self.code.is_none()
    }

    /// The record this variant was derived from, or `None` for the fallback.
    pub fn to_record(&self) -> Option<ErrorRecord> {
        let code = self.code?;
        Some(ErrorRecord {
            name: self.name.to_string(),
            code,
            error_type: self.error_type,
            message: self.message.to_string(),
            description: self.description.as_ref().map(|d| d.to_string()),
        })
    }

    /// Instantiate with the default message.
    #[track_caller]
    pub fn create(&self) -> ChromiumNetError {
        ChromiumNetError::from_parts(
            self.name.clone(),
            self.code,
            self.error_type,
            self.message.to_string(),
            self.description.clone(),
        )
    }

    /// Instantiate with `message` replacing the default for this instance only.
    #[track_caller]
    pub fn with_message(&self, message: impl Into<String>) -> ChromiumNetError {
        ChromiumNetError::from_parts(
            self.name.clone(),
            self.code,
            self.error_type,
            message.into(),
            self.description.clone(),
        )
    }
}

impl Categorized for ErrorVariant {
    fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_response() -> ErrorRecord {
        ErrorRecord::new(
            "EmptyResponseError",
            -324,
            "The server closed the connection without sending any data.",
            Some("ERR_EMPTY_RESPONSE".to_string()),
        )
    }

    #[test]
    fn record_fields_carry_over() {
        let variant = ErrorVariant::from_record(&empty_response());
        assert_eq!(variant.name(), "EmptyResponseError");
        assert_eq!(variant.code(), Some(-324));
        assert_eq!(variant.error_type(), ErrorType::Http);
        assert_eq!(variant.description(), Some("ERR_EMPTY_RESPONSE"));
        assert!(!variant.is_fallback());
        assert_eq!(variant.to_record(), Some(empty_response()));
    }

    #[test]
    fn create_uses_default_message() {
        let err = ErrorVariant::from_record(&empty_response()).create();
        assert_eq!(
            err.message(),
            "The server closed the connection without sending any data."
        );
    }

    #[test]
    fn with_message_overrides_only_that_instance() {
        let variant = ErrorVariant::from_record(&empty_response());
        let custom = variant.with_message("upstream hung up");
        let plain = variant.create();
        assert_eq!(custom.message(), "upstream hung up");
        assert_eq!(plain.message(), variant.message());
        assert_eq!(custom.code(), Some(-324));
    }

    #[test]
    fn fallback_variant() {
        let unknown = ErrorVariant::unknown();
        assert_eq!(unknown.name(), UNKNOWN_ERROR_NAME);
        assert_eq!(unknown.message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(unknown.code(), None);
        assert_eq!(unknown.description(), None);
        assert!(unknown.is_fallback());
        assert!(unknown.is_unknown_error());
        assert!(!unknown.is_http_error());
        assert_eq!(unknown.to_record(), None);
    }

    #[test]
    fn builtin_matches_record_built_variant() {
        let builtin = ErrorVariant::builtin(
            "EmptyResponseError",
            -324,
            ErrorType::Http,
            "The server closed the connection without sending any data.",
            Some("ERR_EMPTY_RESPONSE"),
        );
        assert_eq!(builtin, ErrorVariant::from_record(&empty_response()));
    }
}
