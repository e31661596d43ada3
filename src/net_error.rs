//! The error value handed to callers.

use std::borrow::Cow;
use std::panic::Location;

use crate::category::{Categorized, ErrorType};
use crate::registry;
use crate::variant::ErrorVariant;

/// A classified Chromium network error.
///
/// Implements [`std::error::Error`], so it propagates with `?` and boxes into
/// `Box<dyn Error>`. Branch on the category with the [`Categorized`]
/// predicates, or compare against a specific kind with
/// [`is_variant`](ChromiumNetError::is_variant).
///
/// ```
/// use chromium_net_errors::{Categorized, ChromiumNetError, ErrorVariant};
///
/// let err = ChromiumNetError::from_code(-324);
/// assert!(err.is_http_error());
/// assert!(err.is_variant(&ErrorVariant::EMPTY_RESPONSE_ERROR));
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{name}: {message}")]
pub struct ChromiumNetError {
    name: Cow<'static, str>,
    code: Option<i32>,
    error_type: ErrorType,
    message: String,
    description: Option<Cow<'static, str>>,
    location: &'static Location<'static>,
}

impl ChromiumNetError {
    #[track_caller]
    pub(crate) fn from_parts(
        name: Cow<'static, str>,
        code: Option<i32>,
        error_type: ErrorType,
        message: String,
        description: Option<Cow<'static, str>>,
    ) -> Self {
        ChromiumNetError {
            name,
            code,
            error_type,
            message,
            description,
            location: Location::caller(),
        }
    }

    /// Instantiate the variant registered for `code` in the process-wide
    /// registry, or the unknown error if none is.
    #[track_caller]
    pub fn from_code(code: i32) -> Self {
        registry::create_by_code(code)
    }

    /// The unknown error with its default message.
    #[track_caller]
    pub fn unknown() -> Self {
        ErrorVariant::unknown().create()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric code; `None` for the unknown error.
    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Source location where the error was constructed.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Whether this error was built from `variant`.
    pub fn is_variant(&self, variant: &ErrorVariant) -> bool {
        self.name == variant.name() && self.code == variant.code()
    }
}

impl Categorized for ChromiumNetError {
    fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ErrorRecord;

    fn cert_revoked() -> ErrorVariant {
        ErrorVariant::from_record(&ErrorRecord::new(
            "CertRevokedError",
            -206,
            "The server responded with a certificate has been revoked.",
            Some("ERR_CERT_REVOKED".to_string()),
        ))
    }

    #[test]
    fn display_shows_name_and_message() {
        let err = cert_revoked().with_message("revoked by issuer");
        assert_eq!(err.to_string(), "CertRevokedError: revoked by issuer");
    }

    #[test]
    fn captures_construction_site() {
        let err = cert_revoked().create();
        assert_eq!(err.location().file(), file!());
    }

    #[test]
    fn unknown_error_shape() {
        let err = ChromiumNetError::unknown();
        assert_eq!(err.name(), "ChromiumNetError");
        assert_eq!(err.message(), "Unknown error");
        assert_eq!(err.code(), None);
        assert!(err.is_unknown_error());
        assert!(err.is_variant(ErrorVariant::unknown()));
    }

    #[test]
    fn is_variant_compares_identity() {
        let err = cert_revoked().create();
        assert!(err.is_variant(&cert_revoked()));
        assert!(!err.is_variant(ErrorVariant::unknown()));
        assert!(err.is_certificate_error());
    }

    #[test]
    fn propagates_through_question_mark() {
        fn connect() -> Result<(), ChromiumNetError> {
            Err(cert_revoked().create())
        }
        fn fetch() -> Result<(), Box<dyn std::error::Error>> {
            connect()?;
            Ok(())
        }
        let err = fetch().unwrap_err();
        let net = err.downcast_ref::<ChromiumNetError>().unwrap();
        assert_eq!(net.code(), Some(-206));
    }
}
