//! Typed Chromium network errors.
//!
//! `chromium-net-errors` classifies the numeric error codes and `ERR_*`
//! descriptions reported by Chromium's network stack (and by embedders such
//! as Electron or CEF) into concrete, categorised error values.
//!
//! # Features
//!
//! - One [`ErrorVariant`] per Chromium net error, each also available as a
//!   named constant (e.g. [`ErrorVariant::EMPTY_RESPONSE_ERROR`])
//! - Nine categories (`system`, `connection`, `certificate`, `http`, `cache`,
//!   `unknown`, `ftp`, `certificate-manager`, `dns`) with predicates on every
//!   error through the [`Categorized`] trait
//! - Lookup by numeric code or by description that never fails: a miss
//!   yields the unknown error
//! - [`ChromiumNetError`] implements [`std::error::Error`] and records where
//!   it was constructed
//! - Tooling to rebuild the dataset from `net_error_list.h` and regenerate
//!   the named constants
//!
//! # Usage
//!
//! ```
//! use chromium_net_errors::{Categorized, ChromiumNetError, ErrorType};
//!
//! fn load(code: i32) -> Result<(), ChromiumNetError> {
//!     Err(ChromiumNetError::from_code(code))
//! }
//!
//! let err = load(-202).unwrap_err();
//! assert!(err.is_certificate_error());
//! assert_eq!(err.name(), "CertAuthorityInvalidError");
//!
//! let by_desc = chromium_net_errors::get_error_by_description("ERR_NAME_NOT_RESOLVED");
//! assert_eq!(by_desc.error_type(), ErrorType::Connection);
//!
//! let miss = chromium_net_errors::create_by_code(9999);
//! assert!(miss.is_unknown_error());
//! ```

pub mod category;
pub mod codegen;
pub mod dataset;
pub mod error;
pub mod header;
pub mod naming;
pub mod net_error;
pub mod registry;
pub mod variant;
mod variants;

pub use category::{Categorized, ErrorType};
pub use dataset::{Dataset, ErrorRecord};
pub use net_error::ChromiumNetError;
pub use registry::{
    Registry, create_by_code, get_error_by_code, get_error_by_description, get_errors,
};
pub use variant::ErrorVariant;
pub use variants::ALL as NAMED_VARIANTS;
