//! Error types for the dataset, header and codegen tooling.
//!
//! These describe failures of the crate's own machinery. The network errors the
//! crate models are [`ChromiumNetError`](crate::net_error::ChromiumNetError) values.

use std::path::PathBuf;

/// Errors that can occur while loading datasets or generating code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dataset as a whole is unusable.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// A single dataset record violates a field constraint.
    #[error("invalid record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// A `net_error_list.h` line could not be interpreted.
    #[error("header line {line}: {reason}")]
    Header { line: usize, reason: String },

    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parse or serialization error.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rust source generation error.
    #[error("codegen error: {0}")]
    Codegen(String),

    /// A generated file no longer matches its dataset.
    #[error("{path} is not up-to-date; run `chromium-net-errors generate`")]
    Stale { path: PathBuf },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
