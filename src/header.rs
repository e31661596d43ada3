//! Parser for Chromium's `net_error_list.h`.
//!
//! The header declares each error as a `NET_ERROR(NAME, CODE)` line preceded
//! by a `//` comment block describing it:
//!
//! ```text
//! // The server closed the connection without sending any data.
//! NET_ERROR(EMPTY_RESPONSE, -324)
//! ```
//!
//! Lines are grouped into segments separated by blank lines and macro lines.
//! A macro's message is the text of the segment ending at it, with comment
//! markers removed and whitespace collapsed. Only local files are read.

use std::path::Path;

use tracing::warn;

use crate::dataset::ErrorRecord;
use crate::error::{Error, Result};
use crate::naming::{ensure_error_suffix, to_description, to_pascal_case};

const MACRO_PREFIX: &str = "NET_ERROR(";
const COMMENT_MARKER: &str = "//";

/// Read and parse a header file.
pub fn load_header(path: &Path) -> Result<Vec<ErrorRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_header(&content)
}

/// Extract one record per `NET_ERROR` macro, in file order.
pub fn parse_header(text: &str) -> Result<Vec<ErrorRecord>> {
    let mut segment = String::new();
    let mut records = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim_end();

        if line.trim().is_empty() {
            segment.clear();
            continue;
        }

        if let Some((macro_name, code)) = parse_macro(line) {
            let code: i32 = code.parse().map_err(|e| Error::Header {
                line: idx + 1,
                reason: format!("invalid code '{code}' for {macro_name}: {e}"),
            })?;
            let comment = std::mem::take(&mut segment);
            records.push(build_record(macro_name, code, &comment));
            continue;
        }

        if line.starts_with(MACRO_PREFIX) {
            warn!(line = idx + 1, text = line, "unrecognized NET_ERROR line");
        }

        if !segment.is_empty() {
            segment.push('\n');
        }
        segment.push_str(strip_comment(line));
    }

    Ok(records)
}

/// Split `NET_ERROR(NAME, CODE)` into its arguments.
fn parse_macro(line: &str) -> Option<(&str, &str)> {
    let args = line.strip_prefix(MACRO_PREFIX)?.strip_suffix(')')?;
    let (name, code) = args.split_once(',')?;
    let (name, code) = (name.trim(), code.trim());
    let valid_name = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    (valid_name && !code.is_empty()).then_some((name, code))
}

fn strip_comment(line: &str) -> &str {
    match line.strip_prefix(COMMENT_MARKER) {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}

/// Collapse a comment segment into a single-line message.
fn clean_message(segment: &str) -> String {
    strip_comment(segment)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_record(macro_name: &str, code: i32, segment: &str) -> ErrorRecord {
    let description = to_description(macro_name);
    let mut message = clean_message(segment);
    if message.is_empty() {
        message = description.clone();
    }
    ErrorRecord::new(
        ensure_error_suffix(&to_pascal_case(macro_name)),
        code,
        message,
        Some(description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::ErrorType;

    const SAMPLE: &str = "\
// Copyright 2012 The Chromium Authors
// Use of this source code is governed by a BSD-style license.

// An asynchronous IO operation is not yet complete.  This usually does not
// reflect a fatal error, but rather that some operation is still pending.
NET_ERROR(IO_PENDING, -1)

// A generic failure occurred.
NET_ERROR(FAILED, -2)

// An SSL protocol error occurred.
NET_ERROR(SSL_PROTOCOL_ERROR, -107)

// There is an HTTP/2 protocol error.
NET_ERROR(HTTP2_PROTOCOL_ERROR, -337)
NET_ERROR(UNDOCUMENTED, -999)
";

    #[test]
    fn parses_records_in_order() {
        let records = parse_header(SAMPLE).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "IoPendingError",
                "FailedError",
                "SslProtocolError",
                "Http2ProtocolError",
                "UndocumentedError"
            ]
        );
    }

    #[test]
    fn message_is_previous_comment_block() {
        let records = parse_header(SAMPLE).unwrap();
        assert_eq!(
            records[0].message,
            "An asynchronous IO operation is not yet complete. This usually does not \
             reflect a fatal error, but rather that some operation is still pending."
        );
        assert_eq!(records[1].message, "A generic failure occurred.");
    }

    #[test]
    fn derives_type_and_description() {
        let records = parse_header(SAMPLE).unwrap();
        assert_eq!(records[2].error_type, ErrorType::Connection);
        assert_eq!(records[2].description.as_deref(), Some("ERR_SSL_PROTOCOL_ERROR"));
        assert_eq!(records[3].error_type, ErrorType::Http);
        assert_eq!(records[4].error_type, ErrorType::Unknown);
    }

    #[test]
    fn macro_without_comment_falls_back_to_description() {
        let records = parse_header(SAMPLE).unwrap();
        assert_eq!(records[4].message, "ERR_UNDOCUMENTED");
    }

    #[test]
    fn blank_line_detaches_comment_from_macro() {
        let records = parse_header("// Orphaned note.\n\nNET_ERROR(FAILED, -2)\n").unwrap();
        assert_eq!(records[0].message, "ERR_FAILED");
    }

    #[test]
    fn invalid_code_reports_line() {
        let err = parse_header("// Broken.\nNET_ERROR(BROKEN, -x1)\n").unwrap_err();
        assert!(matches!(err, Error::Header { line: 2, .. }));
    }

    #[test]
    fn lowercase_macro_is_not_a_record() {
        let records = parse_header("NET_ERROR(not_valid, -1)\n").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn parse_macro_tolerates_spacing() {
        assert_eq!(parse_macro("NET_ERROR(FAILED,-2)"), Some(("FAILED", "-2")));
        assert_eq!(parse_macro("NET_ERROR(FAILED, -2)"), Some(("FAILED", "-2")));
        assert_eq!(parse_macro("NET_ERROR(FAILED, -2);"), None);
    }
}
