//! Rust source generation for the named variant constants.
//!
//! Renders `src/variants.rs` from a dataset:
//! - one `pub const` per record on [`ErrorVariant`](crate::variant::ErrorVariant),
//!   named after the record in SCREAMING_SNAKE case
//! - a doc comment carrying the record's default message
//! - `ALL`, a static slice of every constant in dataset order
//!
//! The generated output is deterministic: identical input always produces
//! byte-identical output.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;
use std::path::Path;

use crate::category::ErrorType;
use crate::dataset::ErrorRecord;
use crate::error::{Error, Result};
use crate::naming::to_screaming_snake;

/// Statistics collected during generation for reporting.
#[derive(Debug, Default)]
pub struct GenerationStats {
    pub variants_generated: usize,
    pub descriptions: usize,
    pub by_category: BTreeMap<ErrorType, usize>,
}

/// Render the variants module and write it to `output`.
///
/// Returns generation statistics for reporting.
pub fn generate(records: &[ErrorRecord], output: &Path) -> Result<GenerationStats> {
    let source = render_variants(records)?;
    write_file(output, &source)?;

    let mut stats = GenerationStats {
        variants_generated: records.len(),
        ..GenerationStats::default()
    };
    for record in records {
        if record.description.is_some() {
            stats.descriptions += 1;
        }
        *stats.by_category.entry(record.error_type).or_default() += 1;
    }
    Ok(stats)
}

/// Whether the file at `output` equals the rendering of `records`.
///
/// A missing file counts as out of date.
pub fn check(records: &[ErrorRecord], output: &Path) -> Result<bool> {
    let expected = render_variants(records)?;
    match std::fs::read_to_string(output) {
        Ok(existing) => Ok(existing == expected),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Read {
            path: output.to_path_buf(),
            source: e,
        }),
    }
}

/// Render the Rust source of the variants module.
pub fn render_variants(records: &[ErrorRecord]) -> Result<String> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut consts = Vec::with_capacity(records.len());
    for record in records {
        let const_name = to_screaming_snake(&record.name);
        if !is_const_ident(&const_name) {
            return Err(Error::Codegen(format!(
                "name '{}' (code {}) does not map to a Rust identifier (got {const_name})",
                record.name, record.code
            )));
        }
        if !seen.insert(const_name.clone()) {
            return Err(Error::Codegen(format!(
                "constant {const_name} generated twice (second from '{}', code {})",
                record.name, record.code
            )));
        }
        consts.push(const_name);
    }

    let mut out = String::new();

    writeln!(
        out,
        "// @generated by `chromium-net-errors generate`. Do not edit by hand."
    )
    .unwrap();
    writeln!(out).unwrap();
    writeln!(out, "use crate::category::ErrorType;").unwrap();
    writeln!(out, "use crate::variant::ErrorVariant;").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "impl ErrorVariant {{").unwrap();

    for (i, (record, const_name)) in records.iter().zip(&consts).enumerate() {
        if i > 0 {
            writeln!(out).unwrap();
        }
        write_variant_const(&mut out, record, const_name);
    }

    writeln!(out, "}}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "/// Every named variant, in dataset order.").unwrap();
    writeln!(out, "pub static ALL: &[ErrorVariant] = &[").unwrap();
    for const_name in &consts {
        writeln!(out, "    ErrorVariant::{const_name},").unwrap();
    }
    writeln!(out, "];").unwrap();

    Ok(out)
}

fn write_variant_const(out: &mut String, record: &ErrorRecord, const_name: &str) {
    let description = match &record.description {
        Some(d) => format!("Some({d:?})"),
        None => "None".to_string(),
    };

    for line in record
        .message
        .split(['\n', '\r'])
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
    {
        writeln!(out, "    /// {line}").unwrap();
    }
    writeln!(
        out,
        "    pub const {const_name}: ErrorVariant = ErrorVariant::builtin("
    )
    .unwrap();
    writeln!(out, "        {:?},", record.name).unwrap();
    writeln!(out, "        {},", record.code).unwrap();
    writeln!(out, "        ErrorType::{},", type_ident(record.error_type)).unwrap();
    writeln!(out, "        {:?},", record.message).unwrap();
    writeln!(out, "        {description},").unwrap();
    writeln!(out, "    );").unwrap();
}

/// Whether `name` is usable as an associated constant name.
fn is_const_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_uppercase() || first == '_')
        && name != "_"
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// The Rust path segment of an [`ErrorType`] variant.
fn type_ident(error_type: ErrorType) -> &'static str {
    match error_type {
        ErrorType::System => "System",
        ErrorType::Connection => "Connection",
        ErrorType::Certificate => "Certificate",
        ErrorType::Http => "Http",
        ErrorType::Cache => "Cache",
        ErrorType::Unknown => "Unknown",
        ErrorType::Ftp => "Ftp",
        ErrorType::CertificateManager => "CertificateManager",
        ErrorType::Dns => "Dns",
    }
}

/// Write content to a file, creating parent directories as needed.
fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    std::fs::write(path, content).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn records() -> Vec<ErrorRecord> {
        vec![
            ErrorRecord::new(
                "ProxyConnectionFailedError",
                -130,
                "Note that this does NOT include failures during the actual \"CONNECT\" method.",
                Some("ERR_PROXY_CONNECTION_FAILED".to_string()),
            ),
            ErrorRecord::new("CacheMissError", -400, "The cache does not have the requested entry.", None),
        ]
    }

    #[test]
    fn renders_one_const_per_record() {
        let source = render_variants(&records()).unwrap();
        assert!(source.starts_with("// @generated"));
        assert!(source.contains("pub const PROXY_CONNECTION_FAILED_ERROR: ErrorVariant"));
        assert!(source.contains("pub const CACHE_MISS_ERROR: ErrorVariant"));
        assert!(source.contains("        ErrorType::Connection,\n"));
        assert!(source.contains("        ErrorType::Cache,\n"));
        assert!(source.contains("        Some(\"ERR_PROXY_CONNECTION_FAILED\"),\n"));
        assert!(source.contains("        None,\n"));
    }

    #[test]
    fn escapes_string_literals() {
        let source = render_variants(&records()).unwrap();
        assert!(source.contains(r#"actual \"CONNECT\" method."#));
        assert!(source.contains("    /// Note that this does NOT include failures during the actual \"CONNECT\" method.\n"));
    }

    #[test]
    fn all_lists_consts_in_order() {
        let source = render_variants(&records()).unwrap();
        let all = source.find("pub static ALL").unwrap();
        let tail = &source[all..];
        let first = tail.find("ErrorVariant::PROXY_CONNECTION_FAILED_ERROR,").unwrap();
        let second = tail.find("ErrorVariant::CACHE_MISS_ERROR,").unwrap();
        assert!(first < second);
        assert!(source.ends_with("];\n"));
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(
            render_variants(&records()).unwrap(),
            render_variants(&records()).unwrap()
        );
    }

    #[test]
    fn colliding_const_names_are_rejected() {
        let records = vec![
            ErrorRecord::new("FailedError", -2, "first", None),
            ErrorRecord::new("FailedError", -3, "second", None),
        ];
        assert!(matches!(render_variants(&records), Err(Error::Codegen(_))));
    }

    #[test]
    fn multi_line_message_stays_inside_doc_comment() {
        let records = Dataset::from_json(
            r#"[{"name": "FailedError", "code": -2, "message": "line one\nline two\r\nline three"}]"#,
        )
        .unwrap()
        .into_records();
        let source = render_variants(&records).unwrap();
        assert!(source.contains("    /// line one\n    /// line two\n    /// line three\n"));
        assert!(source.contains(r#"        "line one\nline two\r\nline three","#));
        for line in source.lines() {
            assert!(!line.starts_with("line"), "stray source line: {line}");
        }
    }

    #[test]
    fn names_that_are_not_identifiers_are_rejected() {
        for name in ["404Error", "Foo-BarError", "Foo BarError", "ÉchecError"] {
            let records = vec![ErrorRecord::new(name, -2, "A generic failure occurred.", None)];
            assert!(
                matches!(render_variants(&records), Err(Error::Codegen(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn const_ident_rules() {
        assert!(is_const_ident("EMPTY_RESPONSE_ERROR"));
        assert!(is_const_ident("HTTP11_REQUIRED_ERROR"));
        assert!(!is_const_ident(""));
        assert!(!is_const_ident("_"));
        assert!(!is_const_ident("404_ERROR"));
        assert!(!is_const_ident("FOO-BAR_ERROR"));
    }

    #[test]
    fn type_idents_cover_every_category() {
        for t in ErrorType::ALL {
            let ident = type_ident(t);
            assert_eq!(crate::naming::to_screaming_snake(ident).replace('_', "-").to_lowercase(), t.as_str());
        }
    }
}
