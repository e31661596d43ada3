//! End-to-end integration tests for chromium-net-errors.
//!
//! Most tests run against the dataset compiled into the crate. The header
//! tests use a trimmed copy of net_error_list.h under `tests/fixtures/`.

use std::path::Path;

use chromium_net_errors::codegen;
use chromium_net_errors::header;
use chromium_net_errors::{
    Categorized, ChromiumNetError, Dataset, ErrorRecord, ErrorType, ErrorVariant, NAMED_VARIANTS,
    Registry, create_by_code, get_error_by_code, get_error_by_description, get_errors,
};

/// Every category paired with the predicate that must hold for it.
const PREDICATES: [(ErrorType, fn(&ChromiumNetError) -> bool); 9] = [
    (ErrorType::System, ChromiumNetError::is_system_error),
    (ErrorType::Connection, ChromiumNetError::is_connection_error),
    (ErrorType::Certificate, ChromiumNetError::is_certificate_error),
    (ErrorType::Http, ChromiumNetError::is_http_error),
    (ErrorType::Cache, ChromiumNetError::is_cache_error),
    (ErrorType::Unknown, ChromiumNetError::is_unknown_error),
    (ErrorType::Ftp, ChromiumNetError::is_ftp_error),
    (ErrorType::CertificateManager, ChromiumNetError::is_certificate_manager_error),
    (ErrorType::Dns, ChromiumNetError::is_dns_error),
];

fn fixture_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/net_error_list.h"
    ))
}

#[test]
fn embedded_dataset_is_nonempty_and_consistent() {
    let errors = get_errors();
    assert!(!errors.is_empty());
    for record in &errors {
        assert!(!record.name.is_empty());
        assert!(record.name.ends_with("Error"), "{}", record.name);
        assert!(!record.message.is_empty(), "{}", record.name);
        assert_eq!(
            record.error_type,
            ErrorType::from_code(record.code),
            "{} ({})",
            record.name,
            record.code
        );
    }
}

#[test]
fn every_record_yields_a_matching_instance() {
    for record in get_errors() {
        let err = create_by_code(record.code);

        assert_eq!(err.name(), record.name);
        assert_eq!(err.code(), Some(record.code));
        assert_eq!(err.error_type(), record.error_type);
        assert_eq!(err.message(), record.message);
        assert_eq!(err.description(), record.description.as_deref());

        for (category, predicate) in PREDICATES {
            assert_eq!(
                predicate(&err),
                category == record.error_type,
                "{} predicate for {}",
                category,
                record.name
            );
        }
    }
}

#[test]
fn lookup_by_code_round_trips() {
    for record in get_errors() {
        let variant = get_error_by_code(record.code);
        assert_eq!(variant.code(), Some(record.code));
        assert_eq!(variant.name(), record.name);
    }
}

#[test]
fn lookup_by_description_round_trips() {
    for record in get_errors() {
        let Some(description) = record.description.as_deref() else {
            continue;
        };
        let variant = get_error_by_description(description);
        assert_eq!(variant.description(), Some(description));
        assert_eq!(variant.code(), Some(record.code));
    }
}

#[test]
fn unmatched_lookups_fall_back_to_unknown() {
    for variant in [
        get_error_by_code(9999),
        get_error_by_code(0),
        get_error_by_description("ERR_DOES_NOT_EXIST"),
        get_error_by_description(""),
    ] {
        assert!(variant.is_fallback());
        assert_eq!(variant, &ErrorVariant::UNKNOWN);
    }

    let err = create_by_code(9999);
    assert!(err.is_unknown_error());
    assert_eq!(err.name(), "ChromiumNetError");
    assert_eq!(err.code(), None);
    assert_eq!(err.message(), "Unknown error");
    assert!(err.is_variant(ErrorVariant::unknown()));
}

#[test]
fn message_override_is_per_instance() {
    let variant = get_error_by_code(-324);
    let custom = variant.with_message("upstream hung up");
    assert_eq!(custom.message(), "upstream hung up");
    assert_eq!(custom.name(), "EmptyResponseError");
    assert!(custom.is_http_error());

    let fresh = variant.create();
    assert_eq!(
        fresh.message(),
        "The server closed the connection without sending any data."
    );

    let registry = Registry::global();
    let by_registry = registry.create_by_code_with_message(-105, "resolver offline");
    assert_eq!(by_registry.message(), "resolver offline");
    assert_eq!(by_registry.name(), "NameNotResolvedError");
}

#[test]
fn instantiating_empty_response() {
    let err = create_by_code(-324);
    assert_eq!(err.name(), "EmptyResponseError");
    assert_eq!(err.error_type(), ErrorType::Http);
    assert_eq!(err.description(), Some("ERR_EMPTY_RESPONSE"));
    assert!(err.is_variant(&ErrorVariant::EMPTY_RESPONSE_ERROR));
    assert_eq!(
        err.to_string(),
        "EmptyResponseError: The server closed the connection without sending any data."
    );
}

#[test]
fn untyped_records_derive_their_category() {
    let json = r#"[
        {"name": "EmptyResponseError", "code": -324, "message": "The server closed the connection without sending any data."},
        {"name": "IoPendingError", "code": -1, "message": "An asynchronous IO operation is not yet complete."},
        {"name": "ReservedRangeError", "code": -950, "message": "Reserved."}
    ]"#;
    let registry = Registry::new(Dataset::from_json(json).unwrap());

    let http = registry.create_by_code(-324);
    assert_eq!(http.error_type(), ErrorType::Http);
    assert!(http.is_http_error());

    let system = registry.create_by_code(-1);
    assert_eq!(system.error_type(), ErrorType::System);
    assert!(system.is_system_error());

    let reserved = registry.create_by_code(-950);
    assert_eq!(reserved.error_type(), ErrorType::Unknown);
    assert!(reserved.is_unknown_error());
    assert_eq!(reserved.name(), "ReservedRangeError");
    assert!(!registry.get_error_by_code(-950).is_fallback());
}

#[test]
fn every_category_is_represented() {
    let errors = get_errors();
    for category in ErrorType::ALL {
        assert!(
            errors.iter().any(|r| r.is_category(category)),
            "no {category} errors in the dataset"
        );
    }
}

#[test]
fn named_variants_match_the_registry() {
    assert_eq!(NAMED_VARIANTS.len(), get_errors().len());
    assert_eq!(NAMED_VARIANTS.len(), Registry::global().len());
    for named in NAMED_VARIANTS {
        let code = named.code().unwrap();
        assert_eq!(named, get_error_by_code(code));
    }

    assert_eq!(ErrorVariant::NAME_NOT_RESOLVED_ERROR.code(), Some(-105));
    assert!(ErrorVariant::CERT_AUTHORITY_INVALID_ERROR.is_certificate_error());
    assert!(ErrorVariant::CACHE_MISS_ERROR.is_cache_error());
    assert!(ErrorVariant::FTP_FAILED_ERROR.is_ftp_error());
    assert!(ErrorVariant::PKCS12_IMPORT_BAD_PASSWORD_ERROR.is_certificate_manager_error());
    assert!(ErrorVariant::DNS_TIMED_OUT_ERROR.is_dns_error());
}

#[test]
fn errors_snapshot_is_independent() {
    let mut snapshot = get_errors();
    snapshot.clear();
    assert!(!get_errors().is_empty());
}

#[test]
fn errors_propagate_through_question_mark() {
    fn fetch(code: i32) -> Result<(), ChromiumNetError> {
        Err(create_by_code(code))
    }

    fn page() -> Result<(), Box<dyn std::error::Error>> {
        fetch(-202)?;
        Ok(())
    }

    let err = page().unwrap_err();
    let net = err.downcast_ref::<ChromiumNetError>().unwrap();
    assert!(net.is_certificate_error());
    assert_eq!(net.name(), "CertAuthorityInvalidError");
}

#[test]
fn instances_record_their_construction_site() {
    let err = ErrorVariant::INVALID_URL_ERROR.create();
    assert_eq!(err.location().file(), file!());
    assert_eq!(err.location().line(), line!() - 2);
}

#[test]
fn checked_in_variants_are_up_to_date() {
    let dataset = Dataset::embedded().unwrap();
    let rendered = codegen::render_variants(dataset.records()).unwrap();
    let checked_in = include_str!("../src/variants.rs");
    assert!(
        rendered == checked_in,
        "src/variants.rs is stale; run `chromium-net-errors generate`"
    );
}

#[test]
fn generate_then_check() {
    let dir = tempdir();
    let output = dir.join("nested").join("variants.rs");
    let dataset = Dataset::embedded().unwrap();

    assert!(!codegen::check(dataset.records(), &output).unwrap());

    let stats = codegen::generate(dataset.records(), &output).unwrap();
    assert_eq!(stats.variants_generated, dataset.len());
    assert_eq!(stats.by_category.values().sum::<usize>(), dataset.len());
    assert!(codegen::check(dataset.records(), &output).unwrap());

    let mut edited = std::fs::read_to_string(&output).unwrap();
    edited.push_str("// hand edit\n");
    std::fs::write(&output, edited).unwrap();
    assert!(!codegen::check(dataset.records(), &output).unwrap());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn dataset_save_and_load() {
    let dir = tempdir();
    let path = dir.join("errors.json");

    let dataset = Dataset::embedded().unwrap();
    dataset.save(&path).unwrap();

    let loaded = Dataset::load(&path).unwrap();
    assert_eq!(loaded.records(), dataset.records());

    // The shipped file is already in canonical form.
    let written = std::fs::read_to_string(&path).unwrap();
    let shipped = include_str!("../data/errors.json");
    assert_eq!(written, shipped);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn load_missing_dataset_reports_path() {
    let dir = tempdir();
    let missing = dir.join("missing.json");
    let err = Dataset::load(&missing).unwrap_err();
    assert!(err.to_string().contains("missing.json"), "{err}");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn header_fixture_parses() {
    let records = header::load_header(fixture_path()).unwrap();
    assert_eq!(records.len(), 13);

    let codes: Vec<i32> = records.iter().map(|r| r.code).collect();
    assert_eq!(
        codes,
        [-1, -2, -105, -201, -300, -324, -337, -400, -501, -601, -701, -800, -801]
    );

    // Every documented entry agrees with the shipped dataset except for
    // wording that the fixture trims.
    let registry = Registry::global();
    for record in &records {
        let shipped = registry.find_by_code(record.code).unwrap().to_record().unwrap();
        assert_eq!(record.name, shipped.name);
        assert_eq!(record.error_type, shipped.error_type);
        assert_eq!(record.description, shipped.description);
        if !matches!(record.code, -201 | -801) {
            assert_eq!(record.message, shipped.message, "{}", record.name);
        }
    }

    let undocumented = records.last().unwrap();
    assert_eq!(undocumented.message, "ERR_DNS_SERVER_REQUIRES_TCP");
}

#[test]
fn header_fixture_builds_a_registry() {
    let records = header::load_header(fixture_path()).unwrap();
    let registry = Registry::new(Dataset::new(records).unwrap());

    let err = registry.create_by_description("ERR_HTTP2_PROTOCOL_ERROR");
    assert_eq!(err.name(), "Http2ProtocolError");
    assert!(err.is_http_error());

    assert!(registry.get_error_by_code(-202).is_fallback());
    assert!(registry.find_by_name("FtpFailedError").is_some());
}

#[test]
fn parse_to_json_to_registry() {
    let dir = tempdir();
    let path = dir.join("parsed.json");

    let records = header::load_header(fixture_path()).unwrap();
    Dataset::new(records).unwrap().save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let parsed: Vec<ErrorRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 13);
    assert!(json.contains("\"type\": \"certificate-manager\""));

    let registry = Registry::new(Dataset::load(&path).unwrap());
    assert_eq!(registry.len(), 13);
    assert_eq!(registry.get_error_by_code(-400).name(), "CacheMissError");

    std::fs::remove_dir_all(&dir).ok();
}

fn tempdir() -> std::path::PathBuf {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "chromium-net-errors-test-{}-{}",
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
