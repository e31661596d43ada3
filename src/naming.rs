//! Identifier conversions between Chromium macro names and Rust/JS-style names.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `EMPTY_RESPONSE` | [`to_pascal_case`] | `EmptyResponse` |
//! | `EmptyResponse` | [`ensure_error_suffix`] | `EmptyResponseError` |
//! | `EmptyResponseError` | [`to_screaming_snake`] | `EMPTY_RESPONSE_ERROR` |
//! | `EMPTY_RESPONSE` | [`to_description`] | `ERR_EMPTY_RESPONSE` |

/// Suffix every variant name carries.
pub const ERROR_SUFFIX: &str = "Error";

/// Convert a SCREAMING_SNAKE macro name to PascalCase.
///
/// - `"EMPTY_RESPONSE"` → `"EmptyResponse"`
/// - `"HTTP2_PROTOCOL_ERROR"` → `"Http2ProtocolError"`
/// - `"HTTP_1_1_REQUIRED"` → `"Http11Required"`
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        })
        .collect()
}

/// Append `Error` unless the name already ends with it.
pub fn ensure_error_suffix(name: &str) -> String {
    if name.ends_with(ERROR_SUFFIX) {
        name.to_string()
    } else {
        format!("{name}{ERROR_SUFFIX}")
    }
}

/// Convert a PascalCase variant name to a SCREAMING_SNAKE constant name.
///
/// A word boundary is an upper-case letter that follows a lower-case letter
/// or a digit.
///
/// - `"EmptyResponseError"` → `"EMPTY_RESPONSE_ERROR"`
/// - `"Http11RequiredError"` → `"HTTP11_REQUIRED_ERROR"`
/// - `"H2OrQuicRequiredError"` → `"H2_OR_QUIC_REQUIRED_ERROR"`
pub fn to_screaming_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev = Some(c);
    }
    out
}

/// Short description key for a macro name, as Chromium prints it without
/// the `net::` namespace.
pub fn to_description(macro_name: &str) -> String {
    format!("ERR_{macro_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_conversion() {
        assert_eq!(to_pascal_case("EMPTY_RESPONSE"), "EmptyResponse");
        assert_eq!(to_pascal_case("FAILED"), "Failed");
        assert_eq!(to_pascal_case("SSL_PROTOCOL_ERROR"), "SslProtocolError");
        assert_eq!(to_pascal_case("PKCS12_IMPORT_BAD_PASSWORD"), "Pkcs12ImportBadPassword");
    }

    #[test]
    fn pascal_case_with_digit_segments() {
        assert_eq!(to_pascal_case("HTTP_1_1_REQUIRED"), "Http11Required");
        assert_eq!(to_pascal_case("TLS13_DOWNGRADE_DETECTED"), "Tls13DowngradeDetected");
    }

    #[test]
    fn suffix_is_appended_once() {
        assert_eq!(ensure_error_suffix("EmptyResponse"), "EmptyResponseError");
        assert_eq!(ensure_error_suffix("SslProtocolError"), "SslProtocolError");
    }

    #[test]
    fn screaming_snake_conversion() {
        assert_eq!(to_screaming_snake("EmptyResponseError"), "EMPTY_RESPONSE_ERROR");
        assert_eq!(to_screaming_snake("IoPendingError"), "IO_PENDING_ERROR");
        assert_eq!(to_screaming_snake("Http11RequiredError"), "HTTP11_REQUIRED_ERROR");
        assert_eq!(to_screaming_snake("H2OrQuicRequiredError"), "H2_OR_QUIC_REQUIRED_ERROR");
        assert_eq!(to_screaming_snake("Tls13DowngradeDetectedError"), "TLS13_DOWNGRADE_DETECTED_ERROR");
    }

    #[test]
    fn description_prefix() {
        assert_eq!(to_description("EMPTY_RESPONSE"), "ERR_EMPTY_RESPONSE");
    }
}
