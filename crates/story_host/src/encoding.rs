//! Percent-encoding for share-payload components.
//!
//! Everything outside the RFC 3986 unreserved set is encoded byte-wise over UTF-8, so emoji and
//! other non-ASCII captions survive the trip through a custom-scheme URI.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one URI query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Decodes a percent-encoded component back to UTF-8 text.
///
/// # Errors
///
/// Returns an error when the decoded bytes are not valid UTF-8.
pub fn decode_component(encoded: &str) -> Result<String, String> {
    percent_decode_str(encoded)
        .decode_utf8()
        .map(|text| text.into_owned())
        .map_err(|e| e.to_string())
}
