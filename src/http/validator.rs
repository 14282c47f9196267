//! Wire-level legality checks for header names, header values and protocol
//! versions.
//!
//! Header names must be RFC 7230 tokens. Header values may only contain
//! printable ASCII and horizontal tabs; surrounding spaces and tabs are
//! stripped once a value has been accepted.

use tracing::debug;

use crate::error::{MessageError, Result};
use crate::http::ProtocolVersion;
use crate::http::headers::HeaderValue;

pub struct Validator;

impl Validator {
    /// Checks `name` against the token grammar and returns its canonical
    /// (lower-cased) form.
    pub fn validate_header_name(name: &str) -> Result<String> {
        if name.is_empty() || !name.bytes().all(is_token_byte) {
            debug!(name = %name.escape_debug(), "rejecting header name");
            return Err(MessageError::InvalidHeaderName {
                name: name.to_string(),
            });
        }

        Ok(name.to_ascii_lowercase())
    }

    /// Resolves `value` into the ordered list of strings stored for the header
    /// `name`. An empty list is refused.
    pub fn validate_header_value(name: &str, value: HeaderValue) -> Result<Vec<String>> {
        let values = value.into_values();
        if values.is_empty() {
            debug!(name, "rejecting empty header value");
            return Err(MessageError::EmptyHeaderValue {
                name: name.to_string(),
            });
        }

        values
            .into_iter()
            .map(|value| Self::filter_value(&value))
            .collect()
    }

    pub fn validate_protocol_version(version: &str) -> Result<ProtocolVersion> {
        version.parse().inspect_err(|_| {
            debug!(version = %version.escape_debug(), "rejecting protocol version");
        })
    }

    fn filter_value(value: &str) -> Result<String> {
        if !value.bytes().all(is_value_byte) {
            debug!(value = %value.escape_debug(), "rejecting header value");
            return Err(MessageError::InvalidHeaderValue {
                value: value.to_string(),
            });
        }

        Ok(value.trim_matches(|c: char| c == ' ' || c == '\t').to_string())
    }
}

// tchar from RFC 7230 section 3.2.6
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

fn is_value_byte(b: u8) -> bool {
    b == b'\t' || (0x20..=0x7e).contains(&b)
}
