//! The shared shape of HTTP requests and responses.
//!
//! A [`Message`] is a value: every `with_*` method leaves the receiver
//! untouched and returns a new message that owns its own copy of the
//! headers. Bodies are immutable and may be shared between copies.
//!
//! Validation happens before anything is copied or committed, so a failed
//! call only produces an error.

use indexmap::IndexMap;
use tracing::debug;

use crate::config::MessageOptions;
use crate::error::Result;
use crate::http::ProtocolVersion;
use crate::http::body::Body;
use crate::http::headers::{HeaderCollection, HeaderValue};
use crate::http::validator::Validator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    protocol_version: ProtocolVersion,
    headers: HeaderCollection,
    body: Body,
}

impl Message {
    /// An HTTP/1.1 message with no headers and an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_options(options: MessageOptions) -> Result<Self> {
        let MessageOptions {
            body,
            headers,
            protocol_version,
        } = options;

        let protocol_version = match protocol_version {
            Some(version) => Validator::validate_protocol_version(&version)?,
            None => ProtocolVersion::default(),
        };
        let headers = HeaderCollection::from_pairs(headers)?;

        debug!(
            %protocol_version,
            headers = headers.len(),
            "built message from options"
        );

        Ok(Self {
            protocol_version,
            headers,
            body: body.unwrap_or_default(),
        })
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn protocol_version(&self) -> &'static str {
        self.protocol_version.as_str()
    }

    pub fn version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Values of the header, or `None` when the message does not carry it.
    pub fn header(&self, name: &str) -> Option<&[String]> {
        self.headers.get(name)
    }

    /// Values of the header; empty when the message does not carry it.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.get_values(name)
    }

    /// Values of the header joined with `", "`.
    pub fn header_line(&self, name: &str) -> String {
        self.headers.get_line(name)
    }

    /// Every header keyed by the casing it was first given.
    pub fn headers(&self) -> IndexMap<String, Vec<String>> {
        self.headers.all()
    }

    pub fn header_collection(&self) -> &HeaderCollection {
        &self.headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers.has(name)
    }

    pub fn with_body(&self, body: impl Into<Body>) -> Self {
        Self {
            body: body.into(),
            ..self.clone()
        }
    }

    pub fn with_appended_body(&self, more: &str) -> Self {
        Self {
            body: self.body.append(more),
            ..self.clone()
        }
    }

    pub fn with_header(&self, name: &str, value: impl Into<HeaderValue>) -> Result<Self> {
        self.with_headers(|headers| headers.set(name, value))
    }

    /// Adds values after the existing ones; on an absent header this is
    /// [`with_header`](Self::with_header).
    pub fn with_added_header(&self, name: &str, value: impl Into<HeaderValue>) -> Result<Self> {
        self.with_headers(|headers| headers.append(name, value))
    }

    pub fn with_prepended_header(
        &self,
        name: &str,
        value: impl Into<HeaderValue>,
    ) -> Result<Self> {
        self.with_headers(|headers| headers.prepend(name, value))
    }

    pub fn without_header(&self, name: &str) -> Self {
        let mut headers = self.headers.clone();
        headers.remove(name);
        Self {
            headers,
            ..self.clone()
        }
    }

    pub fn with_protocol_version(&self, version: &str) -> Result<Self> {
        let protocol_version = Validator::validate_protocol_version(version)?;
        Ok(Self {
            protocol_version,
            ..self.clone()
        })
    }

    fn with_headers<F>(&self, update: F) -> Result<Self>
    where
        F: FnOnce(&mut HeaderCollection) -> Result<()>,
    {
        let mut headers = self.headers.clone();
        update(&mut headers)?;
        Ok(Self {
            headers,
            protocol_version: self.protocol_version,
            body: self.body.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MessageError;

    #[test]
    fn defaults() {
        let message = Message::new();

        assert_eq!(message.protocol_version(), "1.1");
        assert!(message.body().is_empty());
        assert!(message.headers().is_empty());
    }

    #[test]
    fn with_header_does_not_touch_the_original() {
        let original = Message::new().with_header("test", "value1").unwrap();
        let copy = original.with_header("test", "value2").unwrap();

        assert_eq!(original.header_values("test"), ["value1"]);
        assert_eq!(copy.header_values("test"), ["value2"]);
    }

    #[test]
    fn failed_update_keeps_the_receiver() {
        let message = Message::new()
            .with_header("h", "a")
            .unwrap()
            .with_protocol_version("2.0")
            .unwrap();

        assert!(matches!(
            message.with_protocol_version("2.1"),
            Err(MessageError::InvalidProtocolVersion { .. })
        ));
        assert!(matches!(
            message.with_added_header("h", "\0"),
            Err(MessageError::InvalidHeaderValue { .. })
        ));
        assert_eq!(message.protocol_version(), "2.0");
        assert_eq!(message.header_values("h"), ["a"]);
    }

    #[test]
    fn header_copies_are_independent_but_bodies_are_shared() {
        let original = Message::new()
            .with_body("payload")
            .with_header("X-Trace", "1")
            .unwrap();
        let copy = original.with_prepended_header("x-trace", "0").unwrap();

        assert_eq!(original.header_values("x-trace"), ["1"]);
        assert_eq!(copy.header_values("x-trace"), ["0", "1"]);
        assert!(copy.body().shares_buffer(original.body()));
    }

    #[test]
    fn appended_body_is_a_new_buffer() {
        let original = Message::new().with_body("abc");
        let longer = original.with_appended_body("def");

        assert_eq!(original.body().contents(), "abc");
        assert_eq!(longer.body().contents(), "abcdef");
    }

    #[test]
    fn without_header_on_absent_header_is_harmless() {
        let message = Message::new().with_header("a", "1").unwrap();
        let stripped = message.without_header("missing");

        assert_eq!(stripped, message);
        assert!(!stripped.has_header("missing"));
    }
}
