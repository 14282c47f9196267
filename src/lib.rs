//! HTTP message value objects.
//!
//! A [`Message`] holds a protocol version, a case-insensitive multi-value
//! [`HeaderCollection`] and a [`Body`]. Header names, header values and
//! protocol versions are checked against their wire grammar whenever they
//! enter a message; the crate does not parse or serialize raw HTTP.

pub mod config;
pub mod error;
pub mod http;

pub use config::MessageOptions;
pub use error::{ConfigError, MessageError, Result};
pub use http::ProtocolVersion;
pub use http::body::Body;
pub use http::headers::{HeaderCollection, HeaderElement, HeaderEntry, HeaderValue};
pub use http::message::Message;
