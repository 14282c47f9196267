use serde::Deserialize;
use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ConfigError, MessageError};
use crate::http::body::Body;
use crate::http::headers::HeaderValue;

/// Options a [`Message`](crate::http::message::Message) is built from.
///
/// Nothing is validated here; [`Message::from_options`](crate::http::message::Message::from_options)
/// checks every field. Missing fields fall back to an empty body, no headers
/// and protocol version `1.1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub body: Option<Body>,
    pub headers: IndexMap<String, HeaderValue>,
    pub protocol_version: Option<String>,
}

/// Shape of a TOML options document before its loosely typed fields are
/// checked.
#[derive(Debug, Deserialize)]
struct RawOptions {
    body: Option<toml::Value>,
    #[serde(default)]
    headers: toml::Table,
    protocol_version: Option<toml::Value>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<HeaderValue>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn protocol_version(mut self, version: impl Into<String>) -> Self {
        self.protocol_version = Some(version.into());
        self
    }

    /// Reads options from a TOML document such as:
    ///
    /// ```toml
    /// protocol_version = "2.0"
    /// body = "hello"
    ///
    /// [headers]
    /// Content-Type = "text/plain"
    /// Accept = ["text/html", "application/json"]
    /// Cache-Control = { max-age = 60 }
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawOptions = toml::from_str(content)?;

        let body = match raw.body {
            Some(toml::Value::String(body)) => Some(Body::from_string(body)),
            Some(other) => {
                return Err(MessageError::InvalidBodyType {
                    type_name: other.type_str(),
                }
                .into());
            }
            None => None,
        };

        let protocol_version = match raw.protocol_version {
            Some(toml::Value::String(version)) => Some(version),
            Some(other) => {
                return Err(MessageError::InvalidProtocolVersionType {
                    type_name: other.type_str(),
                }
                .into());
            }
            None => None,
        };

        let headers = raw
            .headers
            .into_iter()
            .map(|(name, value)| Ok((name, HeaderValue::try_from(value)?)))
            .collect::<Result<IndexMap<_, _>, MessageError>>()?;

        Ok(Self {
            body,
            headers,
            protocol_version,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let options = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            headers = options.headers.len(),
            "loaded message options"
        );
        Ok(options)
    }
}

/// Coerces a loosely typed TOML value: strings and numbers become one value,
/// arrays of them a list, and tables `key=value` pairs.
impl TryFrom<toml::Value> for HeaderValue {
    type Error = MessageError;

    fn try_from(value: toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Array(items) => items
                .into_iter()
                .map(scalar_element)
                .collect::<Result<Vec<_>, _>>()
                .map(HeaderValue::List),
            toml::Value::Table(table) => table
                .into_iter()
                .map(|(key, value)| Ok((key, scalar_element(value)?)))
                .collect::<Result<Vec<_>, _>>()
                .map(HeaderValue::Pairs),
            scalar => scalar_element(scalar).map(HeaderValue::Single),
        }
    }
}

fn scalar_element(value: toml::Value) -> Result<String, MessageError> {
    match value {
        toml::Value::String(value) => Ok(value),
        toml::Value::Integer(value) => Ok(value.to_string()),
        toml::Value::Float(value) => Ok(value.to_string()),
        other => Err(MessageError::InvalidHeaderValueType {
            type_name: other.type_str(),
        }),
    }
}
