use thiserror::Error;

/// Failures raised while building or deriving a [`Message`](crate::http::message::Message).
///
/// Every variant is a caller error: nothing here is transient, and the value
/// the failing call was made on is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("invalid header name: {name:?}")]
    InvalidHeaderName { name: String },

    #[error("invalid header value type: {type_name}")]
    InvalidHeaderValueType { type_name: &'static str },

    #[error("invalid header value: {value:?}")]
    InvalidHeaderValue { value: String },

    #[error("header value for {name:?} cannot be empty")]
    EmptyHeaderValue { name: String },

    #[error("invalid protocol version: {version:?}")]
    InvalidProtocolVersion { version: String },

    #[error("invalid protocol version type: {type_name}")]
    InvalidProtocolVersionType { type_name: &'static str },

    #[error("invalid body type: {type_name}")]
    InvalidBodyType { type_name: &'static str },
}

/// Failures raised while loading [`MessageOptions`](crate::config::MessageOptions)
/// from a TOML document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse message options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Message(#[from] MessageError),
}

pub type Result<T> = std::result::Result<T, MessageError>;
