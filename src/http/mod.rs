use std::fmt;
use std::str::FromStr;

use crate::error::MessageError;

pub mod body;
pub mod headers;
pub mod message;
pub mod validator;

/// Protocol versions a [`Message`](message::Message) may carry.
/// Anything outside this set is rejected by [`validator::Validator::validate_protocol_version`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
pub enum ProtocolVersion {
    V1_0,
    #[default]
    V1_1,
    V2_0,
}

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V1_0 => "1.0",
            ProtocolVersion::V1_1 => "1.1",
            ProtocolVersion::V2_0 => "2.0",
        }
    }
}

impl FromStr for ProtocolVersion {
    type Err = MessageError;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        match version {
            "1.0" => Ok(ProtocolVersion::V1_0),
            "1.1" => Ok(ProtocolVersion::V1_1),
            "2.0" => Ok(ProtocolVersion::V2_0),
            _ => Err(MessageError::InvalidProtocolVersion {
                version: version.to_string(),
            }),
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
