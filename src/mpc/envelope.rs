use serde::{Deserialize, Serialize};

use super::error::ProtocolError;
use crate::crypto::Fn;

/// The wire tag of a [`Message`]. `Mul` and `Max` are reserved for a larger
/// protocol this core does not implement; they are rejected rather than
/// silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageType {
    Share,
    Open,
}

impl MessageType {
    const SHARE_TAG: u8 = 0;
    const MUL_TAG: u8 = 1;
    const OPEN_TAG: u8 = 2;
    const MAX_TAG: u8 = 3;

    fn tag(self) -> u8 {
        match self {
            MessageType::Share => Self::SHARE_TAG,
            MessageType::Open => Self::OPEN_TAG,
        }
    }

    fn from_tag(tag: u8) -> Result<Self, ProtocolError> {
        match tag {
            Self::SHARE_TAG => Ok(MessageType::Share),
            Self::OPEN_TAG => Ok(MessageType::Open),
            // Mul and Max are reserved for a larger protocol this core
            // does not implement.
            Self::MUL_TAG | Self::MAX_TAG => Err(ProtocolError::UnknownMessageType(tag)),
            _ => Err(ProtocolError::UnknownMessageType(tag)),
        }
    }
}

impl Serialize for MessageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tag().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = u8::deserialize(deserializer)?;
        Self::from_tag(tag).map_err(serde::de::Error::custom)
    }
}

/// A typed, addressed byte-carrier between parties. Routing
/// is by `to`; the state machine assumes at-most-one message per
/// `(from, type)` pair per recipient in a correct run, and tolerates
/// arbitrary interleaving and reordering otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub to: Fn,
    pub from: Fn,
    pub ty: MessageType,
    pub data: Vec<u8>,
}

impl Message {
    pub fn new(to: Fn, from: Fn, ty: MessageType, data: Vec<u8>) -> Self {
        Self { to, from, ty, data }
    }
}
