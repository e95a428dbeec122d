//! The message-driven party state machine: the message envelope, the
//! `Share`/`Open` wire payloads, the share aggregator, and the `Party`
//! state machine itself.

pub mod aggregate;
pub mod envelope;
pub mod error;
pub mod party;
pub mod payload;

pub use envelope::{Message, MessageType};
pub use error::ProtocolError;
pub use party::{Party, PartyPhase, Progress};
