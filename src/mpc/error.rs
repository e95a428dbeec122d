use thiserror::Error;

/// Every fatal condition a [`crate::mpc::party::Party`] can hit. All of
/// them halt the party; there is no local recovery.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// `IsValid` failed on the inbound `r`-share or `s`-share (or both; the
    /// predicate is a disjunction — abort if *either* sub-share fails, not
    /// only when both do).
    #[error("inbound share failed Pedersen verification")]
    InvalidShare,

    /// `MulZKP.Verify` rejected an inbound product proof.
    #[error("inbound multiplication proof failed verification")]
    InvalidProof,

    /// A payload did not decode as the expected wire type.
    #[error("malformed payload: {0}")]
    Deserialization(#[from] bincode::Error),

    /// The envelope carried a reserved or unknown message type tag.
    #[error("unknown message type tag {0}")]
    UnknownMessageType(u8),

    /// `n < 2k-1`, duplicate indices, or a `k` inconsistent with the peer
    /// set — caught at construction, before any message is processed.
    #[error("invalid party configuration: {0}")]
    Configuration(String),
}
