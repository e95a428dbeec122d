use serde::{Deserialize, Serialize};

use super::error::ProtocolError;
use crate::crypto::{Commitment, MulProof, Point, VerifiableShare};

/// A verifiable share delivered point-to-point alongside the commitment it
/// can be checked against.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Sharing {
    pub vshare: VerifiableShare,
    pub commitment: Commitment,
}

impl Sharing {
    pub fn new(vshare: VerifiableShare, commitment: Commitment) -> Self {
        Self { vshare, commitment }
    }
}

/// The `Share`-phase payload: one sharing of `r`, one of `s`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RsSharing {
    pub r: Sharing,
    pub s: Sharing,
}

impl RsSharing {
    pub fn new(r: Sharing, s: Sharing) -> Self {
        Self { r, s }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// The `Open`-phase payload: a party's re-randomized product share plus the
/// commitments and proof a recipient needs to verify it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductMessage {
    pub product_share: VerifiableShare,
    pub product_commitment: Point,
    pub proof: MulProof,
    pub a_commit: Point,
    pub b_commit: Point,
}

impl ProductMessage {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProtocolError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProtocolError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
