//! The share aggregator: pure, non-empty-input functions that
//! sum verifiable shares and commitment vectors component-wise, used to fold
//! the `n` per-peer sharings of `r` (and of `s`) into the verifiable share
//! and commitment of the jointly-distributed secret.

use crate::crypto::{Commitment, VerifiableShare};

/// Sums `shares`' `value` and `decommitment`; all inputs must carry the same
/// `index`.
pub fn vshare_sum(shares: &[VerifiableShare]) -> VerifiableShare {
    let mut iter = shares.iter();
    let first = *iter.next().expect("vshare_sum requires at least one share");
    iter.fold(first, |acc, share| acc.add(share))
}

/// Sums `commitments` component-wise; all inputs must have the same length.
pub fn commit_sum(commitments: &[Commitment]) -> Commitment {
    let mut iter = commitments.iter();
    let first = iter
        .next()
        .expect("commit_sum requires at least one commitment")
        .clone();
    iter.fold(first, |acc, commitment| acc.add(commitment))
}
