//! Per-party state machine for a Pedersen-verified Shamir multiplication-triple
//! protocol over secp256k1.
//!
//! A fixed set of `n` parties, each holding locally-chosen secrets `r` and
//! `s`, jointly compute a secret-shared product `r*s` without any party
//! learning another's contribution. [`mpc::party::Party`] is the entry point:
//! construct one per party, call [`mpc::party::Party::start`] once, then feed
//! it inbound [`mpc::envelope::Message`]s via
//! [`mpc::party::Party::handle`] until it reports the reconstructed output.
//!
//! Cryptographic primitives ([`crypto`]) are treated as building blocks with
//! a fixed contract; their internals (the secp256k1 group, the multiplication
//! zero-knowledge proof) are not meant to be swapped out by callers of the
//! party state machine.

pub mod crypto;
pub mod math;
pub mod mpc;
