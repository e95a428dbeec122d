//! Scalar-polynomial helpers used to Shamir-split a secret and to
//! reconstruct one by Lagrange interpolation.
//!
//! The field is fixed to the secp256k1 scalar field (`crate::crypto::Fn`),
//! so a generic field trait buys nothing here; these helpers work directly
//! over `Fn`.

pub mod lagrange;
pub mod polynomial;

pub use polynomial::Polynomial;
