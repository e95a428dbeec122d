//! Non-interactive zero-knowledge proof that `product_commit` commits to the
//! product of the values committed by `a_commit` and `b_commit`, all under
//! the same Pedersen base `h`.
//!
//! Only the external contract is fixed (`Prove`/`Verify` over `(h,
//! aCommit, bCommit, productCommit)`); the construction below is this
//! crate's own. It is a linked pair of Schnorr proofs: one for the Pedersen
//! opening of `a_commit`, one for the linear relation
//! `product_commit = a*b_commit + gamma'*h` (which a Pedersen commitment to
//! `a*b` reduces to once `b_commit`'s own decommitment is folded in), bound
//! together by reusing the same random mask for the shared witness `a`.
//! Fiat-Shamir turns the three-move sigma protocol into a single message.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::point::Point;
use super::scalar::Fn;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MulProof {
    k1: Point,
    k2: Point,
    z_a: Fn,
    z_alpha: Fn,
    z_gamma: Fn,
}

fn challenge(
    h: &Point,
    a_commit: &Point,
    b_commit: &Point,
    product_commit: &Point,
    k1: &Point,
    k2: &Point,
) -> Fn {
    let mut transcript = Vec::with_capacity(6 * 33 + 8);
    transcript.extend_from_slice(b"pedersen-mul-mpc/mulproof/v1");
    for point in [h, a_commit, b_commit, product_commit, k1, k2] {
        transcript.extend_from_slice(&point.to_bytes());
    }
    Fn::from_transcript(&transcript)
}

/// Proves knowledge of `a, alpha, b, beta, tau` such that `a_commit = a*G +
/// alpha*h`, `b_commit = b*G + beta*h` and `product_commit = (a*b)*G + tau*h`.
#[allow(clippy::too_many_arguments)]
pub fn prove<R: RngCore>(
    h: &Point,
    a_commit: &Point,
    b_commit: &Point,
    product_commit: &Point,
    a: &Fn,
    b: &Fn,
    alpha: &Fn,
    beta: &Fn,
    tau: &Fn,
    rng: &mut R,
) -> MulProof {
    let k_a = Fn::random(rng);
    let k_alpha = Fn::random(rng);
    let k_gamma = Fn::random(rng);

    let k1 = Point::base_exp(&k_a).add(&h.scale(&k_alpha));
    let k2 = b_commit.scale(&k_a).add(&h.scale(&k_gamma));

    let e = challenge(h, a_commit, b_commit, product_commit, &k1, &k2);

    // gamma' folds b's own decommitment into product_commit's so that
    // `product_commit == a*b_commit + gamma'*h` holds for the same witness
    // `a` used in the opening proof of `a_commit`.
    let gamma_prime = tau.subtract(&a.multiply(beta));

    MulProof {
        k1,
        k2,
        z_a: k_a.add(&e.multiply(a)),
        z_alpha: k_alpha.add(&e.multiply(alpha)),
        z_gamma: k_gamma.add(&e.multiply(&gamma_prime)),
    }
}

pub fn verify(
    h: &Point,
    a_commit: &Point,
    b_commit: &Point,
    product_commit: &Point,
    proof: &MulProof,
) -> bool {
    let e = challenge(h, a_commit, b_commit, product_commit, &proof.k1, &proof.k2);

    let lhs1 = Point::base_exp(&proof.z_a).add(&h.scale(&proof.z_alpha));
    let rhs1 = proof.k1.add(&a_commit.scale(&e));

    let lhs2 = b_commit.scale(&proof.z_a).add(&h.scale(&proof.z_gamma));
    let rhs2 = proof.k2.add(&product_commit.scale(&e));

    lhs1.eq(&rhs1) && lhs2.eq(&rhs2)
}
