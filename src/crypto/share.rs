use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::commitment::Commitment;
use super::point::Point;
use super::scalar::Fn;
use crate::math::Polynomial;

/// A Shamir share of a secret, paired with a Pedersen decommitment that lets
/// any party check it against the sharing's [`Commitment`] without learning
/// the secret.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifiableShare {
    pub index: Fn,
    pub value: Fn,
    pub decommitment: Fn,
}

impl VerifiableShare {
    pub fn new(index: Fn, value: Fn, decommitment: Fn) -> Self {
        Self {
            index,
            value,
            decommitment,
        }
    }

    /// Component-wise addition on `value` and `decommitment`; both operands
    /// must carry the same `index`.
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(
            self.index, other.index,
            "verifiable shares must share the same index to be added"
        );
        Self {
            index: self.index,
            value: self.value.add(&other.value),
            decommitment: self.decommitment.add(&other.decommitment),
        }
    }
}

/// Checks `vshare` against `commitment` under Pedersen base `h`:
/// `value*G + decommitment*h == commitment.eval(index)`.
pub fn is_valid(h: &Point, commitment: &Commitment, vshare: &VerifiableShare) -> bool {
    let lhs = Point::base_exp(&vshare.value).add(&h.scale(&vshare.decommitment));
    let rhs = commitment.eval(&vshare.index);
    lhs.eq(&rhs)
}

/// Pedersen-verifiable Shamir split of `secret` into one share per entry of
/// `indices`, at threshold `k` (i.e. a degree-`k-1` sharing polynomial).
///
/// Samples a value polynomial `f` with `f(0) = secret` and an independent
/// decommitment polynomial `g`, both degree `k-1`; the `j`-th commitment
/// coefficient is `f_j*G + g_j*h`.
pub fn vss_split<R: RngCore>(
    indices: &[Fn],
    h: &Point,
    secret: Fn,
    k: usize,
    rng: &mut R,
) -> (Vec<VerifiableShare>, Commitment) {
    assert!(k >= 1, "threshold must allow at least the constant term");

    let mut value_poly = Polynomial::random(k - 1, rng);
    value_poly.set_constant_term(secret);
    let decommitment_poly = Polynomial::random(k - 1, rng);

    let commitment = Commitment::new(
        value_poly
            .coefficients()
            .iter()
            .zip(decommitment_poly.coefficients().iter())
            .map(|(f_j, g_j)| Point::base_exp(f_j).add(&h.scale(g_j)))
            .collect(),
    );

    let shares = indices
        .iter()
        .map(|index| {
            VerifiableShare::new(
                *index,
                value_poly.evaluate(index),
                decommitment_poly.evaluate(index),
            )
        })
        .collect();

    (shares, commitment)
}
