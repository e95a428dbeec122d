use serde::{Deserialize, Serialize};

use super::point::Point;
use super::scalar::Fn;

/// The Feldman/Pedersen coefficient vector of a degree-`k-1` sharing
/// polynomial: `k` curve points, one per polynomial coefficient.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment(Vec<Point>);

impl Commitment {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn with_capacity(k: usize) -> Self {
        Self(Vec::with_capacity(k))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    /// Component-wise sum of the coefficient vectors. All commitments must
    /// share the same length `k`; see [`crate::mpc::aggregate::commit_sum`]
    /// for the batched form used by the share aggregator.
    pub fn add(&self, other: &Self) -> Self {
        assert_eq!(
            self.0.len(),
            other.0.len(),
            "commitments of mismatched degree cannot be added"
        );
        Self(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.add(b))
                .collect(),
        )
    }

    /// Evaluates the commitment as a curve-point polynomial at `x` using
    /// Horner's method, starting from the highest-order coefficient.
    /// Yields the Pedersen commitment of the share at `x`.
    pub fn eval(&self, x: &Fn) -> Point {
        let mut iter = self.0.iter().rev();
        let mut acc = *iter.next().expect("commitment must carry at least one coefficient");
        for coefficient in iter {
            acc = acc.scale(x).add(coefficient);
        }
        acc
    }
}
