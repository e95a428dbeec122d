use rand::RngCore;

use crate::crypto::Fn;

/// A polynomial over the secp256k1 scalar field, stored lowest-degree
/// coefficient first (`coefficients[0]` is the constant term).
#[derive(Clone, Debug)]
pub struct Polynomial {
    coefficients: Vec<Fn>,
}

impl Polynomial {
    /// A random polynomial of degree `degree` (`degree + 1` coefficients,
    /// all uniformly sampled).
    pub fn random<R: RngCore>(degree: usize, rng: &mut R) -> Self {
        Self {
            coefficients: (0..=degree).map(|_| Fn::random(rng)).collect(),
        }
    }

    pub fn coefficients(&self) -> &[Fn] {
        &self.coefficients
    }

    pub fn set_constant_term(&mut self, value: Fn) {
        self.coefficients[0] = value;
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    pub fn evaluate(&self, x: &Fn) -> Fn {
        let mut iter = self.coefficients.iter().rev();
        let mut acc = *iter.next().expect("polynomial must carry at least one coefficient");
        for coefficient in iter {
            acc = acc.multiply(x).add(coefficient);
        }
        acc
    }
}
