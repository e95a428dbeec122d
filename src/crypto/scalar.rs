use k256::elliptic_curve::ops::Invert;
use k256::elliptic_curve::PrimeField;
use rand::RngCore;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// A scalar in the secp256k1 prime-order field.
///
/// Named methods (`add`, `multiply`, `negate`, `subtract`, `equal`,
/// `random`) rather than operator overloads, matching the field algebra's
/// own vocabulary.
#[derive(Clone, Copy, Debug, Zeroize)]
pub struct Fn(k256::Scalar);

impl Fn {
    pub fn zero() -> Self {
        Self(k256::Scalar::ZERO)
    }

    pub fn one() -> Self {
        Self(k256::Scalar::ONE)
    }

    /// Builds a scalar from a small integer, as used for party indices `1..=n`.
    pub fn from_u64(value: u64) -> Self {
        Self(k256::Scalar::from(value))
    }

    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        // Rejection sampling against the field modulus keeps the
        // distribution uniform without depending on a crate-specific
        // "random scalar" entry point.
        loop {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            if let Some(scalar) = Self::from_bytes(&bytes) {
                return scalar;
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    pub fn negate(&self) -> Self {
        Self(-self.0)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self(self.0 - other.0)
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Multiplicative inverse; `None` for the zero scalar.
    pub fn invert(&self) -> Option<Self> {
        let inv = self.0.invert();
        if bool::from(inv.is_some()) {
            Some(Self(inv.unwrap()))
        } else {
            None
        }
    }

    pub fn is_zero(&self) -> bool {
        self.equal(&Self::zero())
    }

    pub(crate) fn inner(&self) -> &k256::Scalar {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let repr: k256::FieldBytes = (*bytes).into();
        let candidate = k256::Scalar::from_repr(repr);
        if bool::from(candidate.is_some()) {
            Some(Self(candidate.unwrap()))
        } else {
            None
        }
    }

    /// Derives a scalar from an arbitrary-length transcript via SHA-256,
    /// counter-mode rejection sampling against the field modulus. Used to
    /// turn a Fiat-Shamir transcript into the verifier's challenge.
    pub fn from_transcript(transcript: &[u8]) -> Self {
        use sha2::{Digest, Sha256};

        let mut counter: u32 = 0;
        loop {
            let mut hasher = Sha256::new();
            hasher.update(transcript);
            hasher.update(counter.to_le_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            if let Some(scalar) = Self::from_bytes(&digest) {
                return scalar;
            }
            counter += 1;
        }
    }
}

impl PartialEq for Fn {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Fn {}

impl std::hash::Hash for Fn {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state);
    }
}

impl Serialize for Fn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bytes().to_vec().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| D::Error::custom("scalar must be exactly 32 bytes"))?;
        Self::from_bytes(&array).ok_or_else(|| D::Error::custom("scalar is not canonically reduced"))
    }
}
