use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::elliptic_curve::Group;
use k256::{EncodedPoint, ProjectivePoint};
use rand::RngCore;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use super::scalar::Fn;

/// A point on the secp256k1 curve.
///
/// Named methods (`scale`, `base_exp`, `add`, `eq`, `random`) rather than
/// operator overloads, matching the contract the party state machine is
/// written against.
#[derive(Clone, Copy, Debug)]
pub struct Point(ProjectivePoint);

impl Point {
    pub fn identity() -> Self {
        Self(ProjectivePoint::identity())
    }

    pub fn generator() -> Self {
        Self(ProjectivePoint::generator())
    }

    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        Self(ProjectivePoint::random(rng))
    }

    /// Fixed-base exponentiation: `scalar * G`.
    pub fn base_exp(scalar: &Fn) -> Self {
        Self(ProjectivePoint::generator() * scalar.inner())
    }

    /// Scalar multiplication of `self` by `scalar`.
    pub fn scale(&self, scalar: &Fn) -> Self {
        Self(self.0 * scalar.inner())
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    pub fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        // SEC1 compressed encoding: 33 bytes, deterministic per point.
        self.0.to_affine().to_encoded_point(true).as_bytes().to_vec()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let encoded = EncodedPoint::from_bytes(bytes).ok()?;
        let affine = k256::AffinePoint::from_encoded_point(&encoded);
        if bool::from(affine.is_some()) {
            Some(Self(ProjectivePoint::from(affine.unwrap())))
        } else {
            None
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        Point::eq(self, other)
    }
}

impl Eq for Point {}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_bytes().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = Vec::<u8>::deserialize(deserializer)?;
        Self::from_bytes(&bytes).ok_or_else(|| D::Error::custom("invalid curve point encoding"))
    }
}
