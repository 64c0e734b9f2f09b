//! Helpers over curve25519-dalek types used by the batch equation.

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;

/// Decompresses a 32-byte Edwards point encoding.
pub(crate) fn unpack_point(bytes: &[u8; 32]) -> Option<EdwardsPoint> {
    CompressedEdwardsY(*bytes).decompress()
}

/// Strict scalar decode: accepts only the canonical encoding of a scalar
/// strictly below the group order.
pub(crate) fn unpack_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    Scalar::from_canonical_bytes(*bytes).into()
}
