//! Batch verification of Ed25519 signatures.
//!
//! Batch verification asks whether all signatures in a set are valid, rather
//! than whether each of them is valid on its own. Admitted signatures are
//! kept as raw material; one solve step then draws a fresh random scalar
//! `z_i` per signature and checks the single combined equation
//!
//! ```text
//! [-sum(z_i * s_i)]B + sum([z_i]R_i) + sum([z_i * k_i]A_i) = 0
//! ```
//!
//! (cofactor-cleared), where for each signature `i`, `A_i` is the
//! verification key, `R_i` the signature's commitment, `s_i` the signature's
//! scalar, and `k_i = SHA-512(R_i || A_i || M_i)` reduced to a scalar. One
//! multiscalar multiplication replaces a per-signature double-base check, at
//! the cost of not learning which entry failed when the batch rejects.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::iter::once;

use curve25519_dalek::constants::ED25519_BASEPOINT_POINT;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::{IsIdentity, VartimeMultiscalarMul};
use ed25519_dalek::PUBLIC_KEY_LENGTH;
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

use crate::errors::BatchVerifyError;
use crate::extras::{unpack_point, unpack_scalar};
use crate::signature::SignatureBytes;

/// One admitted signature: the raw key and commitment encodings plus an
/// owned copy of the message. Immutable once admitted.
struct BatchEntry {
    public_key: [u8; PUBLIC_KEY_LENGTH],
    signature: SignatureBytes,
    message: Vec<u8>,
}

/// A batch verification context.
///
/// Entries are admitted with [`Verifier::add`] and the whole batch is
/// decided by [`Verifier::batch_verify`]. The batch only grows; solving
/// reads it without consuming it, so the same batch may be solved
/// repeatedly, with fresh randomness each time.
///
/// Not synchronized: concurrent admission into one `Verifier` requires
/// external serialization, or one instance per thread.
#[derive(Default)]
pub struct Verifier {
    entries: Vec<BatchEntry>,
}

impl Verifier {
    /// Constructs an empty batch.
    pub fn new() -> Verifier {
        Verifier::default()
    }

    /// Number of admitted signatures.
    pub fn batch_size(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no signatures.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Admits one `(public key, signature, message)` candidate into the
    /// batch.
    ///
    /// Validation is purely local shape checking, in order: the key must be
    /// exactly 32 bytes, the signature exactly 64 bytes, and the top three
    /// bits of the signature's last byte must be clear. The message is
    /// copied, so the caller's buffer may be reused afterwards. Returns
    /// `true` iff the entry was admitted; on `false` the batch is unchanged.
    ///
    /// No curve arithmetic runs here: key or commitment bytes that do not
    /// encode a curve point are still admitted and fail the batch at
    /// [`Verifier::batch_verify`] instead.
    pub fn add(&mut self, public_key: &[u8], signature: &[u8], message: &[u8]) -> bool {
        let Ok(public_key) = <[u8; PUBLIC_KEY_LENGTH]>::try_from(public_key) else {
            return false;
        };
        let Some(signature) = SignatureBytes::from_slice(signature) else {
            return false;
        };
        self.entries.push(BatchEntry { public_key, signature, message: message.to_vec() });
        true
    }

    /// Decides the whole batch with randomness from [`OsRng`].
    ///
    /// `Ok(())` means every admitted signature is valid; a batch of zero
    /// signatures verifies. [`BatchVerifyError::InvalidSignature`] means at
    /// least one entry is malformed or invalid, without saying which one.
    pub fn batch_verify(&self) -> Result<(), BatchVerifyError> {
        self.batch_verify_with_rng(&mut OsRng)
    }

    /// Decides the whole batch, drawing the random coefficients from `rng`.
    // The scalar algebra runs unchecked inside the curve library; there is
    // no checked variant to call.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn batch_verify_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(), BatchVerifyError> {
        let mut b_coeff = Scalar::ZERO;
        let mut r_coeffs = Vec::with_capacity(self.entries.len());
        let mut rs = Vec::with_capacity(self.entries.len());
        // One slot per distinct public key: signatures from the same signer
        // share a single decompressed point, whose coefficient accumulates
        // z_j * k_j over that signer's entries.
        let mut a_coeffs: Vec<Scalar> = Vec::new();
        let mut a_points: Vec<EdwardsPoint> = Vec::new();
        let mut key_slots: HashMap<[u8; PUBLIC_KEY_LENGTH], usize> = HashMap::new();

        for entry in &self.entries {
            let slot = match key_slots.entry(entry.public_key) {
                Entry::Occupied(occupied) => *occupied.get(),
                Entry::Vacant(vacant) => {
                    let a = unpack_point(&entry.public_key)
                        .ok_or(BatchVerifyError::InvalidSignature)?;
                    a_points.push(a);
                    a_coeffs.push(Scalar::ZERO);
                    *vacant.insert(a_points.len() - 1)
                }
            };
            let s = unpack_scalar(&entry.signature.s_bytes)
                .ok_or(BatchVerifyError::InvalidSignature)?;
            let z = random_coefficient(rng)?;
            let r = unpack_point(&entry.signature.r_bytes)
                .ok_or(BatchVerifyError::InvalidSignature)?;
            let k = challenge_scalar(entry);
            b_coeff -= z * s;
            r_coeffs.push(z);
            rs.push(r);
            a_coeffs[slot] += z * k;
        }

        let check = EdwardsPoint::vartime_multiscalar_mul(
            once(b_coeff).chain(r_coeffs).chain(a_coeffs),
            once(ED25519_BASEPOINT_POINT).chain(rs).chain(a_points),
        );

        // Clears any small-subgroup component before the identity
        // comparison.
        if check.mul_by_cofactor().is_identity() {
            Ok(())
        } else {
            Err(BatchVerifyError::InvalidSignature)
        }
    }
}

/// Draws one random coefficient: 128 random bits, zero-extended into a
/// scalar. The combined check requires at least 128 bits of min-entropy per
/// draw.
fn random_coefficient<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar, BatchVerifyError> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(Scalar::from(u128::from_le_bytes(bytes)))
}

/// `k = SHA-512(R || A || M)` reduced into a scalar, the same challenge as
/// in single-signature Ed25519 verification.
fn challenge_scalar(entry: &BatchEntry) -> Scalar {
    let mut h = Sha512::new();
    h.update(entry.signature.r_bytes);
    h.update(entry.public_key);
    h.update(&entry.message);
    Scalar::from_bytes_mod_order_wide(h.finalize().as_slice().try_into().unwrap())
}
