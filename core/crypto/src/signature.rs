//! Signature shape handling and the single-signature fallback.

use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH, Verifier as _, VerifyingKey};

/// A 64-byte Ed25519 signature split into its commitment and scalar halves.
pub(crate) struct SignatureBytes {
    pub(crate) r_bytes: [u8; 32],
    pub(crate) s_bytes: [u8; 32],
}

impl SignatureBytes {
    /// Splits a candidate signature, checking shape only: the length must be
    /// exactly 64 bytes and the top three bits of the final byte (the high
    /// byte of `s`) must be clear, so that `s` fits in 255 bits. Whether the
    /// halves decode into a curve point and a canonical scalar is not
    /// decided here.
    pub(crate) fn from_slice(signature: &[u8]) -> Option<Self> {
        if signature.len() != SIGNATURE_LENGTH {
            return None;
        }
        if signature[63] & 224 != 0 {
            return None;
        }
        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        r_bytes.copy_from_slice(&signature[..32]);
        s_bytes.copy_from_slice(&signature[32..]);
        Some(SignatureBytes { r_bytes, s_bytes })
    }
}

/// Verifies one signature with the standard (non-batch) Ed25519 routine.
///
/// Returns `false` for malformed input as well as for an invalid signature.
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
    let Ok(public_key) = <[u8; PUBLIC_KEY_LENGTH]>::try_from(public_key) else {
        return false;
    };
    let Ok(key) = VerifyingKey::from_bytes(&public_key) else {
        return false;
    };
    let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
        return false;
    };
    key.verify(message, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};
    use hex_literal::hex;
    use rand::rngs::OsRng;

    // RFC 8032 test vector TEST 1 (empty message).
    const PK: [u8; 32] =
        hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a");
    const SIG: [u8; 64] = hex!(
        "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155"
        "5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b"
    );

    #[test]
    fn test_rfc8032_vector() {
        assert!(verify(&PK, b"", &SIG));
        assert!(!verify(&PK, b"x", &SIG));
    }

    #[test]
    fn test_rfc8032_vector_batches() {
        let mut verifier = crate::Verifier::new();
        assert!(verifier.add(&PK, &SIG, b""));
        assert!(verifier.batch_verify().is_ok());
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let key = SigningKey::generate(&mut OsRng);
        let signature = key.sign(b"123").to_bytes();
        assert!(verify(key.verifying_key().as_bytes(), b"123", &signature));
        assert!(!verify(key.verifying_key().as_bytes(), b"124", &signature));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(!verify(&PK[..31], b"", &SIG));
        assert!(!verify(&PK, b"", &SIG[..63]));
        assert!(SignatureBytes::from_slice(&SIG).is_some());
        let mut high_bit = SIG;
        high_bit[63] |= 224;
        assert!(SignatureBytes::from_slice(&high_bit).is_none());
    }
}
