//! Probabilistic batch verification of Ed25519 signatures.
//!
//! Admit `(public key, signature, message)` triples into a [`Verifier`], then
//! decide the whole set with one randomized combined check. Rejection carries
//! no entry-level diagnostics; [`verify`] is the single-signature routine for
//! pinpointing failures after a batch rejects.

pub use batch::Verifier;
pub use errors::BatchVerifyError;
pub use signature::verify;

mod batch;
mod errors;
mod extras;
mod signature;
