/// Outcome of a failed batch verification.
///
/// Malformed encodings discovered during the solve step (a public key or
/// commitment that does not decompress, a non-canonical `s`) and a combined
/// equation that does not hold are collapsed into one variant: batch
/// verification does not localize faults. Callers that need to identify a
/// culprit re-verify entries individually.
#[derive(Debug, thiserror::Error)]
pub enum BatchVerifyError {
    /// The batch contains at least one malformed or invalid signature.
    #[error("batch verification equation was not satisfied")]
    InvalidSignature,
    /// The entropy source failed while drawing random coefficients.
    ///
    /// Never folded into a verification verdict: the soundness of the
    /// combined check depends on the coefficients being unpredictable.
    #[error("entropy source failed: {0}")]
    EntropySource(#[from] rand_core::Error),
}
