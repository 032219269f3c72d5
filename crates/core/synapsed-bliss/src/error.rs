//! Error types for BLISS-B operations
//!
//! Malformed input and failed verification are kept apart: the former is
//! reported through the structural variants below, the latter always
//! through [`Error::VerificationFailed`].

use core::fmt;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during BLISS-B operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Kind byte outside `0..=4`
    #[error("invalid parameter kind {0}")]
    InvalidKind(u8),

    /// Serialized input with the wrong byte length for its kind
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Length required by the decoded kind
        expected: usize,
        /// Length supplied
        actual: usize,
    },

    /// Structurally malformed encoding
    #[error("malformed encoding: {0}")]
    Malformed(&'static str),

    /// Huffman payload that does not decode to exactly `n` symbols
    #[error("corrupt Huffman stream: {0}")]
    HuffmanCorrupt(&'static str),

    /// Decoded value outside the bounds of its parameter set
    #[error("value out of bounds: {0}")]
    OutOfBounds(&'static str),

    /// Signature whose compressed form does not fit the fixed wire size
    #[error("signature does not fit its wire layout ({bits} payload bits, {limit} available)")]
    SignatureTooLarge {
        /// Compressed payload length in bits
        bits: usize,
        /// Largest payload the layout can carry
        limit: usize,
    },

    /// Every key generation attempt produced a non-invertible `s1`
    #[error("key generation failed: no invertible s1 found after {0} attempts")]
    KeyGeneration(u32),

    /// Operating system randomness was unavailable
    #[error("random number generator failure")]
    Randomness,

    /// Signing hit the caller-imposed restart cap
    #[error("signing gave up after {0} restarts")]
    RestartLimit(u64),

    /// Broken arithmetic invariant; indicates a bug or a bad parameter table
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),

    /// The signature is well-formed but does not verify
    #[error("signature verification failed: {0}")]
    VerificationFailed(VerificationFailure),
}

impl Error {
    /// Whether this error is a verification outcome rather than bad input
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Error::VerificationFailed(_))
    }
}

/// Why a signature was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationFailure {
    /// Public key and signature belong to different parameter sets
    KindMismatch,
    /// `z1`/`z2` violate the infinity or L2 norm bound
    NormBound,
    /// Challenge vector has the wrong length or an index `>= n`
    MalformedChallenge,
    /// Recomputed challenge indices differ from the signature's
    ChallengeMismatch,
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationFailure::KindMismatch => write!(f, "kind mismatch"),
            VerificationFailure::NormBound => write!(f, "norm bound exceeded"),
            VerificationFailure::MalformedChallenge => write!(f, "malformed challenge"),
            VerificationFailure::ChallengeMismatch => write!(f, "challenge mismatch"),
        }
    }
}

impl From<VerificationFailure> for Error {
    fn from(reason: VerificationFailure) -> Self {
        Error::VerificationFailed(reason)
    }
}
