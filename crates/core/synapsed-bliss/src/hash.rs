//! Hash functions used by BLISS-B
//!
//! SHA3-512 hashes messages and derives challenges. The entropy pool can run
//! on either BLAKE2b-512 (production) or SHA3-512 (reference mode).

use blake2::Blake2b512;
use sha3::{Digest, Sha3_512};

/// Output length of every hash in this module
pub const HASH_BYTES: usize = 64;

/// 512-bit hash function selector for the entropy pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HashAlgorithm {
    /// BLAKE2b with 512-bit output
    #[default]
    Blake2b512,
    /// SHA3-512
    Sha3_512,
}

impl HashAlgorithm {
    /// Hash `input` into a 64-byte digest
    pub fn digest(self, input: &[u8]) -> [u8; HASH_BYTES] {
        match self {
            HashAlgorithm::Blake2b512 => blake2b_512(input),
            HashAlgorithm::Sha3_512 => sha3_512(input),
        }
    }
}

/// SHA3-512 of `input`
pub fn sha3_512(input: &[u8]) -> [u8; HASH_BYTES] {
    let mut hasher = Sha3_512::new();
    Digest::update(&mut hasher, input);
    hasher.finalize().into()
}

/// BLAKE2b-512 of `input`
pub fn blake2b_512(input: &[u8]) -> [u8; HASH_BYTES] {
    let mut hasher = Blake2b512::new();
    Digest::update(&mut hasher, input);
    hasher.finalize().into()
}
