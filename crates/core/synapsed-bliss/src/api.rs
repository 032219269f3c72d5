//! High-level API
//!
//! Free functions covering the whole life cycle: key generation, signing,
//! verification and the wire formats.
//!
//! ## Examples
//!
//! ```no_run
//! use synapsed_bliss::api::*;
//! use synapsed_bliss::params::Kind;
//!
//! let (private_key, public_key) = generate_key(Kind::B1, &[7u8; 64])?;
//!
//! let signature = sign(&private_key, b"Important message")?;
//! assert!(verify(&public_key, &signature, b"Important message")?);
//!
//! let bytes = serialize_signature(&signature)?;
//! let decoded = deserialize_signature(&bytes)?;
//! assert_eq!(decoded, signature);
//! # Ok::<(), synapsed_bliss::Error>(())
//! ```

use crate::config::BlissConfig;
use crate::entropy::SEED_BYTES;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::params::Kind;
use crate::secure_memory::SecureArray;
use crate::serialize;
use crate::signature::Signature;
use crate::traits::SecureRandom;

/// Generate a key pair from a 64-byte seed
pub fn generate_key(kind: Kind, seed: &[u8; SEED_BYTES]) -> Result<(PrivateKey, PublicKey)> {
    let private_key = PrivateKey::generate(kind, seed)?;
    let public_key = private_key.public_key();
    Ok((private_key, public_key))
}

/// Generate a key pair with a seed drawn from `rng`
pub fn generate_key_with_rng<R: SecureRandom>(kind: Kind, rng: &mut R) -> Result<(PrivateKey, PublicKey)> {
    let mut seed = SecureArray::<SEED_BYTES>::zero();
    rng.fill_bytes(seed.as_mut());
    generate_key(kind, seed.as_array())
}

/// Sign `message` with fresh operating system entropy
#[cfg(feature = "std")]
pub fn sign(private_key: &PrivateKey, message: &[u8]) -> Result<Signature> {
    private_key.sign(message)
}

/// Sign `message` deterministically from a 64-byte seed
pub fn sign_with_seed(
    private_key: &PrivateKey,
    message: &[u8],
    seed: &[u8; SEED_BYTES],
    config: &BlissConfig,
) -> Result<Signature> {
    private_key.sign_with_seed(message, seed, config)
}

/// Verify a signature
///
/// A signature that does not verify is `Ok(false)`; errors are reserved
/// for failures other than verification.
pub fn verify(public_key: &PublicKey, signature: &Signature, message: &[u8]) -> Result<bool> {
    match public_key.verify(signature, message) {
        Ok(()) => Ok(true),
        Err(Error::VerificationFailed(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

/// Verify a serialized signature against a serialized public key
///
/// Malformed encodings are errors, a well-formed signature that does not
/// verify is `Ok(false)`.
pub fn verify_bytes(public_key: &[u8], signature: &[u8], message: &[u8]) -> Result<bool> {
    let public_key = deserialize_public_key(public_key)?;
    let signature = deserialize_signature(signature)?;
    verify(&public_key, &signature, message)
}

/// Serialize a public key into `pk_size(kind)` bytes
pub fn serialize_public_key(public_key: &PublicKey) -> Vec<u8> {
    serialize::encode_public_key(public_key)
}

/// Parse a serialized public key
pub fn deserialize_public_key(bytes: &[u8]) -> Result<PublicKey> {
    serialize::decode_public_key(bytes)
}

/// Serialize a signature into `sig_size(kind)` bytes
pub fn serialize_signature(signature: &Signature) -> Result<Vec<u8>> {
    serialize::encode_signature(signature)
}

/// Parse a serialized signature
pub fn deserialize_signature(bytes: &[u8]) -> Result<Signature> {
    serialize::decode_signature(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::TestRng;

    #[test]
    fn generate_with_rng_is_reproducible() {
        let (_, a) = generate_key_with_rng(Kind::B0, &mut TestRng::new(1)).unwrap();
        let (_, b) = generate_key_with_rng(Kind::B0, &mut TestRng::new(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn verify_maps_failures_to_false() {
        let (sk, pk) = generate_key(Kind::B2, &[1; SEED_BYTES]).unwrap();
        let sig = sign_with_seed(&sk, b"api", &[2; SEED_BYTES], &BlissConfig::default()).unwrap();
        assert!(verify(&pk, &sig, b"api").unwrap());
        assert!(!verify(&pk, &sig, b"apj").unwrap());
    }

    #[test]
    fn verify_bytes_distinguishes_malformed_input() {
        let (sk, pk) = generate_key(Kind::B2, &[3; SEED_BYTES]).unwrap();
        let sig = sign_with_seed(&sk, b"bytes", &[4; SEED_BYTES], &BlissConfig::default()).unwrap();
        let pk_bytes = serialize_public_key(&pk);
        let sig_bytes = serialize_signature(&sig).unwrap();
        assert!(verify_bytes(&pk_bytes, &sig_bytes, b"bytes").unwrap());
        assert!(!verify_bytes(&pk_bytes, &sig_bytes, b"other").unwrap());
        assert!(verify_bytes(&pk_bytes[1..], &sig_bytes, b"bytes").is_err());
    }
}
