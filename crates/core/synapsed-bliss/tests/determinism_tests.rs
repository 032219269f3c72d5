//! Determinism tests
//!
//! Identical seeds and configuration must give byte-identical keys and
//! signatures.

use synapsed_bliss::api::{generate_key, serialize_public_key, serialize_signature};
use synapsed_bliss::config::BlissConfig;
use synapsed_bliss::entropy::{EntropyPool, SamplingMode};
use synapsed_bliss::hash::HashAlgorithm;
use synapsed_bliss::keys::PrivateKey;
use synapsed_bliss::params::Kind;

#[test]
fn test_key_generation_is_deterministic() {
    for kind in Kind::ALL {
        let (_, a) = generate_key(kind, &[0x42; 64]).unwrap();
        let (_, b) = generate_key(kind, &[0x42; 64]).unwrap();
        assert_eq!(serialize_public_key(&a), serialize_public_key(&b));
    }
}

#[test]
fn test_reference_signing_is_byte_identical() {
    let config = BlissConfig::reference();
    for kind in [Kind::B1, Kind::B3] {
        let sk = PrivateKey::generate_with_config(kind, &[0; 64], &config).unwrap();
        let first = sk.sign_with_seed(b"determinism", &[1; 64], &config).unwrap();
        let second = sk.sign_with_seed(b"determinism", &[1; 64], &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(serialize_signature(&first).unwrap(), serialize_signature(&second).unwrap());
    }
}

#[test]
fn test_seed_changes_signature() {
    let (sk, _) = generate_key(Kind::B2, &[0; 64]).unwrap();
    let config = BlissConfig::default();
    let a = sk.sign_with_seed(b"m", &[1; 64], &config).unwrap();
    let b = sk.sign_with_seed(b"m", &[2; 64], &config).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_entropy_hash_changes_keys() {
    let seed = [5u8; 64];
    let blake = PrivateKey::generate_with_config(Kind::B0, &seed, &BlissConfig::default()).unwrap();
    let sha3 = PrivateKey::generate_with_config(Kind::B0, &seed, &BlissConfig::reference()).unwrap();
    assert_ne!(blake.public_key(), sha3.public_key());
}

#[test]
fn test_shared_pool_continues_the_stream() {
    let seed = [9u8; 64];
    let mut pool = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Reference);
    let first = PrivateKey::generate_from_entropy(Kind::B0, &mut pool).unwrap();
    let second = PrivateKey::generate_from_entropy(Kind::B0, &mut pool).unwrap();
    assert_ne!(first.public_key(), second.public_key());

    let mut replay = EntropyPool::new(&seed, HashAlgorithm::Sha3_512, SamplingMode::Reference);
    let again = PrivateKey::generate_from_entropy(Kind::B0, &mut replay).unwrap();
    assert_eq!(first.public_key(), again.public_key());
}

#[test]
fn test_signing_from_pool_matches_seeded_signing() {
    let config = BlissConfig::reference();
    let sk = PrivateKey::generate_with_config(Kind::B4, &[3; 64], &config).unwrap();
    let seeded = sk.sign_with_seed(b"pool", &[4; 64], &config).unwrap();
    let mut pool = EntropyPool::new(&[4; 64], config.entropy_hash, config.sampling);
    let (pooled, _) = sk.sign_with_entropy(b"pool", &mut pool, None).unwrap();
    assert_eq!(seeded, pooled);
}
